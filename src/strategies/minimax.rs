//! Exhaustive minimax search.

use super::search::{Child, Role, SearchConfig, SearchReport, Searcher, keep_best};
use super::{Strategy, require_moves};
use crate::error::StrategyError;
use crate::games::tictactoe::{Board, Coord, Mark, legal_moves};
use tracing::{debug, instrument};

/// Plain minimax with no pruning.
///
/// Without a depth limit the whole game tree is walked on every call, which
/// is only practical on small boards.
#[derive(Debug, Clone)]
pub struct Minimax {
    name: String,
    mark: Mark,
    config: SearchConfig,
}

impl Minimax {
    /// Creates a full-depth minimax strategy.
    pub fn new(mark: Mark) -> Self {
        Self::with_config(mark, SearchConfig::default())
    }

    /// Creates a minimax strategy with explicit tuning.
    pub fn with_config(mark: Mark, config: SearchConfig) -> Self {
        Self {
            name: format!("Minimax({})", mark),
            mark,
            config,
        }
    }

    /// Searches the board and reports the root value and move.
    #[instrument(skip_all, fields(strategy = %self.name))]
    pub fn search(&self, board: &Board) -> SearchReport {
        let mut searcher = Searcher::new(self.mark, self.config, board.size());
        let (value, best) = minimax(&mut searcher, board, Role::Maximizing, 0);
        SearchReport {
            value,
            best,
            nodes: searcher.nodes,
        }
    }
}

fn minimax(s: &mut Searcher, board: &Board, role: Role, depth: usize) -> (i32, Option<Coord>) {
    s.nodes += 1;
    if s.cut_off(depth) {
        return (s.static_value(board), None);
    }

    let mut best = None;
    for coord in legal_moves(board) {
        let value = match s.expand(board, coord, role) {
            Child::Decisive(value) => return (value, Some(coord)),
            Child::Tied(value) => value,
            Child::Open(child) => minimax(s, &child, role.flip(), depth + 1).0,
        };
        keep_best(&mut best, role, value, coord);
    }

    match best {
        Some((value, coord)) => (value, Some(coord)),
        None => (s.static_value(board), None),
    }
}

impl Strategy for Minimax {
    fn select_move(&mut self, board: &Board) -> Result<Coord, StrategyError> {
        require_moves(board)?;
        let report = self.search(board);
        debug!(
            strategy = %self.name,
            value = report.value,
            nodes = report.nodes,
            best = ?report.best,
            "Minimax search complete"
        );
        report.best.ok_or(StrategyError::NoLegalMoves)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
