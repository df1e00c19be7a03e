//! Minimax with alpha-beta pruning.

use super::search::{Child, Role, SearchConfig, SearchReport, Searcher, keep_best};
use super::{Strategy, require_moves};
use crate::error::StrategyError;
use crate::games::tictactoe::{Board, Coord, Mark, legal_moves};
use tracing::{debug, instrument};

const INFINITY: i32 = i32::MAX;

/// Minimax that skips subtrees which cannot change the root value.
///
/// With the same [`SearchConfig`] it returns the same move as [`super::Minimax`]
/// on every board while expanding far fewer nodes.
#[derive(Debug, Clone)]
pub struct AlphaBeta {
    name: String,
    mark: Mark,
    config: SearchConfig,
}

impl AlphaBeta {
    /// Creates a full-depth alpha-beta strategy.
    pub fn new(mark: Mark) -> Self {
        Self::with_config(mark, SearchConfig::default())
    }

    /// Creates an alpha-beta strategy with explicit tuning.
    pub fn with_config(mark: Mark, config: SearchConfig) -> Self {
        Self {
            name: format!("AlphaBeta({})", mark),
            mark,
            config,
        }
    }

    /// Searches the board and reports the root value and move.
    #[instrument(skip_all, fields(strategy = %self.name))]
    pub fn search(&self, board: &Board) -> SearchReport {
        let mut searcher = Searcher::new(self.mark, self.config, board.size());
        let (value, best) =
            alpha_beta(&mut searcher, board, Role::Maximizing, 0, -INFINITY, INFINITY);
        SearchReport {
            value,
            best,
            nodes: searcher.nodes,
        }
    }
}

/// `alpha` is the best value the maximizer can already force on this path,
/// `beta` the best the minimizer can. A node returns as soon as one of its
/// children proves the other side will avoid it; the returned value is that
/// child's own value.
fn alpha_beta(
    s: &mut Searcher,
    board: &Board,
    role: Role,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
) -> (i32, Option<Coord>) {
    s.nodes += 1;
    if s.cut_off(depth) {
        return (s.static_value(board), None);
    }

    let mut best = None;
    for coord in legal_moves(board) {
        let value = match s.expand(board, coord, role) {
            Child::Decisive(value) => return (value, Some(coord)),
            Child::Tied(value) => value,
            Child::Open(child) => alpha_beta(s, &child, role.flip(), depth + 1, alpha, beta).0,
        };
        keep_best(&mut best, role, value, coord);

        match role {
            Role::Maximizing => {
                if value >= beta {
                    return (value, Some(coord));
                }
                alpha = alpha.max(value);
            }
            Role::Minimizing => {
                if value <= alpha {
                    return (value, Some(coord));
                }
                beta = beta.min(value);
            }
        }
    }

    match best {
        Some((value, coord)) => (value, Some(coord)),
        None => (s.static_value(board), None),
    }
}

impl Strategy for AlphaBeta {
    fn select_move(&mut self, board: &Board) -> Result<Coord, StrategyError> {
        require_moves(board)?;
        let report = self.search(board);
        debug!(
            strategy = %self.name,
            value = report.value,
            nodes = report.nodes,
            best = ?report.best,
            "Alpha-beta search complete"
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
