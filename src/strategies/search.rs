//! Shared machinery for adversarial tree search.
//!
//! Values are always from the searching mark's point of view: positive is
//! good for the root player. Decisive positions score `±win_score(size)`;
//! ties and depth cutoffs score with the static heuristic.

use crate::error::ConfigError;
use crate::games::tictactoe::rules::{EmptyCellPolicy, heuristic_score, win_score};
use crate::games::tictactoe::{Board, Coord, Mark, Outcome, terminal_outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Tuning shared by Minimax and AlphaBeta.
///
/// Both strategies must be given the same config for their choices to be
/// comparable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawSearchConfig")]
pub struct SearchConfig {
    /// Plies below the root after which positions are scored statically.
    /// `None` searches to the end of the game.
    max_depth: Option<usize>,
    /// How empty cells count in the heuristic.
    empty_cells: EmptyCellPolicy,
}

impl SearchConfig {
    /// Creates a search config, rejecting a zero depth limit.
    pub fn new(max_depth: Option<usize>, empty_cells: EmptyCellPolicy) -> Result<Self, ConfigError> {
        if max_depth == Some(0) {
            return Err(ConfigError::new("Search depth limit must be at least 1"));
        }
        Ok(Self {
            max_depth,
            empty_cells,
        })
    }
}

/// Unchecked wire form of [`SearchConfig`].
#[derive(Deserialize)]
struct RawSearchConfig {
    #[serde(default)]
    max_depth: Option<usize>,
    #[serde(default)]
    empty_cells: EmptyCellPolicy,
}

impl TryFrom<RawSearchConfig> for SearchConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSearchConfig) -> Result<Self, Self::Error> {
        Self::new(raw.max_depth, raw.empty_cells)
    }
}

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Value of the root position.
    pub value: i32,
    /// Move achieving the value, `None` only when no move exists.
    pub best: Option<Coord>,
    /// Nodes expanded.
    pub nodes: u64,
}

/// Whose turn it is at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The root mark is to move.
    Maximizing,
    /// The opponent is to move.
    Minimizing,
}

impl Role {
    /// The other role.
    pub fn flip(self) -> Self {
        match self {
            Role::Maximizing => Role::Minimizing,
            Role::Minimizing => Role::Maximizing,
        }
    }

    /// Whether `value` is strictly better than `incumbent` for this role.
    pub fn improves(self, value: i32, incumbent: i32) -> bool {
        match self {
            Role::Maximizing => value > incumbent,
            Role::Minimizing => value < incumbent,
        }
    }
}

/// What placing a mark did to the position.
pub(crate) enum Child {
    /// The mover completed a line.
    Decisive(i32),
    /// The board filled up without a line.
    Tied(i32),
    /// Play continues from this board.
    Open(Board),
}

/// Per-search state: the root mark, tuning and node counter.
pub(crate) struct Searcher {
    me: Mark,
    config: SearchConfig,
    win: i32,
    pub(crate) nodes: u64,
}

impl Searcher {
    pub(crate) fn new(me: Mark, config: SearchConfig, size: usize) -> Self {
        Self {
            me,
            config,
            win: win_score(size),
            nodes: 0,
        }
    }

    fn mover(&self, role: Role) -> Mark {
        match role {
            Role::Maximizing => self.me,
            Role::Minimizing => self.me.opponent(),
        }
    }

    /// Static score of a board from the root mark's point of view.
    pub(crate) fn static_value(&self, board: &Board) -> i32 {
        heuristic_score(board, self.me, self.config.empty_cells)
    }

    /// Whether a node at this depth is scored without expanding it.
    pub(crate) fn cut_off(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|limit| depth >= limit)
    }

    /// Plays `coord` for the side on move and classifies the result.
    pub(crate) fn expand(&self, board: &Board, coord: Coord, role: Role) -> Child {
        let mover = self.mover(role);
        let mut child = board.clone();
        child.play(coord, mover);
        match terminal_outcome(&child) {
            Outcome::Win(winner) if winner == self.me => Child::Decisive(self.win),
            Outcome::Win(_) => Child::Decisive(-self.win),
            Outcome::Tie => Child::Tied(self.static_value(&child)),
            Outcome::Ongoing => Child::Open(child),
        }
    }
}

/// Folds a candidate into the running best for a role, keeping the first
/// move that reaches the extremum.
pub(crate) fn keep_best(best: &mut Option<(i32, Coord)>, role: Role, value: i32, coord: Coord) {
    if best.is_none_or(|(incumbent, _)| role.improves(value, incumbent)) {
        *best = Some((value, coord));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialized_config_is_checked() {
        let err = serde_json::from_str::<SearchConfig>(r#"{"max_depth":0,"empty_cells":"ignore"}"#);
        assert!(err.is_err());

        let config: SearchConfig =
            serde_json::from_str(r#"{"max_depth":2,"empty_cells":"credit-opponent"}"#).unwrap();
        assert_eq!(*config.max_depth(), Some(2));
        assert_eq!(*config.empty_cells(), EmptyCellPolicy::CreditOpponent);
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert!(SearchConfig::new(Some(0), EmptyCellPolicy::Ignore).is_err());
        assert!(SearchConfig::new(Some(2), EmptyCellPolicy::Ignore).is_ok());
        assert_eq!(SearchConfig::default().max_depth(), &None);
    }

    #[test]
    fn test_expand_scores_from_root_view() {
        let searcher = Searcher::new(Mark::O, SearchConfig::default(), 3);
        let board: Board = "XX./OO./...".parse().unwrap();

        // O completing the middle row is a win for the root.
        assert!(matches!(
            searcher.expand(&board, Coord::new(1, 2), Role::Maximizing),
            Child::Decisive(50)
        ));
        // X completing the top row is a loss for the root.
        assert!(matches!(
            searcher.expand(&board, Coord::new(0, 2), Role::Minimizing),
            Child::Decisive(-50)
        ));
        assert!(matches!(
            searcher.expand(&board, Coord::new(2, 2), Role::Maximizing),
            Child::Open(_)
        ));
    }

    #[test]
    fn test_first_extremum_kept() {
        let mut best = None;
        keep_best(&mut best, Role::Maximizing, 3, Coord::new(0, 0));
        keep_best(&mut best, Role::Maximizing, 3, Coord::new(0, 1));
        keep_best(&mut best, Role::Maximizing, 1, Coord::new(0, 2));
        assert_eq!(best, Some((3, Coord::new(0, 0))));

        let mut best = None;
        keep_best(&mut best, Role::Minimizing, 3, Coord::new(0, 0));
        keep_best(&mut best, Role::Minimizing, -2, Coord::new(1, 1));
        assert_eq!(best, Some((-2, Coord::new(1, 1))));
    }

    #[test]
    fn test_depth_cutoff() {
        let unlimited = Searcher::new(Mark::X, SearchConfig::default(), 3);
        assert!(!unlimited.cut_off(100));

        let config = SearchConfig::new(Some(2), EmptyCellPolicy::Ignore).unwrap();
        let limited = Searcher::new(Mark::X, config, 3);
        assert!(!limited.cut_off(1));
        assert!(limited.cut_off(2));
    }
}
