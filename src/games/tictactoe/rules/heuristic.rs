//! Static positional evaluation.
//!
//! Cells are weighted by class: center 10, corner 5, edge 1. The score for
//! a mark is the weight it holds minus the weight held against it. Search
//! uses the score only at tie leaves and depth cutoffs; decisive positions
//! are scored with [`win_score`], which always dominates it.

use super::super::{Board, CellClass, Coord, Mark, Square};
use serde::{Deserialize, Serialize};

/// Smallest win magnitude ever used.
pub const BASE_WIN_SCORE: i32 = 50;

/// How empty cells count in [`heuristic_score`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EmptyCellPolicy {
    /// Empty cells count for neither side.
    #[default]
    Ignore,
    /// Every cell not held by the scoring mark, empty or not, counts for
    /// the opponent.
    CreditOpponent,
}

/// Weighted cell balance from `mark`'s point of view.
pub fn heuristic_score(board: &Board, mark: Mark, policy: EmptyCellPolicy) -> i32 {
    let size = board.size();
    board
        .cells()
        .map(|(coord, sq)| {
            let weight = CellClass::of(coord, size).weight();
            match (sq, policy) {
                (Square::Occupied(m), _) if m == mark => weight,
                (Square::Occupied(_), _) => -weight,
                (Square::Empty, EmptyCellPolicy::Ignore) => 0,
                (Square::Empty, EmptyCellPolicy::CreditOpponent) => -weight,
            }
        })
        .sum()
}

/// Largest absolute heuristic score on a board of the given size.
pub fn max_heuristic(size: usize) -> i32 {
    (0..size * size)
        .map(|i| CellClass::of(Coord::from_index(i, size), size).weight())
        .sum()
}

/// Magnitude used for decisive positions; strictly above any heuristic score.
pub fn win_score(size: usize) -> i32 {
    BASE_WIN_SCORE.max(max_heuristic(size) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_scores() {
        let board = Board::new();
        assert_eq!(heuristic_score(&board, Mark::X, EmptyCellPolicy::Ignore), 0);
        assert_eq!(
            heuristic_score(&board, Mark::X, EmptyCellPolicy::CreditOpponent),
            -34
        );
    }

    #[test]
    fn test_weights_by_class() {
        let board: Board = "X.O/.X./...".parse().unwrap();
        // X: corner + center = 15, O: corner = 5
        assert_eq!(heuristic_score(&board, Mark::X, EmptyCellPolicy::Ignore), 10);
        assert_eq!(heuristic_score(&board, Mark::O, EmptyCellPolicy::Ignore), -10);
        // Empty cells: two corners and four edges = 14 more against X
        assert_eq!(
            heuristic_score(&board, Mark::X, EmptyCellPolicy::CreditOpponent),
            -4
        );
    }

    #[test]
    fn test_policies_agree_on_full_boards() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(
            heuristic_score(&board, Mark::O, EmptyCellPolicy::Ignore),
            heuristic_score(&board, Mark::O, EmptyCellPolicy::CreditOpponent)
        );
    }

    #[test]
    fn test_win_score_dominates_heuristic() {
        assert_eq!(max_heuristic(3), 34);
        assert_eq!(win_score(3), 50);
        for size in 1..8 {
            assert!(win_score(size) > max_heuristic(size));
        }
    }

    #[test]
    fn test_policy_parses_from_kebab_case() {
        assert_eq!(
            "credit-opponent".parse::<EmptyCellPolicy>().ok(),
            Some(EmptyCellPolicy::CreditOpponent)
        );
        assert_eq!(EmptyCellPolicy::Ignore.to_string(), "ignore");
    }
}
