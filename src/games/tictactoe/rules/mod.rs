//! Game rules for grid games.
//!
//! Pure functions over a [`Board`]: terminal-state detection, legal move
//! enumeration and static evaluation. Nothing here keeps state between
//! calls, so search code can call them at every node.

pub mod draw;
pub mod heuristic;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full};
pub use heuristic::{EmptyCellPolicy, heuristic_score, max_heuristic, win_score};
pub use moves::{legal_moves, priority_order};
pub use win::check_winner;

use super::{Board, Outcome};

/// Classifies the board as won, tied or still in progress.
///
/// A complete line takes precedence over a full board.
pub fn terminal_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::Ongoing
    }
}
