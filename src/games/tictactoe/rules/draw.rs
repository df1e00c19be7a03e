//! Draw detection.

use super::super::{Board, Square};
use super::win::check_winner;

/// Checks if the board is full (no empty cell).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no complete line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
