//! Win detection for N x N boards.

use super::super::{Board, Coord, Mark};

/// Returns the mark holding every cell of the line, if any.
fn line_owner(board: &Board, mut cells: impl Iterator<Item = Coord>) -> Option<Mark> {
    let first = board.get(cells.next()?)?.mark()?;
    cells
        .all(|c| board.get(c).and_then(|sq| sq.mark()) == Some(first))
        .then_some(first)
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if the mark fills a complete row, column or
/// diagonal, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    let n = board.size();
    (0..n)
        .find_map(|row| line_owner(board, (0..n).map(move |col| Coord::new(row, col))))
        .or_else(|| {
            (0..n).find_map(|col| line_owner(board, (0..n).map(move |row| Coord::new(row, col))))
        })
        .or_else(|| line_owner(board, (0..n).map(|i| Coord::new(i, i))))
        .or_else(|| line_owner(board, (0..n).map(|i| Coord::new(i, n - 1 - i))))
}
