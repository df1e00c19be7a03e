//! Mark balance invariant: X moves first and players alternate.

use super::super::{Board, Game, Mark};
use super::Invariant;

/// Invariant: count(X) - count(O) is 0 or 1.
pub struct MarkBalanceInvariant;

impl MarkBalanceInvariant {
    /// Checks the balance on a bare board.
    pub fn board_holds(board: &Board) -> bool {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        x == o || x == o + 1
    }
}

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        Self::board_holds(game.board())
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}
