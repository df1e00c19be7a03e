//! Fixed-priority strategy.

use super::Strategy;
use crate::error::StrategyError;
use crate::games::tictactoe::{Board, Coord, Mark, rules::priority_order};
use tracing::{debug, instrument};

/// Plays the first empty cell of a fixed list: center, corners, then edges.
///
/// Not optimality-aware; it will happily ignore an immediate win.
#[derive(Debug, Clone)]
pub struct FixedOrder {
    name: String,
    mark: Mark,
}

impl FixedOrder {
    /// Creates a new fixed-order strategy.
    pub fn new(mark: Mark) -> Self {
        Self {
            name: format!("FixedOrder({})", mark),
            mark,
        }
    }
}

impl Strategy for FixedOrder {
    #[instrument(skip_all, fields(strategy = %self.name))]
    fn select_move(&mut self, board: &Board) -> Result<Coord, StrategyError> {
        let coord = priority_order(board.size())
            .into_iter()
            .find(|c| board.is_empty(*c))
            .ok_or(StrategyError::NoLegalMoves)?;
        debug!(%coord, "Fixed order chose cell");
        Ok(coord)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_center_first() {
        let mut strategy = FixedOrder::new(Mark::X);
        assert_eq!(strategy.select_move(&Board::new()), Ok(Coord::new(1, 1)));
    }

    #[test]
    fn test_falls_through_to_corners_then_edges() {
        let mut strategy = FixedOrder::new(Mark::O);
        let board: Board = "X../.X./...".parse().unwrap();
        assert_eq!(strategy.select_move(&board), Ok(Coord::new(0, 2)));

        let board: Board = "XOX/.X./O.O".parse().unwrap();
        assert_eq!(strategy.select_move(&board), Ok(Coord::new(1, 0)));
    }

    #[test]
    fn test_full_board_is_a_precondition_violation() {
        let mut strategy = FixedOrder::new(Mark::X);
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(strategy.select_move(&board), Err(StrategyError::NoLegalMoves));
    }
}
