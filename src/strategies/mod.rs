//! Move-selection strategies.
//!
//! Every strategy is bound to one mark at construction and answers a single
//! question: given the current board, where should that mark go next. The
//! driver only ever holds `Box<dyn Strategy>`, so players can be swapped at
//! configuration time.

mod alpha_beta;
mod fixed_order;
mod human;
mod minimax;
mod monte_carlo;
pub mod search;
mod uniform_random;

pub use alpha_beta::AlphaBeta;
pub use fixed_order::FixedOrder;
pub use human::HumanStrategy;
pub use minimax::Minimax;
pub use monte_carlo::{DEFAULT_SIMULATIONS, MonteCarlo, MonteCarloConfig};
pub use search::{SearchConfig, SearchReport};
pub use uniform_random::UniformRandom;

use crate::error::StrategyError;
use crate::games::tictactoe::{Board, Coord, Mark, legal_moves};

/// Trait for players that can choose moves.
pub trait Strategy: Send {
    /// Chooses a cell for this strategy's mark.
    ///
    /// The board is the authoritative position at call time; strategies
    /// explore hypothetical moves on their own copies.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::NoLegalMoves` if the board has no empty cell.
    fn select_move(&mut self, board: &Board) -> Result<Coord, StrategyError>;

    /// The mark this strategy plays.
    fn mark(&self) -> Mark;

    /// Returns the strategy's display name.
    fn name(&self) -> &str;
}

/// Legal moves, or the precondition error when there are none.
pub(crate) fn require_moves(board: &Board) -> Result<Vec<Coord>, StrategyError> {
    let moves = legal_moves(board);
    if moves.is_empty() {
        Err(StrategyError::NoLegalMoves)
    } else {
        Ok(moves)
    }
}
