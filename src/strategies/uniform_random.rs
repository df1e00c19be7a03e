//! Uniformly random strategy.

use super::{Strategy, require_moves};
use crate::error::StrategyError;
use crate::games::tictactoe::{Board, Coord, Mark};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks uniformly among the empty cells.
///
/// The random source is injected so a fixed seed reproduces every choice.
#[derive(Debug, Clone)]
pub struct UniformRandom<R = StdRng> {
    name: String,
    mark: Mark,
    rng: R,
}

impl<R: Rng + Send> UniformRandom<R> {
    /// Creates a random strategy drawing from `rng`.
    pub fn new(mark: Mark, rng: R) -> Self {
        Self {
            name: format!("Random({})", mark),
            mark,
            rng,
        }
    }
}

impl UniformRandom<StdRng> {
    /// Creates a random strategy with a seeded `StdRng`.
    pub fn seeded(mark: Mark, seed: u64) -> Self {
        Self::new(mark, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> Strategy for UniformRandom<R> {
    #[instrument(skip_all, fields(strategy = %self.name))]
    fn select_move(&mut self, board: &Board) -> Result<Coord, StrategyError> {
        let moves = require_moves(board)?;
        let coord = *moves
            .choose(&mut self.rng)
            .ok_or(StrategyError::NoLegalMoves)?;
        debug!(%coord, choices = moves.len(), "Random choice");
        Ok(coord)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
