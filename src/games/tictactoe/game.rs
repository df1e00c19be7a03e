//! Authoritative game state owned by the match driver.

use super::action::Move;
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{legal_moves, terminal_outcome};
use super::{Board, Coord, Mark, Outcome};
use crate::error::{ConfigError, MoveError};
use tracing::{debug, instrument};

/// A game in any phase.
///
/// The outcome is never stored; it is recomputed from the board so it
/// cannot drift out of sync with the cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new 3x3 game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// Creates a new game on an N x N board.
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            board: Board::with_size(size)?,
            history: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns an owned copy of the board, detached from the game.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The mark due to move. X always moves first.
    pub fn to_move(&self) -> Mark {
        if self.history.len() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Current outcome, derived from the board.
    pub fn outcome(&self) -> Outcome {
        terminal_outcome(&self.board)
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Empty cells, row-major.
    pub fn legal_moves(&self) -> Vec<Coord> {
        legal_moves(&self.board)
    }

    /// Places the current player's mark and returns the resulting outcome.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the game is already decided
    /// - `MoveError::OutOfBounds` / `MoveError::Occupied` for illegal cells
    ///
    /// A rejected move leaves the game unchanged.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn make_move(&mut self, coord: Coord) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let mark = self.to_move();
        self.board.place(coord, mark)?;
        self.history.push(Move::new(mark, coord));

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "game invariants violated after {}",
            coord
        );

        let outcome = self.outcome();
        debug!(%mark, %coord, %outcome, "Move applied");
        Ok(outcome)
    }

    /// Replays a sequence of coordinates from a fresh board.
    #[instrument(skip(coords))]
    pub fn replay(size: usize, coords: &[Coord]) -> Result<Self, crate::EngineError> {
        let mut game = Self::with_size(size)?;
        for coord in coords {
            game.make_move(*coord)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
