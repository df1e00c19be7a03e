//! Error types for the decision engine.

use crate::games::tictactoe::Coord;
use derive_more::{Display, Error, From};
use tracing::instrument;

/// A requested move could not be applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The coordinate lies outside the board.
    #[display("Cell {} is outside the {}x{} board", coord, size, size)]
    OutOfBounds {
        /// The rejected coordinate.
        coord: Coord,
        /// Side length of the board.
        size: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", coord)]
    Occupied {
        /// The rejected coordinate.
        coord: Coord,
    },

    /// The game has already been decided.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// A strategy could not produce a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StrategyError {
    /// `select_move` was called on a board with no empty cell.
    #[display("No legal move remains on the board")]
    NoLegalMoves,

    /// The input source of a human-driven strategy failed.
    #[display("Input error: {}", _0)]
    Input(String),
}

impl std::error::Error for StrategyError {}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A textual board diagram could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Malformed board: {}", reason)]
pub struct ParseBoardError {
    /// What was wrong with the input.
    pub reason: String,
}

impl ParseBoardError {
    /// Creates a new parse error.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Any failure surfaced by the match driver.
#[derive(Debug, Display, Error, From)]
pub enum EngineError {
    /// A move was rejected.
    #[display("{}", _0)]
    Move(MoveError),
    /// A strategy failed to produce a move.
    #[display("{}", _0)]
    Strategy(StrategyError),
    /// The match was misconfigured.
    #[display("{}", _0)]
    Config(ConfigError),
}
