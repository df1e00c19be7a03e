//! Grid Duel - move selection for tic-tac-toe style games
//!
//! This library evaluates N x N tic-tac-toe positions and provides a family
//! of interchangeable strategies that choose the next move.
//!
//! # Architecture
//!
//! - **Games**: board state, rules, heuristic evaluation and the
//!   authoritative [`Game`]
//! - **Strategies**: fixed order, uniform random, Monte Carlo rollouts,
//!   minimax and alpha-beta search behind the [`Strategy`] trait
//! - **Driver**: the [`Orchestrator`] match loop and seeded tournaments
//! - **Config**: TOML match configuration and the strategy factory
//!
//! # Example
//!
//! ```
//! use grid_duel::{AlphaBeta, Board, Coord, Mark, Strategy};
//!
//! let board: Board = "XX./OO./...".parse()?;
//! let mut o = AlphaBeta::new(Mark::O);
//! assert_eq!(o.select_move(&board)?, Coord::new(1, 2));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod games;

// Public module declarations
pub mod driver;
pub mod strategies;

// Crate-level exports - Errors
pub use error::{ConfigError, EngineError, MoveError, ParseBoardError, StrategyError};

// Crate-level exports - Configuration
pub use config::{MatchConfig, StrategyConfig, StrategyKind};

// Crate-level exports - Driver
pub use driver::{GameEvent, MatchReport, Orchestrator, TournamentReport};

// Crate-level exports - Strategies
pub use strategies::{
    AlphaBeta, DEFAULT_SIMULATIONS, FixedOrder, HumanStrategy, Minimax, MonteCarlo,
    MonteCarloConfig, SearchConfig, SearchReport, Strategy, UniformRandom,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CellClass, Coord, DEFAULT_SIZE, EmptyCellPolicy, Game, Mark, Move, Outcome, Square,
    heuristic_score, legal_moves, terminal_outcome,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants;
pub use games::tictactoe::rules;
