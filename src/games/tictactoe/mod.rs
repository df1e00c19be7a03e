//! Tic-tac-toe on N x N boards.

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use game::Game;
pub use position::{CellClass, Coord};
pub use rules::{EmptyCellPolicy, heuristic_score, legal_moves, terminal_outcome};
pub use types::{Board, DEFAULT_SIZE, Mark, Outcome, Square};
