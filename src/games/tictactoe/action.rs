//! First-class move records.

use super::{Coord, Mark};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a cell.
///
/// Moves are recorded in the game history and reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub mark: Mark,
    /// The cell receiving the mark.
    pub coord: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coord)
    }
}
