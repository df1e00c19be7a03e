//! Cell coordinates and positional classes.

use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A (row, column) cell coordinate, zero-based from the top-left corner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, new,
)]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Converts to a row-major index on a board of the given size.
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Creates a coordinate from a row-major index.
    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// Whether the coordinate lies on a board of the given size.
    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Positional class of this cell on a board of the given size.
    pub fn class(self, size: usize) -> CellClass {
        CellClass::of(self, size)
    }

    /// Human-readable name of this cell on a 3x3 board.
    ///
    /// Larger boards have no named cells and yield `None`.
    pub fn label(self, size: usize) -> Option<&'static str> {
        if size != 3 {
            return None;
        }
        let label = match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            _ => return None,
        };
        Some(label)
    }

    /// Parses `"row col"` or `"row,col"`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty());
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { row, col })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Positional class of a cell, used for heuristic weights and move priority.
///
/// Variants are declared in priority order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum CellClass {
    /// The middle cell of an odd-sized board.
    Center,
    /// One of the four corners.
    Corner,
    /// Any other cell.
    Edge,
}

impl CellClass {
    /// Classifies a cell. The middle cell wins over corner on a 1x1 board.
    pub fn of(coord: Coord, size: usize) -> Self {
        let last = size.saturating_sub(1);
        if size % 2 == 1 && coord.row == size / 2 && coord.col == size / 2 {
            CellClass::Center
        } else if (coord.row == 0 || coord.row == last) && (coord.col == 0 || coord.col == last) {
            CellClass::Corner
        } else {
            CellClass::Edge
        }
    }

    /// Heuristic weight of a cell in this class.
    pub fn weight(self) -> i32 {
        match self {
            CellClass::Center => 10,
            CellClass::Corner => 5,
            CellClass::Edge => 1,
        }
    }
}
