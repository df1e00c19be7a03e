//! Core domain types for grid games.

use super::position::Coord;
use crate::error::{ConfigError, MoveError, ParseBoardError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the classic board.
pub const DEFAULT_SIZE: usize = 3;

/// Player symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// Classification of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty cells remain.
    Ongoing,
    /// A line is complete for this mark.
    Win(Mark),
    /// The board is full with no complete line.
    Tie,
}

impl Outcome {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "Player {} wins", mark),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Square N x N board.
///
/// Strategies only ever see `&Board`; any hypothetical move they explore is
/// made on a clone, so the authoritative board cannot be altered through a
/// strategy call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    /// Squares in row-major order.
    pub(crate) squares: Vec<Square>,
}

impl Board {
    /// Creates an empty 3x3 board.
    pub fn new() -> Self {
        Self {
            size: DEFAULT_SIZE,
            squares: vec![Square::Empty; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }

    /// Creates an empty board of the given side length.
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::new("Board size must be at least 1"));
        }
        Ok(Self {
            size,
            squares: vec![Square::Empty; size * size],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, coord: Coord) -> Option<Square> {
        if !coord.in_bounds(self.size) {
            return None;
        }
        self.squares.get(coord.to_index(self.size)).copied()
    }

    /// Checks if the cell exists and is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over every cell with its coordinate, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Square)> + '_ {
        let size = self.size;
        self.squares
            .iter()
            .enumerate()
            .map(move |(i, sq)| (Coord::from_index(i, size), *sq))
    }

    /// Number of cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(mark))
            .count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|sq| **sq == Square::Empty).count()
    }

    /// The mark due to move, assuming X moved first and players alternated.
    pub fn to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Places a mark, rejecting out-of-bounds and occupied cells.
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Result<(), MoveError> {
        if !coord.in_bounds(self.size) {
            return Err(MoveError::OutOfBounds {
                coord,
                size: self.size,
            });
        }
        let idx = coord.to_index(self.size);
        if self.squares[idx] != Square::Empty {
            return Err(MoveError::Occupied { coord });
        }
        self.squares[idx] = Square::Occupied(mark);
        Ok(())
    }

    /// Places a mark on a cell known to be empty (unchecked - use `place`
    /// for validation). Used by search and rollouts on private copies.
    pub(crate) fn play(&mut self, coord: Coord, mark: Mark) {
        debug_assert!(self.is_empty(coord), "{} is not playable", coord);
        let idx = coord.to_index(self.size);
        self.squares[idx] = Square::Occupied(mark);
    }

    /// Returns a copy of the board with the mark placed.
    pub fn with_move(&self, coord: Coord, mark: Mark) -> Result<Self, MoveError> {
        let mut next = self.clone();
        next.place(coord, mark)?;
        Ok(next)
    }
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    squares: Vec<Square>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ParseBoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.size == 0 {
            return Err(ParseBoardError::new("board size must be at least 1"));
        }
        if raw.squares.len() != raw.size * raw.size {
            return Err(ParseBoardError::new(format!(
                "{} squares for a {}x{} board",
                raw.squares.len(),
                raw.size,
                raw.size
            )));
        }
        Ok(Self {
            size: raw.size,
            squares: raw.squares,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.size {
                let ch = match self.squares[row * self.size + col] {
                    Square::Empty => '.',
                    Square::Occupied(mark) => mark.symbol(),
                };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses rows of `X`, `O` and `.` (or `_`) separated by `/` or newlines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();
        let size = rows.len();
        if size == 0 {
            return Err(ParseBoardError::new("no rows"));
        }

        let mut squares = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != size {
                return Err(ParseBoardError::new(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    cells.len(),
                    size
                )));
            }
            for ch in cells {
                squares.push(match ch {
                    'X' | 'x' => Square::Occupied(Mark::X),
                    'O' | 'o' => Square::Occupied(Mark::O),
                    '.' | '_' => Square::Empty,
                    other => {
                        return Err(ParseBoardError::new(format!(
                            "unexpected character {:?}",
                            other
                        )));
                    }
                });
            }
        }

        Ok(Self { size, squares })
    }
}
