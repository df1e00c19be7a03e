//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: replaying the history onto an empty board reproduces the
/// current board without ever overwriting a cell.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let Ok(mut reconstructed) = Board::with_size(game.board().size()) else {
            return false;
        };

        for mov in game.history() {
            if reconstructed.place(mov.coord, mov.mark).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Coord, Mark, Square};

    #[test]
    fn test_holds_for_played_game() {
        let coords = [(1, 1), (0, 0), (2, 2)].map(|(r, c)| Coord::new(r, c));
        let game = Game::replay(3, &coords).unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_detects_overwritten_cell() {
        let mut game = Game::new();
        game.make_move(Coord::new(1, 1)).unwrap();
        let idx = Coord::new(1, 1).to_index(3);
        game.board.squares[idx] = Square::Occupied(Mark::O);
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
