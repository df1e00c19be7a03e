//! Legal move enumeration.

use super::super::{Board, Coord, Square};

/// Returns every empty cell in row-major order.
///
/// The order is stable: strategies that break ties by enumeration order
/// depend on it.
pub fn legal_moves(board: &Board) -> Vec<Coord> {
    board
        .cells()
        .filter(|(_, sq)| *sq == Square::Empty)
        .map(|(coord, _)| coord)
        .collect()
}

/// Every cell of a board of the given size in priority order: the center,
/// then the corners, then the remaining edge cells, row-major within each
/// class.
pub fn priority_order(size: usize) -> Vec<Coord> {
    let mut cells: Vec<Coord> = (0..size * size)
        .map(|i| Coord::from_index(i, size))
        .collect();
    cells.sort_by_key(|c| (c.class(size), *c));
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_empty_board_row_major() {
        let moves = legal_moves(&Board::new());
        assert_eq!(moves.len(), 9);
        assert_eq!(moves[0], Coord::new(0, 0));
        assert_eq!(moves[1], Coord::new(0, 1));
        assert_eq!(moves[3], Coord::new(1, 0));
        assert_eq!(moves[8], Coord::new(2, 2));
    }

    #[test]
    fn test_occupied_cells_skipped() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let moves = legal_moves(&board);
        assert_eq!(
            moves,
            vec![
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(2, 2),
            ]
        );
        for coord in moves {
            assert!(board.with_move(coord, Mark::X).is_ok());
        }
    }

    #[test]
    fn test_classic_priority_order() {
        let order = priority_order(3);
        let expected = [
            (1, 1),
            (0, 0),
            (0, 2),
            (2, 0),
            (2, 2),
            (0, 1),
            (1, 0),
            (1, 2),
            (2, 1),
        ];
        assert_eq!(
            order,
            expected
                .iter()
                .map(|&(r, c)| Coord::new(r, c))
                .collect::<Vec<_>>()
        );
    }
}
