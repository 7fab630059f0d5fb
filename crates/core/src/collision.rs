//! Collision detection - one pure predicate backing every move check
//!
//! Moves are validated by probing the destination before committing; nothing
//! here mutates the board or the piece.

use crate::board::Board;
use crate::shape::Shape;
use crate::types::Position;

/// Check whether `shape` placed at `position` overlaps the board edges or a
/// locked cell
///
/// Only filled shape cells are tested. Out-of-range board coordinates count
/// as occupied.
pub fn collides(board: &Board, shape: &Shape, position: Position) -> bool {
    shape
        .filled_cells()
        .any(|(col, row)| board.is_blocked(position.x + col as i32, position.y + row as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Shape {
        Shape::from_rows(&[&[1, 1], &[1, 1]]).unwrap()
    }

    #[test]
    fn empty_board_inside_bounds() {
        let board = Board::new(10, 20).unwrap();
        assert!(!collides(&board, &square(), Position::new(0, 0)));
        assert!(!collides(&board, &square(), Position::new(8, 18)));
    }

    #[test]
    fn out_of_bounds_counts_as_collision() {
        let board = Board::new(10, 20).unwrap();
        assert!(collides(&board, &square(), Position::new(-1, 0)));
        assert!(collides(&board, &square(), Position::new(9, 0)));
        assert!(collides(&board, &square(), Position::new(0, 19)));
        assert!(collides(&board, &square(), Position::new(0, -1)));
    }

    #[test]
    fn empty_shape_cells_are_ignored() {
        // The T's top corners are empty, so they may overhang locked cells.
        let board = Board::from_rows(&["#.#", "..."]).unwrap();
        let t = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]).unwrap();
        assert!(!collides(&board, &t, Position::new(0, 0)));
    }

    #[test]
    fn locked_cell_collides() {
        let board = Board::from_rows(&["....", ".#..", "...."]).unwrap();
        assert!(collides(&board, &square(), Position::new(0, 0)));
        assert!(collides(&board, &square(), Position::new(1, 1)));
        assert!(!collides(&board, &square(), Position::new(2, 0)));
        assert!(!collides(&board, &square(), Position::new(2, 1)));
    }
}
