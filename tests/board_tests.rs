//! Board tests - occupancy, locking, row clearing

use blockfall::core::{Board, CoreError, ShapeCatalog};
use blockfall::types::{Cell, Position, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT).unwrap();
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(board.cell(x, y), Ok(Cell::Empty), "cell ({}, {})", x, y);
        }
    }
    assert!(!board.is_game_over());
}

#[test]
fn test_board_zero_dimensions_rejected() {
    assert_eq!(
        Board::new(0, 20),
        Err(CoreError::InvalidDimensions {
            width: 0,
            height: 20
        })
    );
    assert!(Board::new(10, 0).is_err());
}

#[test]
fn test_board_out_of_range_reads() {
    let board = Board::new(10, 20).unwrap();
    assert_eq!(board.cell(-1, 0), Err(CoreError::OutOfRange { x: -1, y: 0 }));
    assert!(board.is_occupied(10, 0).is_err());
    assert!(board.is_blocked(10, 0));
    assert!(board.is_blocked(0, 20));
    assert!(board.is_blocked(-1, 5));
    assert!(!board.is_blocked(0, 0));
}

#[test]
fn test_row_full_iff_every_cell_locked() {
    let mut board = Board::new(10, 20).unwrap();
    for x in 0..9 {
        board.set(x, 19, Cell::Locked);
        assert!(!board.is_row_full(19));
    }
    board.set(9, 19, Cell::Locked);
    assert!(board.is_row_full(19));
}

#[test]
fn test_lock_sets_exactly_filled_cells() {
    let catalog = ShapeCatalog::standard().unwrap();
    let t = catalog.get(ShapeKind::T);
    let mut board = Board::new(10, 20).unwrap();
    board.lock_cells(t, Position::new(3, 5));

    assert_eq!(board.locked_count(), t.filled_count());
    for (col, row) in t.filled_cells() {
        assert_eq!(
            board.cell(3 + col as i32, 5 + row as i32),
            Ok(Cell::Locked)
        );
    }
    // T's top corners stay empty.
    assert_eq!(board.cell(3, 5), Ok(Cell::Empty));
    assert_eq!(board.cell(5, 5), Ok(Cell::Empty));
}

#[test]
fn test_clear_row_removes_width_cells_and_shifts() {
    let mut board = Board::from_rows(&[
        "....", //
        ".#..",
        "#..#",
        "####",
    ])
    .unwrap();
    let before = board.locked_count();

    assert!(board.clear_and_collapse_row(3));
    assert_eq!(board.locked_count(), before - board.width());
    assert_eq!(
        board,
        Board::from_rows(&["....", "....", ".#..", "#..#"]).unwrap()
    );
}

#[test]
fn test_clear_full_rows_reports_each_clear() {
    let mut board = Board::from_rows(&[
        "#...", //
        "####",
        "#.##",
        "####",
    ])
    .unwrap();

    let clears = board.clear_full_rows();
    assert_eq!(clears.count, 2);
    // Row 3 cleared first; the old row 1 then sits at row 2.
    assert_eq!(clears.rows.as_slice(), &[3, 2]);
    assert_eq!(
        board,
        Board::from_rows(&["....", "....", "#...", "#.##"]).unwrap()
    );
}

#[test]
fn test_game_over_checks_top_row_only() {
    let mut board = Board::new(10, 20).unwrap();
    board.set(4, 1, Cell::Locked);
    assert!(!board.is_game_over());
    board.set(4, 0, Cell::Locked);
    assert!(board.is_game_over());
}

#[test]
fn test_text_board_rejects_ragged_rows() {
    assert!(Board::from_rows(&["...", ".."]).is_err());
    assert!(Board::from_rows(&[]).is_err());
}
