//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is either empty or
//! locked. Uses a flat row-major vector for cache locality; dimensions are
//! fixed at creation.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Row 0 is the spawn row.

use arrayvec::ArrayVec;

use crate::error::{CoreError, CoreResult};
use crate::shape::Shape;
use crate::types::{Cell, Position};

/// Rows removed by one [`Board::clear_full_rows`] pass
///
/// `rows` holds the index each row had at the moment it was cleared, in
/// clearing order. Only the first four are recorded; `count` is always exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowClears {
    pub count: u32,
    pub rows: ArrayVec<usize, 4>,
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(CoreError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if position is outside the grid
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height
    }

    /// Get the cell at (x, y)
    pub fn cell(&self, x: i32, y: i32) -> CoreResult<Cell> {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or(CoreError::OutOfRange { x, y })
    }

    /// Check whether (x, y) holds a locked cell
    ///
    /// Out-of-range coordinates are an error here; use [`Board::is_blocked`]
    /// for collision probing.
    pub fn is_occupied(&self, x: i32, y: i32) -> CoreResult<bool> {
        self.cell(x, y).map(Cell::is_locked)
    }

    /// Collision convention: out of range counts as occupied
    #[inline]
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(idx) => self.cells[idx].is_locked(),
            None => true,
        }
    }

    /// Set the cell at (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Write every filled cell of `shape` at `position` as Locked
    ///
    /// The caller is expected to have checked for collisions first; this
    /// overwrites unconditionally. Filled cells outside the grid are skipped.
    pub fn lock_cells(&mut self, shape: &Shape, position: Position) {
        for (col, row) in shape.filled_cells() {
            self.set(
                position.x + col as i32,
                position.y + row as i32,
                Cell::Locked,
            );
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        match self.row(y) {
            Some(row) => row.iter().all(|cell| cell.is_locked()),
            None => false,
        }
    }

    /// Remove row `y` and shift every row above it down by one
    ///
    /// A fresh empty row appears at index 0. Returns false if `y` is out of
    /// range.
    pub fn clear_and_collapse_row(&mut self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }

        let width = self.width;
        // copy_within handles the overlapping ranges.
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }
        self.cells[..width].fill(Cell::Empty);
        true
    }

    /// Clear every full row, one at a time
    ///
    /// Scans bottom to top; after each clear the scan restarts from the
    /// bottom, so rows pulled down into an already-visited index are seen.
    pub fn clear_full_rows(&mut self) -> RowClears {
        let mut clears = RowClears::default();

        'scan: loop {
            for y in (0..self.height).rev() {
                if self.is_row_full(y) {
                    self.clear_and_collapse_row(y);
                    clears.count += 1;
                    let _ = clears.rows.try_push(y);
                    continue 'scan;
                }
            }
            break;
        }

        clears
    }

    /// Check if any locked cell sits in the spawn row
    pub fn is_game_over(&self) -> bool {
        self.row(0)
            .map(|row| row.iter().any(|cell| cell.is_locked()))
            .unwrap_or(false)
    }

    /// Number of locked cells on the board
    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_locked()).count()
    }

    /// Borrow row `y`
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Build a board from text rows, top row first
    ///
    /// `#` and `X` are locked, anything else is empty. Every row must have
    /// the same length.
    pub fn from_rows(rows: &[&str]) -> CoreResult<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut board = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(CoreError::InvalidDimensions { width, height });
            }
            for (x, ch) in row.chars().enumerate() {
                if matches!(ch, '#' | 'X') {
                    board.cells[y * width + x] = Cell::Locked;
                }
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(10, 20).unwrap();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
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
    fn test_overflowing_dimensions_rejected() {
        let width = usize::MAX / 2 + 1;
        assert_eq!(
            Board::new(width, 2),
            Err(CoreError::InvalidDimensions { width, height: 2 })
        );
        assert!(Board::new(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows(&["#..", "...", "X.#"]).unwrap();
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 3);
        assert_eq!(board.locked_count(), 3);
        assert_eq!(board.cell(2, 2), Ok(Cell::Locked));
        assert_eq!(board.cell(1, 2), Ok(Cell::Empty));

        let rows: Vec<&[Cell]> = board.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], &[Cell::Locked, Cell::Empty, Cell::Empty]);
        assert_eq!(rows[2], board.row(2).unwrap());

        assert!(Board::from_rows(&["##", "#"]).is_err());
    }

    #[test]
    fn test_restart_scan_clears_stacked_rows() {
        let mut board = Board::from_rows(&["....", "#...", "####", "####"]).unwrap();
        let clears = board.clear_full_rows();
        assert_eq!(clears.count, 2);
        // Both rows are cleared at the bottom index because the second one is
        // pulled down into it.
        assert_eq!(clears.rows.as_slice(), &[3, 3]);
        assert_eq!(board, Board::from_rows(&["....", "....", "....", "#..."]).unwrap());
    }

    #[test]
    fn test_restart_scan_with_gap() {
        let mut board = Board::from_rows(&["###.", "####", "#.#.", "####"]).unwrap();
        let clears = board.clear_full_rows();
        assert_eq!(clears.count, 2);
        assert_eq!(clears.rows.as_slice(), &[3, 2]);
        assert_eq!(board, Board::from_rows(&["....", "....", "###.", "#.#."]).unwrap());
    }
}
