//! Shape module - rectangular cell matrices and the fixed shape catalog
//!
//! A [`Shape`] is an immutable boolean matrix. Rotation never mutates a shape;
//! [`Shape::rotate_cw`] returns a new value and the caller decides whether to
//! adopt it.

use crate::error::{CoreError, CoreResult};
use crate::types::{ShapeKind, SHAPE_COUNT};

/// Catalog definitions in [`ShapeKind::ALL`] order, 1 = filled.
const CATALOG_ROWS: [&[&[u8]]; SHAPE_COUNT] = [
    // Square
    &[&[1, 1], &[1, 1]],
    // Z
    &[&[1, 1, 0], &[0, 1, 1]],
    // S
    &[&[0, 1, 1], &[1, 1, 0]],
    // Bar
    &[&[1, 1, 1, 1]],
    // L
    &[&[1, 0], &[1, 0], &[1, 1]],
    // J
    &[&[0, 1], &[0, 1], &[1, 1]],
    // T
    &[&[0, 1, 0], &[1, 1, 1]],
];

/// Immutable rectangular boolean matrix, at least 1x1
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    rows: usize,
    cols: usize,
    /// Row-major (row * cols + col)
    cells: Vec<bool>,
}

impl Shape {
    /// Build a shape from rows of 0/1 values
    ///
    /// Fails with `InvalidGeometry` if the matrix is empty, ragged, or has no
    /// filled cell.
    pub fn from_rows(rows: &[&[u8]]) -> CoreResult<Self> {
        let matrix: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| row.iter().map(|&v| v != 0).collect())
            .collect();
        Self::from_matrix(matrix)
    }

    /// Build a shape from a boolean matrix
    pub fn from_matrix(matrix: Vec<Vec<bool>>) -> CoreResult<Self> {
        let rows = matrix.len();
        if rows == 0 {
            return Err(CoreError::InvalidGeometry {
                reason: "shape has no rows",
            });
        }
        let cols = matrix[0].len();
        if cols == 0 {
            return Err(CoreError::InvalidGeometry {
                reason: "shape has no columns",
            });
        }
        if matrix.iter().any(|row| row.len() != cols) {
            return Err(CoreError::InvalidGeometry {
                reason: "shape rows differ in length",
            });
        }

        let cells: Vec<bool> = matrix.into_iter().flatten().collect();
        if !cells.iter().any(|&c| c) {
            return Err(CoreError::InvalidGeometry {
                reason: "shape has no filled cell",
            });
        }

        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether local cell (col, row) is filled; false outside the matrix
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        if col >= self.cols || row >= self.rows {
            return false;
        }
        self.cells[row * self.cols + col]
    }

    /// Local `(col, row)` offsets of every filled cell, row by row
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(i, _)| (i % cols, i / cols))
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Rotate 90° clockwise
    ///
    /// New row `c` is the original column `c` read bottom-to-top, so the
    /// dimensions swap.
    pub fn rotate_cw(&self) -> Shape {
        let new_rows = self.cols;
        let new_cols = self.rows;
        let mut cells = Vec::with_capacity(self.cells.len());
        for c in 0..self.cols {
            for r in (0..self.rows).rev() {
                cells.push(self.cells[r * self.cols + c]);
            }
        }
        Shape {
            rows: new_rows,
            cols: new_cols,
            cells,
        }
    }

    /// Row-major flat view of the matrix
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

/// The fixed, process-wide shape catalog
///
/// Built once and validated at construction; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
}

impl ShapeCatalog {
    /// The seven standard shapes
    pub fn standard() -> CoreResult<Self> {
        let shapes = CATALOG_ROWS
            .iter()
            .map(|rows| Shape::from_rows(rows))
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Self { shapes })
    }

    pub fn get(&self, kind: ShapeKind) -> &Shape {
        &self.shapes[kind.index()]
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShapeKind, &Shape)> {
        ShapeKind::ALL.iter().copied().zip(self.shapes.iter())
    }
}
