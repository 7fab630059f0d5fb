//! Engine error taxonomy.
//!
//! Rejected moves and game over are not errors; they are silent no-ops and a
//! terminal state respectively. What remains is construction-time validation
//! and explicit out-of-range board queries.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A shape matrix is empty, ragged, or has no filled cell.
    #[error("invalid shape geometry: {reason}")]
    InvalidGeometry { reason: &'static str },

    /// Board dimensions must both be at least one cell.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// A board query landed outside the grid.
    #[error("board coordinate ({x}, {y}) is out of range")]
    OutOfRange { x: i32, y: i32 },
}

pub type CoreResult<T> = Result<T, CoreError>;
