//! Piece transforms - translation and clockwise rotation
//!
//! Every transform computes a candidate and asks the collision detector about
//! it. A rejected transform returns `None` and leaves the piece untouched;
//! the caller commits accepted results.

use crate::board::Board;
use crate::collision::collides;
use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::Position;

/// Result of probing one row down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownProbe {
    /// The piece can move to this position
    Moved(Position),
    /// The piece rests on the floor or on locked cells
    Landed,
}

/// Probe a horizontal or vertical translation
///
/// Rejected if the shape's bounding box would leave `[0, width)` horizontally
/// (empty columns included) or if the candidate collides.
pub fn translate(board: &Board, piece: &Piece, dx: i32, dy: i32) -> Option<Position> {
    let candidate = piece.position.offset(dx, dy);
    let right_edge = candidate.x + piece.shape.cols() as i32;
    if candidate.x < 0 || right_edge > board.width() as i32 {
        return None;
    }
    if collides(board, &piece.shape, candidate) {
        return None;
    }
    Some(candidate)
}

/// Probe a one-row drop
///
/// Landed when the shape's bottom row would reach the board height or the
/// lowered shape collides.
pub fn probe_down(board: &Board, piece: &Piece) -> DownProbe {
    let bottom = piece.position.y + piece.shape.rows() as i32;
    if bottom >= board.height() as i32 {
        return DownProbe::Landed;
    }
    match translate(board, piece, 0, 1) {
        Some(position) => DownProbe::Moved(position),
        None => DownProbe::Landed,
    }
}

/// Probe a clockwise rotation in place
///
/// Rejected up front when `rows + x > width`: the pre-rotation row count is
/// the post-rotation width. Otherwise rejected if the rotated shape collides
/// at the current position. No kicks are attempted.
pub fn rotate(board: &Board, piece: &Piece) -> Option<Shape> {
    if piece.shape.rows() as i32 + piece.position.x > board.width() as i32 {
        return None;
    }
    let rotated = piece.shape.rotate_cw();
    if collides(board, &rotated, piece.position) {
        return None;
    }
    Some(rotated)
}
