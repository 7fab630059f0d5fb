//! Read-only render snapshot handed to the presentation layer.

use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::{Cell, PieceColor, ShapeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub color: PieceColor,
    pub x: i32,
    pub y: i32,
    pub shape: Shape,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind,
            color: value.color,
            x: value.position.x,
            y: value.position.y,
            shape: value.shape.clone(),
        }
    }
}

impl ActiveSnapshot {
    /// Whether a filled cell of the piece sits on board cell (x, y)
    pub fn covers(&self, x: i32, y: i32) -> bool {
        let (col, row) = (x - self.x, y - self.y);
        col >= 0 && row >= 0 && self.shape.is_filled(col as usize, row as usize)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major locked/empty cells
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub pieces_spawned: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.cells.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.pieces_spawned = 0;
        self.game_over = false;
    }

    /// Board cell at (x, y); out of range reads as empty
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Cell::Empty;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    pub fn is_locked(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).is_locked()
    }

    pub fn active_covers(&self, x: i32, y: i32) -> bool {
        self.active.as_ref().is_some_and(|a| a.covers(x, y))
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
