//! Piece module - the falling piece and the factory that spawns it

use crate::rng::RandomSource;
use crate::shape::{Shape, ShapeCatalog};
use crate::types::{PieceColor, Position, ShapeKind, PALETTE_SIZE, SHAPE_COUNT};

/// The currently falling, player-controlled piece
///
/// `kind` records which catalog entry the piece came from; `shape` is its
/// current orientation and is replaced wholesale on rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub position: Position,
    pub color: PieceColor,
}

impl Piece {
    /// Board coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let Position { x, y } = self.position;
        self.shape
            .filled_cells()
            .map(move |(col, row)| (x + col as i32, y + row as i32))
    }
}

/// Produces new pieces by uniform random choice over the catalog
///
/// Holds no state between spawns besides the randomness source itself.
#[derive(Debug, Clone)]
pub struct PieceFactory<R> {
    catalog: ShapeCatalog,
    rng: R,
}

impl<R: RandomSource> PieceFactory<R> {
    pub fn new(catalog: ShapeCatalog, rng: R) -> Self {
        Self { catalog, rng }
    }

    /// Spawn a piece for a board `board_width` columns wide
    ///
    /// Draw order is fixed: column in `[0, board_width / 2)`, then shape,
    /// then color. The piece always starts in row 0.
    pub fn spawn(&mut self, board_width: usize) -> Piece {
        let x = self.rng.next_index((board_width / 2).max(1)) as i32;
        let kind = ShapeKind::from_index(self.rng.next_index(SHAPE_COUNT))
            .unwrap_or(ShapeKind::Square);
        let color =
            PieceColor::from_index(self.rng.next_index(PALETTE_SIZE)).unwrap_or(PieceColor::Blue);

        Piece {
            kind,
            shape: self.catalog.get(kind).clone(),
            position: Position::new(x, 0),
            color,
        }
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
