//! Shared types module - plain data and constants
//!
//! Everything here is pure data with no game logic, so the engine, the
//! terminal front end and the engine actor can all agree on one vocabulary.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (the engine accepts any non-zero size):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn row**: 0
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_INTERVAL_MS` | 1000 | Automatic drop cadence |
//! | `POINTS_PER_ROW` | 10 | Score per cleared row (no multi-row bonus) |
//! | `FRAME_MS` | 16 | Host frame period |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceColor, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(PieceColor::from_index(3), Some(PieceColor::Red));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Automatic drop cadence in milliseconds (one row per second)
pub const DROP_INTERVAL_MS: u64 = 1000;

/// Points awarded for each cleared row
pub const POINTS_PER_ROW: u32 = 10;

/// Number of shapes in the catalog
pub const SHAPE_COUNT: usize = 7;

/// Number of entries in the piece palette
pub const PALETTE_SIZE: usize = 4;

/// Host frame period in milliseconds (~60 FPS)
pub const FRAME_MS: u64 = 16;

/// A cell on the game board
///
/// Occupancy is binary: locked cells do not remember the color of the
/// piece that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Cell {
    #[default]
    Empty,
    Locked,
}

impl Cell {
    #[inline]
    pub fn is_locked(self) -> bool {
        matches!(self, Cell::Locked)
    }
}

/// The seven catalog shapes
///
/// Declaration order is the catalog order used by the piece factory:
/// - **Square**: 2x2
/// - **Z**: `[[1,1,0],[0,1,1]]`
/// - **S**: `[[0,1,1],[1,1,0]]`
/// - **Bar**: 1x4
/// - **L**: `[[1,0],[1,0],[1,1]]`
/// - **J**: `[[0,1],[0,1],[1,1]]`
/// - **T**: `[[0,1,0],[1,1,1]]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShapeKind {
    Square,
    Z,
    S,
    Bar,
    L,
    J,
    T,
}

impl ShapeKind {
    /// All kinds in catalog order
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
        ShapeKind::Square,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::Bar,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::T,
    ];

    /// Look up a kind by catalog index
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_index(0), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_index(6), Some(ShapeKind::T));
    /// assert_eq!(ShapeKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Catalog index of this kind
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("square"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("BAR"), Some(ShapeKind::Bar));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" | "o" => Some(ShapeKind::Square),
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            "bar" | "i" => Some(ShapeKind::Bar),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "t" => Some(ShapeKind::T),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
            ShapeKind::Bar => "bar",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::T => "t",
        }
    }
}

/// The four-entry piece palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieceColor {
    Blue,
    Green,
    Silver,
    Red,
}

impl PieceColor {
    pub const ALL: [PieceColor; PALETTE_SIZE] = [
        PieceColor::Blue,
        PieceColor::Green,
        PieceColor::Silver,
        PieceColor::Red,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// CSS-style short hex code
    pub fn hex(&self) -> &'static str {
        match self {
            PieceColor::Blue => "#69F",
            PieceColor::Green => "#0F0",
            PieceColor::Silver => "#CCC",
            PieceColor::Red => "#F21",
        }
    }

    /// 24-bit RGB triple
    ///
    /// ```
    /// use blockfall_types::PieceColor;
    ///
    /// assert_eq!(PieceColor::Blue.rgb(), (0x66, 0x99, 0xff));
    /// assert_eq!(PieceColor::Red.rgb(), (0xff, 0x22, 0x11));
    /// ```
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceColor::Blue => (0x66, 0x99, 0xff),
            PieceColor::Green => (0x00, 0xff, 0x00),
            PieceColor::Silver => (0xcc, 0xcc, 0xcc),
            PieceColor::Red => (0xff, 0x22, 0x11),
        }
    }
}

/// Board-relative offset of a shape's top-left corner
///
/// May be transiently outside the board while a move is being probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Commands the host layer pushes into the engine
///
/// One action per discrete key press, never per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Move piece one row down, locking it if it has landed
    SoftDrop,
    /// Start over with an empty board
    Reset,
}

impl GameAction {
    /// Parse action from string
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveRight"), Some(GameAction::MoveRight));
    /// assert_eq!(GameAction::from_str("softdrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "softdrop" => Some(GameAction::SoftDrop),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::Reset => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 20);
        assert_eq!(DROP_INTERVAL_MS, 1000);
        assert_eq!(POINTS_PER_ROW, 10);
    }

    #[test]
    fn catalog_indices_follow_declaration_order() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(ShapeKind::from_index(i), Some(*kind));
        }
    }

    #[test]
    fn action_names_roundtrip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::Rotate,
            GameAction::SoftDrop,
            GameAction::Reset,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn palette_hex_matches_rgb() {
        for color in PieceColor::ALL {
            let hex = color.hex();
            assert_eq!(hex.len(), 4);
            let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).unwrap() * 0x11;
            assert_eq!((nibble(1), nibble(2), nibble(3)), color.rgb());
        }
        assert_eq!(PieceColor::Silver.hex(), "#CCC");
    }

    #[test]
    fn position_offset() {
        let p = Position::new(3, 0);
        assert_eq!(p.offset(-1, 0), Position::new(2, 0));
        assert_eq!(p.offset(0, 1), Position::new(3, 1));
    }
}
