//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game: the board, the
//! shape catalog, piece spawning, collision, transforms, line clearing,
//! scoring and the drop clock. It does no I/O; hosts drive it through
//! [`GameState`] and read it back through [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid, row clearing with gravity collapse
//! - [`shape`]: the seven-shape catalog and clockwise rotation
//! - [`piece`]: the active piece and the factory that spawns it
//! - [`collision`]: overlap and bounds test for a shape at a position
//! - [`transform`]: translate, probe-down and rotate proposals
//! - [`scoring`]: linear per-row line clear score
//! - [`clock`]: frame timestamps to fixed-interval ticks
//! - [`rng`]: injectable randomness (seeded, entropy, scripted)
//! - [`game_state`]: the orchestrator tying it all together
//!
//! # Game Rules
//!
//! - Pieces spawn at row 0 in a random column of the left half
//! - No wall kicks: a rotation that doesn't fit is rejected
//! - A landed piece locks immediately, no lock delay
//! - Each cleared row scores a fixed amount, with no multi-line bonus
//! - The game ends when the spawn row holds a locked cell or the new piece
//!   already overlaps the stack
//!
//! # Example
//!
//! ```
//! use blockfall_core::{EngineConfig, GameState, SimpleRng};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(EngineConfig::default(), SimpleRng::new(12345)).unwrap();
//!
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::SoftDrop);
//! game.tick();
//!
//! assert_eq!(game.score(), 0);
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! Call [`GameState::advance_to`](game_state::GameState::advance_to) every
//! frame with a monotonic millisecond timestamp. A tick fires once more than
//! the drop interval (1000ms by default) has accumulated.

pub mod board;
pub mod clock;
pub mod collision;
pub mod config;
pub mod error;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;
pub mod transform;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, RowClears};
pub use clock::DropClock;
pub use collision::collides;
pub use config::EngineConfig;
pub use error::{CoreError, CoreResult};
pub use game_state::{GameState, LockEvent, Phase, StepOutcome};
pub use piece::{Piece, PieceFactory};
pub use rng::{EntropyRandom, RandomSource, ScriptedRandom, SimpleRng};
pub use scoring::{default_line_clear_score, line_clear_score};
pub use shape::{Shape, ShapeCatalog};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use transform::DownProbe;
