//! Terminal input for the falling-block engine.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. One key
//! press produces at most one action; there is no auto-repeat handling here,
//! the terminal's own key repeat does that job.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
