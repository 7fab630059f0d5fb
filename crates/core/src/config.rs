//! Engine configuration.

use std::env;
use std::str::FromStr;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_MS, POINTS_PER_ROW};

/// Tunables for one engine instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: usize,
    pub height: usize,
    pub drop_interval_ms: u64,
    pub points_per_row: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            drop_interval_ms: DROP_INTERVAL_MS,
            points_per_row: POINTS_PER_ROW,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables
    ///
    /// Reads `BLOCKFALL_WIDTH`, `BLOCKFALL_HEIGHT`, `BLOCKFALL_DROP_MS` and
    /// `BLOCKFALL_POINTS_PER_ROW`. Missing or unparseable values keep their
    /// defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`] with an injectable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            width: parse(&lookup, "BLOCKFALL_WIDTH").unwrap_or(defaults.width),
            height: parse(&lookup, "BLOCKFALL_HEIGHT").unwrap_or(defaults.height),
            drop_interval_ms: parse(&lookup, "BLOCKFALL_DROP_MS")
                .unwrap_or(defaults.drop_interval_ms),
            points_per_row: parse(&lookup, "BLOCKFALL_POINTS_PER_ROW")
                .unwrap_or(defaults.points_per_row),
        }
    }
}

fn parse<T: FromStr>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}
