//! Scoring module - linear row-clear scoring
//!
//! Every cleared row is worth the same fixed amount; clearing several rows
//! with one lock adds them up with no multiplier.

use crate::types::POINTS_PER_ROW;

/// Score for clearing `rows` rows at `points_per_row` each
pub fn line_clear_score(rows: u32, points_per_row: u32) -> u32 {
    rows.saturating_mul(points_per_row)
}

/// Score for clearing `rows` rows with the default row value
pub fn default_line_clear_score(rows: u32) -> u32 {
    line_clear_score(rows, POINTS_PER_ROW)
}
