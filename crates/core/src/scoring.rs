//! Scoring module - line points, level progression and fall speed
//!
//! All three are pure functions of the [`Rules`] and the running line total, so
//! the session recomputes level and interval after every lock instead of
//! tracking increments.

use crate::types::{Rules, STARTING_LEVEL};

/// Points for clearing `lines` rows in one lock
pub fn line_clear_points(lines: u32, rules: &Rules) -> u32 {
    lines.saturating_mul(rules.points_per_line)
}

/// Level reached after `total_lines` cumulative cleared lines.
///
/// Level 1 until the first `lines_per_level` lines, then one level per further
/// batch. A single lock that crosses several batch boundaries gains every one of
/// those levels.
pub fn level_for_lines(total_lines: u32, rules: &Rules) -> u32 {
    STARTING_LEVEL + total_lines / rules.lines_per_level.max(1)
}

/// Fall interval at `level`, floored at the rules minimum
pub fn fall_interval_ms(level: u32, rules: &Rules) -> u32 {
    let steps = level.saturating_sub(STARTING_LEVEL);
    rules
        .initial_fall_interval_ms
        .saturating_sub(steps.saturating_mul(rules.fall_interval_step_ms))
        .max(rules.min_fall_interval_ms)
}
