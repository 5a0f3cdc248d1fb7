// ABOUTME: Named numeric constants used across the goal progress engine
// ABOUTME: Milestone count bounds, approximate time units, percentage range
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Engine Constants
//!
//! Grouped by concern so call sites read as `milestones::MAX_COUNT` or
//! `time_units::DAYS_PER_MONTH`.

/// Bounds on the milestone plan size.
pub mod milestones {
    /// Smallest plan the planner will produce. Removal of the last
    /// milestone floors the requested count here rather than at zero.
    pub const MIN_COUNT: u32 = 1;

    /// Largest plan the planner will produce; larger requests are clamped.
    pub const MAX_COUNT: u32 = 10;
}

/// Approximate time units used by the time-remaining calculation.
///
/// These are deliberately not calendar-aware: a week is 7 days and a
/// month is 30, regardless of where the deadline falls.
pub mod time_units {
    /// Days in a week.
    pub const DAYS_PER_WEEK: i64 = 7;

    /// Days in a month (approximation).
    pub const DAYS_PER_MONTH: i64 = 30;
}

/// Percentage range for progress values.
pub mod percent {
    /// Lower clamp bound.
    pub const MIN: f64 = 0.0;

    /// Upper clamp bound.
    pub const MAX: f64 = 100.0;
}
