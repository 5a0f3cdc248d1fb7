// ABOUTME: Time-remaining calculation from a goal deadline
// ABOUTME: Ceiling division over approximate 7-day week and 30-day month units
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Time Remaining
//!
//! Converts a deadline into days/weeks/months remaining. Each figure is
//! an independent ceiling division over approximate units (7-day week,
//! 30-day month) — not calendar-month-aware. A deadline at or before
//! today yields all zeros; a past deadline is not an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::time_units::{DAYS_PER_MONTH, DAYS_PER_WEEK};

/// Remaining time until a deadline, in three independent granularities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemaining {
    /// Whole days remaining.
    pub days: i64,
    /// `ceil(days / 7)`.
    pub weeks: i64,
    /// `ceil(days / 30)`.
    pub months: i64,
}

impl TimeRemaining {
    const ZERO: Self = Self {
        days: 0,
        weeks: 0,
        months: 0,
    };
}

/// Time remaining until `deadline`, measured from `today`.
///
/// Returns `None` when no deadline is set, and all-zero values (never
/// negatives) when the deadline is today or already past.
#[must_use]
pub fn compute_time_remaining(
    deadline: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<TimeRemaining> {
    let deadline = deadline?;
    let days = (deadline - today).num_days();
    if days <= 0 {
        return Some(TimeRemaining::ZERO);
    }

    Some(TimeRemaining {
        days,
        weeks: (days + DAYS_PER_WEEK - 1) / DAYS_PER_WEEK,
        months: (days + DAYS_PER_MONTH - 1) / DAYS_PER_MONTH,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fourteen_days_out() {
        let today = date(2025, 3, 1);
        let remaining = compute_time_remaining(Some(today + Duration::days(14)), today).unwrap();
        assert_eq!(
            remaining,
            TimeRemaining {
                days: 14,
                weeks: 2,
                months: 1
            }
        );
    }

    #[test]
    fn partial_units_round_up() {
        let today = date(2025, 3, 1);
        let remaining = compute_time_remaining(Some(today + Duration::days(31)), today).unwrap();
        assert_eq!(remaining.days, 31);
        assert_eq!(remaining.weeks, 5);
        assert_eq!(remaining.months, 2);
    }

    #[test]
    fn past_or_same_day_deadline_is_zeroed() {
        let today = date(2025, 3, 1);
        assert_eq!(
            compute_time_remaining(Some(today), today).unwrap(),
            TimeRemaining::ZERO
        );
        assert_eq!(
            compute_time_remaining(Some(date(2025, 2, 1)), today).unwrap(),
            TimeRemaining::ZERO
        );
    }

    #[test]
    fn missing_deadline_is_none() {
        assert!(compute_time_remaining(None, date(2025, 3, 1)).is_none());
    }
}
