// ABOUTME: Shared test builders for goals, milestones, and log entries
// ABOUTME: Reduces duplication across the integration test suites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(dead_code, clippy::unwrap_used, clippy::must_use_candidate)]
#![allow(missing_docs)]

//! Shared test utilities for `paceline` integration tests.

use chrono::NaiveDate;
use paceline::{Goal, GoalStatus, Milestone, WeightLogEntry};
use uuid::Uuid;

/// Calendar date shorthand.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Active goal with milestones enabled and no deadline.
pub fn goal(starting_weight: f64, target_weight: f64, starting_date: NaiveDate) -> Goal {
    Goal {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        name: "test goal".to_owned(),
        status: GoalStatus::Active,
        starting_weight,
        starting_date,
        target_weight,
        deadline: None,
        enable_milestones: true,
    }
}

/// Log entry against `goal_id` on `log_date`.
pub fn log(goal_id: Uuid, weight: f64, log_date: NaiveDate) -> WeightLogEntry {
    WeightLogEntry {
        id: Uuid::new_v4(),
        goal_id,
        weight,
        log_date,
    }
}

/// Milestone plan from explicit targets, numbered `1..=len`.
pub fn plan(goal_id: Uuid, targets: &[f64]) -> Vec<Milestone> {
    targets
        .iter()
        .enumerate()
        .map(|(i, &target_weight)| Milestone {
            goal_id,
            milestone_number: i as u32 + 1,
            target_weight,
        })
        .collect()
}
