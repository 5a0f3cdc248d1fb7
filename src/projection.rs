// ABOUTME: Two-point straight-line projection from the latest observation to the deadline
// ABOUTME: A required-pace indicator rendered beside the observed series, not a fitted trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Projection Engine
//!
//! Builds the forward path the user would have to follow to land exactly
//! on target by the deadline: a straight line from the latest log entry
//! to `(deadline, target_weight)`. Intentionally simple — the consumer
//! renders it alongside the actual observed series, never merged with it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{latest_entry, Goal, WeightLogEntry};

/// One point on the projection line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Calendar date of the point.
    pub date: NaiveDate,
    /// Weight at the point.
    pub weight: f64,
}

/// Required-pace projection for a goal.
///
/// Returns exactly two points — `(latest log date, latest log weight)`
/// and `(deadline, target weight)` — or an empty vector when fewer than
/// two log entries exist or the goal has no deadline. `logs` must be
/// ascending by date, as the store returns them.
#[must_use]
pub fn compute_projection(goal: &Goal, logs: &[WeightLogEntry]) -> Vec<ProjectionPoint> {
    if logs.len() < 2 {
        return Vec::new();
    }
    let Some(deadline) = goal.deadline else {
        return Vec::new();
    };
    let Some(latest) = latest_entry(logs) else {
        return Vec::new();
    };

    vec![
        ProjectionPoint {
            date: latest.log_date,
            weight: latest.weight,
        },
        ProjectionPoint {
            date: deadline,
            weight: goal.target_weight,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalStatus;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(deadline: Option<NaiveDate>) -> Goal {
        Goal {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "cut".to_owned(),
            status: GoalStatus::Active,
            starting_weight: 200.0,
            starting_date: date(2025, 1, 1),
            target_weight: 180.0,
            deadline,
            enable_milestones: false,
        }
    }

    fn log(goal_id: Uuid, weight: f64, on: NaiveDate) -> WeightLogEntry {
        WeightLogEntry {
            id: Uuid::new_v4(),
            goal_id,
            weight,
            log_date: on,
        }
    }

    #[test]
    fn fewer_than_two_logs_yields_empty() {
        let g = goal(Some(date(2025, 6, 1)));
        assert!(compute_projection(&g, &[]).is_empty());

        let single = vec![log(g.id, 198.0, date(2025, 1, 5))];
        assert!(compute_projection(&g, &single).is_empty());
    }

    #[test]
    fn no_deadline_yields_empty() {
        let g = goal(None);
        let logs = vec![
            log(g.id, 198.0, date(2025, 1, 5)),
            log(g.id, 196.0, date(2025, 1, 12)),
        ];
        assert!(compute_projection(&g, &logs).is_empty());
    }

    #[test]
    fn two_endpoints_from_latest_log_to_deadline() {
        let g = goal(Some(date(2025, 6, 1)));
        let logs = vec![
            log(g.id, 198.0, date(2025, 1, 5)),
            log(g.id, 193.5, date(2025, 2, 1)),
        ];

        let path = compute_projection(&g, &logs);
        assert_eq!(path.len(), 2);
        assert_eq!(
            path[0],
            ProjectionPoint {
                date: date(2025, 2, 1),
                weight: 193.5
            }
        );
        assert_eq!(
            path[1],
            ProjectionPoint {
                date: date(2025, 6, 1),
                weight: 180.0
            }
        );
    }
}
