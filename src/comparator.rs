// ABOUTME: Cross-goal comparative analytics over per-goal log histories
// ABOUTME: Per-goal change/duration/rate statistics, aggregates, and rankings
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Goal Comparator
//!
//! Aggregates per-goal statistics across a set of goals and ranks them.
//! The overall progress percentage here is the blunt absolute-value
//! formula over the whole goal span — deliberately different from the
//! staged milestone formula in `progress`, which tracks position within
//! a milestone plan. Both views are intentional; do not unify them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::time_units::DAYS_PER_WEEK;
use crate::errors::EngineResult;
use crate::models::{latest_entry, Goal, GoalStatus, WeightLogEntry};
use crate::validation::{clamp_percent, validate_goal_weights, validate_log_weights};

/// A goal paired with its full ordered (ascending by date) log history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalHistory {
    /// The goal under comparison.
    pub goal: Goal,
    /// Its complete log history, ascending by date.
    pub logs: Vec<WeightLogEntry>,
}

/// Per-goal comparison statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalStats {
    /// Goal identifier.
    pub goal_id: Uuid,
    /// Goal display name.
    pub name: String,
    /// Goal lifecycle state at comparison time.
    pub status: GoalStatus,
    /// Last log's weight, or the starting weight with no logs.
    pub current_weight: f64,
    /// `starting_weight - current_weight`.
    pub weight_change: f64,
    /// Absolute overall progress: `100 * |change| / |starting - target|`,
    /// clamped to `[0, 100]`, zero for a degenerate span.
    pub progress_percent: f64,
    /// Days between the starting date and the last log date (or today
    /// with no logs), as an absolute value.
    pub duration_days: i64,
    /// `weight_change / (duration_days / 7)`, zero for zero duration.
    pub average_rate_per_week: f64,
    /// Number of log entries, used for the consistency ranking.
    pub log_count: usize,
}

/// Comparison report across a set of goals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Per-goal statistics in input order.
    pub goals: Vec<GoalStats>,
    /// Number of goals compared.
    pub total_goals: usize,
    /// Number with status `Completed`.
    pub completed_goals: usize,
    /// Sum of per-goal `weight_change`.
    pub total_weight_change: f64,
    /// Mean of per-goal `average_rate_per_week` (zero for an empty set).
    pub mean_rate_per_week: f64,
    /// Goal with the maximum `average_rate_per_week`; ties go to the
    /// first goal in input order.
    pub best_performance: Option<Uuid>,
    /// Goal with the most log entries; ties go to the first in input
    /// order.
    pub most_consistent: Option<Uuid>,
}

fn stats_for(history: &GoalHistory, today: NaiveDate) -> EngineResult<GoalStats> {
    let goal = &history.goal;
    validate_goal_weights(goal)?;
    validate_log_weights(&history.logs)?;

    let latest = latest_entry(&history.logs);
    let current_weight = latest.map_or(goal.starting_weight, |entry| entry.weight);
    let weight_change = goal.starting_weight - current_weight;

    let span = (goal.starting_weight - goal.target_weight).abs();
    let progress_percent = if span == 0.0 {
        0.0
    } else {
        clamp_percent(100.0 * weight_change.abs() / span)
    };

    let end_date = latest.map_or(today, |entry| entry.log_date);
    let duration_days = (end_date - goal.starting_date).num_days().abs();

    let average_rate_per_week = if duration_days > 0 {
        weight_change / (duration_days as f64 / DAYS_PER_WEEK as f64)
    } else {
        0.0
    };

    Ok(GoalStats {
        goal_id: goal.id,
        name: goal.name.clone(),
        status: goal.status,
        current_weight,
        weight_change,
        progress_percent,
        duration_days,
        average_rate_per_week,
        log_count: history.logs.len(),
    })
}

/// Compare a set of goals, producing per-goal statistics, aggregates,
/// and rankings. An empty input produces an empty (all-zero) report.
///
/// # Errors
/// Returns `InvalidInput` if any goal or log carries a non-finite weight.
pub fn compare_goals(
    histories: &[GoalHistory],
    today: NaiveDate,
) -> EngineResult<ComparisonReport> {
    let mut goals = Vec::with_capacity(histories.len());
    for history in histories {
        goals.push(stats_for(history, today)?);
    }

    let total_goals = goals.len();
    let completed_goals = goals
        .iter()
        .filter(|g| g.status == GoalStatus::Completed)
        .count();
    let total_weight_change: f64 = goals.iter().map(|g| g.weight_change).sum();
    let mean_rate_per_week = if goals.is_empty() {
        0.0
    } else {
        goals
            .iter()
            .map(|g| g.average_rate_per_week)
            .sum::<f64>()
            / total_goals as f64
    };

    // Strict comparisons keep the first goal on ties.
    let mut best_performance: Option<&GoalStats> = None;
    let mut most_consistent: Option<&GoalStats> = None;
    for stats in &goals {
        if best_performance.is_none_or(|best| stats.average_rate_per_week > best.average_rate_per_week)
        {
            best_performance = Some(stats);
        }
        if most_consistent.is_none_or(|most| stats.log_count > most.log_count) {
            most_consistent = Some(stats);
        }
    }

    let best_performance = best_performance.map(|g| g.goal_id);
    let most_consistent = most_consistent.map(|g| g.goal_id);

    tracing::debug!(total_goals, completed_goals, "compared goal set");

    Ok(ComparisonReport {
        goals,
        total_goals,
        completed_goals,
        total_weight_change,
        mean_rate_per_week,
        best_performance,
        most_consistent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(name: &str, starting: f64, target: f64, start: NaiveDate) -> Goal {
        Goal {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: name.to_owned(),
            status: GoalStatus::Active,
            starting_weight: starting,
            starting_date: start,
            target_weight: target,
            deadline: None,
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
    fn empty_set_produces_empty_report() {
        let report = compare_goals(&[], date(2025, 3, 1)).unwrap();
        assert_eq!(report.total_goals, 0);
        assert_eq!(report.mean_rate_per_week, 0.0);
        assert!(report.best_performance.is_none());
        assert!(report.most_consistent.is_none());
    }

    #[test]
    fn goal_with_no_logs_falls_back_to_starting_weight() {
        let start = date(2025, 1, 1);
        let today = date(2025, 1, 15);
        let g = goal("idle", 200.0, 180.0, start);
        let report = compare_goals(
            &[GoalHistory {
                goal: g,
                logs: vec![],
            }],
            today,
        )
        .unwrap();

        let stats = &report.goals[0];
        assert_eq!(stats.current_weight, 200.0);
        assert_eq!(stats.weight_change, 0.0);
        assert_eq!(stats.progress_percent, 0.0);
        assert_eq!(stats.duration_days, 14);
        assert_eq!(stats.average_rate_per_week, 0.0);
    }

    #[test]
    fn rates_aggregate_and_rank() {
        let start = date(2025, 1, 1);
        let today = date(2025, 3, 1);

        // 1.0 lb/week over 14 days: change of 2.0.
        let slow = goal("slow", 200.0, 180.0, start);
        let slow_logs = vec![log(slow.id, 198.0, start + Duration::days(14))];
        // 2.0 lb/week over 14 days: change of 4.0.
        let fast = goal("fast", 210.0, 190.0, start);
        let fast_logs = vec![
            log(fast.id, 208.0, start + Duration::days(7)),
            log(fast.id, 206.0, start + Duration::days(14)),
        ];
        let fast_id = fast.id;

        let report = compare_goals(
            &[
                GoalHistory {
                    goal: slow,
                    logs: slow_logs,
                },
                GoalHistory {
                    goal: fast,
                    logs: fast_logs,
                },
            ],
            today,
        )
        .unwrap();

        assert_eq!(report.total_goals, 2);
        assert!((report.goals[0].average_rate_per_week - 1.0).abs() < 1e-9);
        assert!((report.goals[1].average_rate_per_week - 2.0).abs() < 1e-9);
        assert!((report.mean_rate_per_week - 1.5).abs() < 1e-9);
        assert_eq!(report.best_performance, Some(fast_id));
        assert_eq!(report.most_consistent, Some(fast_id));
        assert!((report.total_weight_change - 6.0).abs() < 1e-9);
    }

    #[test]
    fn ties_go_to_first_goal_in_input_order() {
        let start = date(2025, 1, 1);
        let a = goal("a", 200.0, 180.0, start);
        let a_logs = vec![log(a.id, 198.0, start + Duration::days(14))];
        let b = goal("b", 200.0, 180.0, start);
        let b_logs = vec![log(b.id, 198.0, start + Duration::days(14))];
        let a_id = a.id;

        let report = compare_goals(
            &[
                GoalHistory { goal: a, logs: a_logs },
                GoalHistory { goal: b, logs: b_logs },
            ],
            date(2025, 3, 1),
        )
        .unwrap();

        assert_eq!(report.best_performance, Some(a_id));
        assert_eq!(report.most_consistent, Some(a_id));
    }

    #[test]
    fn overall_progress_is_absolute_and_clamped() {
        let start = date(2025, 1, 1);
        // Overshot the target: |change| exceeds the span, clamped to 100.
        let g = goal("overshoot", 200.0, 190.0, start);
        let logs = vec![log(g.id, 188.0, start + Duration::days(10))];
        let report = compare_goals(&[GoalHistory { goal: g, logs }], date(2025, 2, 1)).unwrap();
        assert_eq!(report.goals[0].progress_percent, 100.0);

        // Degenerate span: starting == target.
        let flat = goal("flat", 150.0, 150.0, start);
        let flat_logs = vec![log(flat.id, 149.0, start + Duration::days(10))];
        let report = compare_goals(
            &[GoalHistory {
                goal: flat,
                logs: flat_logs,
            }],
            date(2025, 2, 1),
        )
        .unwrap();
        assert_eq!(report.goals[0].progress_percent, 0.0);
    }

    #[test]
    fn completed_count_tracks_status() {
        let start = date(2025, 1, 1);
        let mut done = goal("done", 200.0, 190.0, start);
        done.status = GoalStatus::Completed;
        let open = goal("open", 200.0, 190.0, start);

        let report = compare_goals(
            &[
                GoalHistory {
                    goal: done,
                    logs: vec![],
                },
                GoalHistory {
                    goal: open,
                    logs: vec![],
                },
            ],
            date(2025, 2, 1),
        )
        .unwrap();
        assert_eq!(report.completed_goals, 1);
    }
}
