// ABOUTME: Convenience composition of the single-goal evaluators over a store
// ABOUTME: Loads a goal's milestones and logs, then bundles the three computed views
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Goal Overview
//!
//! Thin async glue for callers that want all three single-goal views in
//! one round trip: load the snapshot from the store, then run the pure
//! evaluators. Each view recomputes fully from the loaded snapshot;
//! callers re-invoke after every mutation.

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Goal;
use crate::progress::{compute_milestone_progress, ProgressSnapshot};
use crate::projection::{compute_projection, ProjectionPoint};
use crate::store::FitnessStore;
use crate::time_remaining::{compute_time_remaining, TimeRemaining};

/// All computed views for a single goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalOverview {
    /// Staged milestone progress, `None` with no milestones or no logs.
    pub progress: Option<ProgressSnapshot>,
    /// Time until the deadline, `None` with no deadline set.
    pub time_remaining: Option<TimeRemaining>,
    /// Two-point required-pace projection, empty with fewer than two
    /// logs or no deadline.
    pub projection: Vec<ProjectionPoint>,
}

/// Load a goal's milestones and logs from `store` and compute its
/// overview as of `today`.
///
/// # Errors
/// Propagates store failures and engine `InvalidInput` rejections.
pub async fn goal_overview(
    store: &dyn FitnessStore,
    goal: &Goal,
    today: NaiveDate,
) -> Result<GoalOverview> {
    let milestones = store.list_milestones(goal.id).await?;
    let logs = store.list_logs_for_goal(goal.id).await?;

    let progress = compute_milestone_progress(goal, &milestones, &logs)?;

    Ok(GoalOverview {
        progress,
        time_remaining: compute_time_remaining(goal.deadline, today),
        projection: compute_projection(goal, &logs),
    })
}
