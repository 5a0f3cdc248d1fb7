// ABOUTME: Staged milestone progress evaluation from a goal's weight-log history
// ABOUTME: Derives per-milestone completion, the single current milestone, and its percentage
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Progress Evaluator
//!
//! Staged completion model: milestones complete in sequence, and a
//! milestone only becomes "current" once every earlier milestone is
//! completed — even if the raw weight comparison would mark a later one
//! as numerically satisfied. At most one milestone is current at a time;
//! zero when the whole plan is done.
//!
//! This formula is deliberately different from the comparator's
//! absolute-value overall progress (see `comparator`); the two serve
//! different contexts and must not be unified.

use serde::{Deserialize, Serialize};

use crate::errors::EngineResult;
use crate::models::{latest_entry, Goal, Milestone, WeightLogEntry};
use crate::validation::{
    clamp_percent, guarded_ratio, validate_goal_weights, validate_log_weights,
    validate_milestone_sequence,
};

/// Evaluated state of a single milestone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneProgress {
    /// 1-based position in the plan.
    pub milestone_number: u32,
    /// Weight the milestone requires.
    pub target_weight: f64,
    /// Whether the current weight has reached or passed the target,
    /// direction-aware.
    pub completed: bool,
    /// Whether this is the milestone being worked on: the first
    /// incomplete milestone whose predecessors are all completed.
    pub current: bool,
    /// 100 for completed milestones, the staged formula for the current
    /// one, 0 for milestones after it.
    pub progress_percent: f64,
}

/// Computed-on-demand progress snapshot for one goal. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Goal's fixed reference weight.
    pub starting_weight: f64,
    /// Goal's target weight.
    pub target_weight: f64,
    /// Weight of the most recent log entry.
    pub current_weight: f64,
    /// `starting_weight - current_weight`.
    pub total_change: f64,
    /// Per-milestone evaluation in ascending milestone order.
    pub milestones: Vec<MilestoneProgress>,
}

/// Evaluate staged milestone progress for one goal.
///
/// `milestones` must be ordered by ascending `milestone_number` and
/// `logs` ascending by date, as the store returns them. With no
/// milestones or no log history there is nothing to evaluate and the
/// result is `Ok(None)` — a well-defined no-data result, not an error
/// and never a partially computed structure.
///
/// # Errors
/// Returns `InvalidInput` for non-finite weights or a milestone sequence
/// with gaps or out-of-order numbers.
pub fn compute_milestone_progress(
    goal: &Goal,
    milestones: &[Milestone],
    logs: &[WeightLogEntry],
) -> EngineResult<Option<ProgressSnapshot>> {
    validate_goal_weights(goal)?;
    validate_milestone_sequence(milestones)?;
    validate_log_weights(logs)?;

    let Some(latest) = latest_entry(logs) else {
        return Ok(None);
    };
    if milestones.is_empty() {
        return Ok(None);
    }

    let current_weight = latest.weight;
    let direction = goal.direction();

    let mut evaluated = Vec::with_capacity(milestones.len());
    let mut all_earlier_completed = true;

    for (index, milestone) in milestones.iter().enumerate() {
        let completed = direction.reached(current_weight, milestone.target_weight);
        let current = !completed && all_earlier_completed;

        let progress_percent = if completed {
            100.0
        } else if current {
            let base = if index == 0 {
                goal.starting_weight
            } else {
                milestones[index - 1].target_weight
            };
            let ratio = guarded_ratio(base - current_weight, base - milestone.target_weight);
            clamp_percent((ratio * 100.0).round())
        } else {
            0.0
        };

        evaluated.push(MilestoneProgress {
            milestone_number: milestone.milestone_number,
            target_weight: milestone.target_weight,
            completed,
            current,
            progress_percent,
        });

        all_earlier_completed = all_earlier_completed && completed;
    }

    tracing::debug!(
        goal_id = %goal.id,
        current_weight,
        completed = evaluated.iter().filter(|m| m.completed).count(),
        "evaluated milestone progress"
    );

    Ok(Some(ProgressSnapshot {
        starting_weight: goal.starting_weight,
        target_weight: goal.target_weight,
        current_weight,
        total_change: goal.starting_weight - current_weight,
        milestones: evaluated,
    }))
}
