// ABOUTME: Milestone planner generating intermediate weight targets for a goal
// ABOUTME: Handles custom target overrides, regeneration rules, and removal renumbering
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Milestone Planner
//!
//! Produces the ordered set of intermediate weight targets between a
//! goal's starting weight and its target weight. Invoked when a goal is
//! created or edited; the resulting set replaces the goal's previous
//! milestones wholesale via the store's `replace_milestones`.
//!
//! The even-step formula works for loss and gain goals alike: the step
//! `(starting - target) / count` carries the correct sign automatically.

use uuid::Uuid;

use crate::constants::milestones::{MAX_COUNT, MIN_COUNT};
use crate::errors::{EngineError, EngineResult};
use crate::models::Milestone;
use crate::validation::{ensure_finite_weight, validate_milestone_sequence};

/// Clamp a requested milestone count into the supported `[1, 10]` range.
///
/// # Errors
/// A zero count is rejected as `InvalidInput` rather than clamped; it
/// signals a caller bug, not an ambitious request.
pub fn clamp_milestone_count(requested: u32) -> EngineResult<u32> {
    if requested < MIN_COUNT {
        return Err(EngineError::invalid_input(
            "milestone count must be positive",
        ));
    }
    Ok(requested.min(MAX_COUNT))
}

/// Generate a fresh milestone plan of `requested_count` evenly stepped
/// targets, numbered `1..=count`.
///
/// `custom_targets` supplies optional per-position overrides (position 0
/// overrides milestone 1). Positions beyond its length, or `None` slots,
/// fall back to the auto-computed value.
///
/// # Errors
/// Returns `InvalidInput` for a zero count or non-finite weights.
pub fn generate_milestones(
    goal_id: Uuid,
    starting_weight: f64,
    target_weight: f64,
    requested_count: u32,
    custom_targets: &[Option<f64>],
) -> EngineResult<Vec<Milestone>> {
    ensure_finite_weight("starting_weight", starting_weight)?;
    ensure_finite_weight("target_weight", target_weight)?;
    for target in custom_targets.iter().flatten() {
        ensure_finite_weight("custom milestone target", *target)?;
    }

    let count = clamp_milestone_count(requested_count)?;
    let step = (starting_weight - target_weight) / f64::from(count);

    let milestones = (1..=count)
        .map(|number| {
            let auto_target = starting_weight - step * f64::from(number);
            let target = custom_targets
                .get(number as usize - 1)
                .copied()
                .flatten()
                .unwrap_or(auto_target);
            Milestone {
                goal_id,
                milestone_number: number,
                target_weight: target,
            }
        })
        .collect();

    Ok(milestones)
}

/// Recompute a goal's milestone plan after an edit.
///
/// `custom_targets` marks the slots the user has customized, in the same
/// per-position form `generate_milestones` takes. Only those values are
/// protected: every non-custom slot is recomputed from the current
/// starting/target weights, so a weight edit refreshes stale auto
/// targets. A count change regenerates the whole plan, customized values
/// included — the one case where a user edit is overwritten.
///
/// # Errors
/// Returns `InvalidInput` for a zero count, non-finite weights, or an
/// existing set whose numbering has gaps or is out of order.
pub fn regenerate_milestones(
    goal_id: Uuid,
    starting_weight: f64,
    target_weight: f64,
    requested_count: u32,
    existing: &[Milestone],
    custom_targets: &[Option<f64>],
) -> EngineResult<Vec<Milestone>> {
    validate_milestone_sequence(existing)?;
    let count = clamp_milestone_count(requested_count)?;

    if existing.is_empty() || existing.len() != count as usize {
        return generate_milestones(goal_id, starting_weight, target_weight, count, &[]);
    }

    generate_milestones(goal_id, starting_weight, target_weight, count, custom_targets)
}

/// Remove milestone `milestone_number` from the plan.
///
/// The survivors are renumbered in a single pass back to a dense
/// `1..=(len-1)` sequence, and the requested count is decremented,
/// floored at 1. An unknown number leaves the plan unchanged.
///
/// Returns the new plan and the new requested count.
#[must_use]
pub fn remove_milestone(
    milestones: &[Milestone],
    milestone_number: u32,
    requested_count: u32,
) -> (Vec<Milestone>, u32) {
    let mut remaining: Vec<Milestone> = milestones
        .iter()
        .filter(|m| m.milestone_number != milestone_number)
        .cloned()
        .collect();

    if remaining.len() == milestones.len() {
        return (remaining, requested_count);
    }

    for (index, milestone) in remaining.iter_mut().enumerate() {
        milestone.milestone_number = index as u32 + 1;
    }

    let new_count = requested_count.saturating_sub(1).max(MIN_COUNT);
    (remaining, new_count)
}
