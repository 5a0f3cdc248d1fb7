// ABOUTME: Shared boundary validation for weights and milestone sequences
// ABOUTME: Rejects non-finite numbers and gapped/out-of-order milestone numbering
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Input Validation
//!
//! Checks applied once, at the planner/evaluator boundary. Anything that
//! passes here is safe to feed through the arithmetic without producing
//! NaN or Infinity; the only remaining numeric hazard is division by
//! zero, which every formula guards explicitly.

use crate::constants::percent;
use crate::errors::{EngineError, EngineResult};
use crate::models::{Goal, Milestone, WeightLogEntry};

/// Reject non-finite weight values (NaN, +/-Infinity).
///
/// # Errors
/// Returns `EngineError::InvalidInput` naming the offending field.
pub fn ensure_finite_weight(field: &str, value: f64) -> EngineResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::invalid_input(format!(
            "{field} is not a finite number"
        )))
    }
}

/// Validate a goal's reference weights.
///
/// # Errors
/// Returns `EngineError::InvalidInput` if either weight is non-finite.
pub fn validate_goal_weights(goal: &Goal) -> EngineResult<()> {
    ensure_finite_weight("starting_weight", goal.starting_weight)?;
    ensure_finite_weight("target_weight", goal.target_weight)
}

/// Validate an ordered milestone slice: finite targets and a dense,
/// contiguous `1..=N` numbering with no gaps or out-of-order entries.
///
/// An empty slice is valid; "no milestones" is a no-data case, not an
/// error.
///
/// # Errors
/// Returns `EngineError::InvalidInput` describing the first violation.
pub fn validate_milestone_sequence(milestones: &[Milestone]) -> EngineResult<()> {
    for (index, milestone) in milestones.iter().enumerate() {
        let expected = index as u32 + 1;
        if milestone.milestone_number != expected {
            return Err(EngineError::invalid_input(format!(
                "milestone sequence broken at position {index}: expected number {expected}, found {}",
                milestone.milestone_number
            )));
        }
        ensure_finite_weight("milestone target_weight", milestone.target_weight)?;
    }
    Ok(())
}

/// Validate logged weights.
///
/// # Errors
/// Returns `EngineError::InvalidInput` if any entry's weight is non-finite.
pub fn validate_log_weights(logs: &[WeightLogEntry]) -> EngineResult<()> {
    for entry in logs {
        ensure_finite_weight("log entry weight", entry.weight)?;
    }
    Ok(())
}

/// Clamp a percentage into `[0, 100]`.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    value.clamp(percent::MIN, percent::MAX)
}

/// Ratio with an explicit zero-denominator guard: zero denominator yields
/// zero, never NaN or Infinity.
#[must_use]
pub fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
