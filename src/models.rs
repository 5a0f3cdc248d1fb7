// ABOUTME: Core data models for weight goals, milestones, and log entries
// ABOUTME: Shared between the storage abstraction and the progress engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Domain Models
//!
//! All dates are plain calendar dates (`chrono::NaiveDate`) with no
//! time-of-day or timezone component. Normalizing timestamps to
//! local-midnight calendar dates is a binding contract at the store/UI
//! boundary; it happens once, before data enters the engine.
//!
//! Weights are unit-agnostic `f64` values; the caller picks the unit
//! (observed usage is pounds) and the engine never converts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a goal. Transitions are caller-driven and never
/// trigger recomputation cascades inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Goal is being actively tracked.
    Active,
    /// Goal was reached and closed out.
    Completed,
    /// Goal was shelved without completion.
    Archived,
}

/// Which way the weight is supposed to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalDirection {
    /// Target weight is at or below the starting weight.
    Loss,
    /// Target weight is above the starting weight.
    Gain,
}

impl GoalDirection {
    /// Direction-aware reach test: has `current` reached or passed `target`?
    #[must_use]
    pub fn reached(self, current: f64, target: f64) -> bool {
        match self {
            Self::Loss => current <= target,
            Self::Gain => current >= target,
        }
    }
}

/// A weight target with a fixed start point, a target, and a deadline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Record identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Display name.
    pub name: String,
    /// Lifecycle state.
    pub status: GoalStatus,
    /// Reference weight at goal creation. Once entries have been logged
    /// this is a fixed reference point; edits replace it explicitly.
    pub starting_weight: f64,
    /// Reference date at goal creation. Same fixed-reference rule as
    /// `starting_weight`.
    pub starting_date: NaiveDate,
    /// The weight the user is working toward.
    pub target_weight: f64,
    /// Deadline for reaching the target. Invariant when set:
    /// `deadline >= starting_date`.
    pub deadline: Option<NaiveDate>,
    /// Whether intermediate milestones are tracked for this goal.
    pub enable_milestones: bool,
}

impl Goal {
    /// Direction of this goal, derived from its start/target weights.
    ///
    /// A goal whose target equals its start counts as a loss goal so the
    /// reach test stays `current <= target`.
    #[must_use]
    pub fn direction(&self) -> GoalDirection {
        if self.target_weight <= self.starting_weight {
            GoalDirection::Loss
        } else {
            GoalDirection::Gain
        }
    }
}

/// An ordered intermediate weight checkpoint between a goal's starting
/// weight and its target weight.
///
/// Milestone numbers are 1-based and densely sequential within a goal:
/// the set always forms a contiguous `1..=N` sequence with no gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    /// The goal this milestone belongs to.
    pub goal_id: Uuid,
    /// 1-based position in the milestone sequence.
    pub milestone_number: u32,
    /// Weight the user must reach for this milestone to complete.
    pub target_weight: f64,
}

/// A single weight observation tied to a calendar date.
///
/// Multiple entries per day are permitted. "Current weight" is defined as
/// the weight of the most recent entry by `log_date`; within a day, the
/// store's ascending order decides (last entry wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightLogEntry {
    /// Record identifier.
    pub id: Uuid,
    /// The goal this entry was logged against.
    pub goal_id: Uuid,
    /// Observed weight.
    pub weight: f64,
    /// Calendar date of the observation.
    pub log_date: NaiveDate,
}

/// Most recent entry of an ascending-by-date log slice, if any.
#[must_use]
pub fn latest_entry(logs: &[WeightLogEntry]) -> Option<&WeightLogEntry> {
    logs.last()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(starting: f64, target: f64) -> Goal {
        Goal {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "test".to_owned(),
            status: GoalStatus::Active,
            starting_weight: starting,
            starting_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            target_weight: target,
            deadline: None,
            enable_milestones: true,
        }
    }

    #[test]
    fn direction_from_weights() {
        assert_eq!(goal(200.0, 180.0).direction(), GoalDirection::Loss);
        assert_eq!(goal(140.0, 155.0).direction(), GoalDirection::Gain);
        // Equal start and target counts as loss.
        assert_eq!(goal(150.0, 150.0).direction(), GoalDirection::Loss);
    }

    #[test]
    fn reach_test_is_direction_aware() {
        assert!(GoalDirection::Loss.reached(184.9, 185.0));
        assert!(GoalDirection::Loss.reached(185.0, 185.0));
        assert!(!GoalDirection::Loss.reached(185.1, 185.0));
        assert!(GoalDirection::Gain.reached(155.2, 155.0));
        assert!(!GoalDirection::Gain.reached(154.8, 155.0));
    }
}
