// ABOUTME: Storage abstraction for goals, milestones, and weight-log entries
// ABOUTME: Trait consumed by the application layer, with pluggable backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Fitness Store
//!
//! The engine itself never touches storage: callers load snapshots
//! through this trait, feed them to the pure engine functions, and
//! reload after every mutation. Backends implement `FitnessStore`;
//! `memory::MemoryStore` is the in-process backend the test suite runs
//! against.
//!
//! Date normalization is the backend's contract: every `NaiveDate`
//! handed out of a store method is already a local-midnight calendar
//! date. Cascade behavior on goal deletion is a backend policy decision,
//! not part of this trait's contract.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Goal, GoalStatus, Milestone, WeightLogEntry};

pub mod memory;

pub use memory::MemoryStore;

/// Partial update for a goal. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalPatch {
    /// New display name.
    pub name: Option<String>,
    /// New lifecycle state.
    pub status: Option<GoalStatus>,
    /// Replacement starting weight. Replaces the reference point
    /// explicitly; the engine never adjusts it incrementally.
    pub starting_weight: Option<f64>,
    /// Replacement starting date.
    pub starting_date: Option<NaiveDate>,
    /// New target weight.
    pub target_weight: Option<f64>,
    /// Deadline change: `None` leaves it untouched, `Some(Some(date))`
    /// sets it, `Some(None)` clears it back to "no deadline".
    pub deadline: Option<Option<NaiveDate>>,
    /// Toggle milestone tracking.
    pub enable_milestones: Option<bool>,
}

/// Partial update for a weight-log entry. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeightLogPatch {
    /// New observed weight.
    pub weight: Option<f64>,
    /// New observation date.
    pub log_date: Option<NaiveDate>,
}

/// Persistent store for goals, milestones, and weight-log entries.
///
/// All backends must return log lists in ascending `log_date` order —
/// the engine's "latest entry" definition depends on it.
#[async_trait]
pub trait FitnessStore: Send + Sync {
    /// Persist a new goal, returning the stored record (with an assigned
    /// id when the caller passed a nil one).
    async fn create_goal(&self, goal: &Goal) -> Result<Goal>;

    /// Apply a partial update to an existing goal.
    async fn update_goal(&self, id: Uuid, patch: &GoalPatch) -> Result<()>;

    /// Replace a goal's entire milestone set. Milestone edits are
    /// delete-then-recreate, never per-milestone patches.
    async fn replace_milestones(&self, goal_id: Uuid, milestones: &[Milestone]) -> Result<()>;

    /// List a goal's milestones in ascending `milestone_number` order.
    async fn list_milestones(&self, goal_id: Uuid) -> Result<Vec<Milestone>>;

    /// Persist a new weight-log entry, returning the stored record.
    async fn create_log_entry(&self, entry: &WeightLogEntry) -> Result<WeightLogEntry>;

    /// Apply a partial update to an existing log entry.
    async fn update_log_entry(&self, id: Uuid, patch: &WeightLogPatch) -> Result<()>;

    /// Delete a log entry by id.
    async fn delete_log_entry(&self, id: Uuid) -> Result<()>;

    /// List a user's goals, optionally filtered by status.
    async fn list_goals_for_user(
        &self,
        user_id: Uuid,
        status: Option<GoalStatus>,
    ) -> Result<Vec<Goal>>;

    /// List a goal's log entries, ascending by `log_date`.
    async fn list_logs_for_goal(&self, goal_id: Uuid) -> Result<Vec<WeightLogEntry>>;
}
