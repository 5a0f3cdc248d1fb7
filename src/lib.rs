// ABOUTME: Library entry point for the paceline goal progress engine
// ABOUTME: Pure milestone/progress computation plus the async storage abstraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Paceline
//!
//! Goal and milestone progress engine for weight-tracking dashboards.
//!
//! Every computation here is pure and synchronous over in-memory
//! snapshots: the caller loads a [`models::Goal`], its ordered
//! [`models::Milestone`] set, and its [`models::WeightLogEntry`] history
//! through a [`store::FitnessStore`] backend, then feeds that snapshot
//! to the evaluators. After any mutation the caller reloads and
//! recomputes — there is no incremental update model and no hidden
//! state.
//!
//! ## Components
//!
//! - [`planner`] — generates and maintains the ordered milestone plan
//!   between a goal's starting and target weights
//! - [`progress`] — staged milestone completion and the current
//!   milestone's progress percentage
//! - [`time_remaining`] — days/weeks/months remaining until a deadline
//! - [`projection`] — two-point required-pace line from the latest
//!   observation to the deadline
//! - [`comparator`] — cross-goal statistics, aggregates, and rankings
//! - [`overview`] — async glue bundling the single-goal views
//!
//! Empty or missing input (no logs, no milestones, no deadline) yields a
//! well-defined no-data result; only data the store should never have
//! persisted (non-finite weights, broken milestone numbering) is
//! rejected, as [`errors::EngineError::InvalidInput`].

pub mod comparator;
pub mod constants;
pub mod errors;
pub mod models;
pub mod overview;
pub mod planner;
pub mod progress;
pub mod projection;
pub mod store;
pub mod time_remaining;
pub mod validation;

pub use comparator::{compare_goals, ComparisonReport, GoalHistory, GoalStats};
pub use errors::{EngineError, EngineResult};
pub use models::{Goal, GoalDirection, GoalStatus, Milestone, WeightLogEntry};
pub use overview::{goal_overview, GoalOverview};
pub use planner::{generate_milestones, regenerate_milestones, remove_milestone};
pub use progress::{compute_milestone_progress, MilestoneProgress, ProgressSnapshot};
pub use projection::{compute_projection, ProjectionPoint};
pub use store::{FitnessStore, GoalPatch, MemoryStore, WeightLogPatch};
pub use time_remaining::{compute_time_remaining, TimeRemaining};
