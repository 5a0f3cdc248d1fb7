// ABOUTME: In-memory FitnessStore backend for tests and single-process use
// ABOUTME: Keeps goals in insertion order and log entries sorted ascending by date
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory store backend.
//!
//! Policy notes, since these are backend decisions rather than trait
//! contract: goals list in insertion order; same-day log entries keep
//! their insertion order (stable sort), so the last entry logged on the
//! latest date is the "current" one.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{FitnessStore, GoalPatch, WeightLogPatch};
use crate::models::{Goal, GoalStatus, Milestone, WeightLogEntry};

#[derive(Debug, Default)]
struct StoreState {
    goals: Vec<Goal>,
    milestones: HashMap<Uuid, Vec<Milestone>>,
    logs: HashMap<Uuid, Vec<WeightLogEntry>>,
}

/// In-memory `FitnessStore` backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FitnessStore for MemoryStore {
    async fn create_goal(&self, goal: &Goal) -> Result<Goal> {
        let mut stored = goal.clone();
        if stored.id.is_nil() {
            stored.id = Uuid::new_v4();
        }
        let mut state = self.state.write().await;
        if state.goals.iter().any(|g| g.id == stored.id) {
            bail!("goal {} already exists", stored.id);
        }
        state.goals.push(stored.clone());
        Ok(stored)
    }

    async fn update_goal(&self, id: Uuid, patch: &GoalPatch) -> Result<()> {
        let mut state = self.state.write().await;
        let Some(goal) = state.goals.iter_mut().find(|g| g.id == id) else {
            bail!("goal {id} not found");
        };
        if let Some(name) = &patch.name {
            goal.name.clone_from(name);
        }
        if let Some(status) = patch.status {
            goal.status = status;
        }
        if let Some(weight) = patch.starting_weight {
            goal.starting_weight = weight;
        }
        if let Some(date) = patch.starting_date {
            goal.starting_date = date;
        }
        if let Some(weight) = patch.target_weight {
            goal.target_weight = weight;
        }
        if let Some(deadline) = patch.deadline {
            goal.deadline = deadline;
        }
        if let Some(enabled) = patch.enable_milestones {
            goal.enable_milestones = enabled;
        }
        Ok(())
    }

    async fn replace_milestones(&self, goal_id: Uuid, milestones: &[Milestone]) -> Result<()> {
        let mut state = self.state.write().await;
        if !state.goals.iter().any(|g| g.id == goal_id) {
            bail!("goal {goal_id} not found");
        }
        state.milestones.insert(goal_id, milestones.to_vec());
        Ok(())
    }

    async fn list_milestones(&self, goal_id: Uuid) -> Result<Vec<Milestone>> {
        let state = self.state.read().await;
        let mut milestones = state.milestones.get(&goal_id).cloned().unwrap_or_default();
        milestones.sort_by_key(|m| m.milestone_number);
        Ok(milestones)
    }

    async fn create_log_entry(&self, entry: &WeightLogEntry) -> Result<WeightLogEntry> {
        let mut stored = entry.clone();
        if stored.id.is_nil() {
            stored.id = Uuid::new_v4();
        }
        let mut state = self.state.write().await;
        if !state.goals.iter().any(|g| g.id == stored.goal_id) {
            bail!("goal {} not found", stored.goal_id);
        }
        let logs = state.logs.entry(stored.goal_id).or_default();
        logs.push(stored.clone());
        logs.sort_by_key(|e| e.log_date);
        Ok(stored)
    }

    async fn update_log_entry(&self, id: Uuid, patch: &WeightLogPatch) -> Result<()> {
        let mut state = self.state.write().await;
        for logs in state.logs.values_mut() {
            if let Some(entry) = logs.iter_mut().find(|e| e.id == id) {
                if let Some(weight) = patch.weight {
                    entry.weight = weight;
                }
                if let Some(date) = patch.log_date {
                    entry.log_date = date;
                }
                logs.sort_by_key(|e| e.log_date);
                return Ok(());
            }
        }
        bail!("log entry {id} not found");
    }

    async fn delete_log_entry(&self, id: Uuid) -> Result<()> {
        let mut state = self.state.write().await;
        for logs in state.logs.values_mut() {
            if let Some(index) = logs.iter().position(|e| e.id == id) {
                logs.remove(index);
                return Ok(());
            }
        }
        bail!("log entry {id} not found");
    }

    async fn list_goals_for_user(
        &self,
        user_id: Uuid,
        status: Option<GoalStatus>,
    ) -> Result<Vec<Goal>> {
        let state = self.state.read().await;
        Ok(state
            .goals
            .iter()
            .filter(|g| g.user_id == user_id)
            .filter(|g| status.is_none_or(|wanted| g.status == wanted))
            .cloned()
            .collect())
    }

    async fn list_logs_for_goal(&self, goal_id: Uuid) -> Result<Vec<WeightLogEntry>> {
        let state = self.state.read().await;
        Ok(state.logs.get(&goal_id).cloned().unwrap_or_default())
    }
}
