// ABOUTME: Error types for the goal progress engine
// ABOUTME: Single InvalidInput condition raised at planner/evaluator boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Engine Error Handling
//!
//! The engine distinguishes two non-success outcomes:
//! - `InvalidInput` — the caller handed us data the store should never have
//!   persisted (non-finite weights, a gapped or out-of-order milestone
//!   sequence, a zero milestone count). Rejected at the boundary rather
//!   than propagated as NaN through the arithmetic.
//! - "no data" — missing or empty snapshots (no logs, no milestones). This
//!   is a valid result, modeled as `None`/empty on the success path, never
//!   as an error.

use thiserror::Error;

/// Errors produced at the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Input failed boundary validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    /// Create an `InvalidInput` error with the given message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
