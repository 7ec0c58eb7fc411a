//! Centralized error types for the roster workspace.

use crate::types::{ItemId, Operation};
use thiserror::Error;

/// Top-level error enum. Variants map to the rejection points of a mutation:
/// policy gate, name validation, identity lookup, remote synchronization.
///
/// `Clone + PartialEq` so error sinks can retain delivered errors and tests
/// can assert on exactly what surfaced.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum RosterError {
    #[error("Operation '{operation}' denied: {reason}")]
    PolicyDenied { operation: Operation, reason: String },

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Remote sync failed: {0}")]
    Remote(String),
}

impl RosterError {
    /// Shorthand for a policy rejection.
    pub fn denied(operation: Operation, reason: impl Into<String>) -> Self {
        Self::PolicyDenied {
            operation,
            reason: reason.into(),
        }
    }
}

pub type RosterResult<T> = Result<T, RosterError>;
