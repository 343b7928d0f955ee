use thiserror::Error;

use crate::store::ComponentId;

/// Errors raised by the interaction state model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// No record exists for the component.
    #[error("Unknown component {0:?}")]
    UnknownComponent(ComponentId),

    /// No group with this name is registered.
    #[error("Unknown group '{0}'")]
    UnknownGroup(String),

    /// A group with this name is already registered.
    #[error("Group '{0}' is already registered")]
    DuplicateGroup(String),

    /// A state record violates one of its invariants.
    #[error("Inconsistent component state: {reason}")]
    InconsistentState {
        /// What is wrong with the record.
        reason: String,
    },
}

impl StateError {
    /// Create an inconsistent state error.
    pub fn inconsistent(reason: impl Into<String>) -> Self {
        Self::InconsistentState {
            reason: reason.into(),
        }
    }
}

/// Result type for state operations.
pub type StateResult<T> = Result<T, StateError>;
