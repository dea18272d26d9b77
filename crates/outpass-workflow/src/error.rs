//! Transition error types.

use outpass_core::error::OutpassError;
use thiserror::Error;
use uuid::Uuid;

/// Hard failures of the transition operation.
///
/// Notification problems are not represented here: they are recorded
/// in the transition outcome instead of failing the call.
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("unknown outpass status: {given}")]
    InvalidStatus { given: String },

    #[error("outpass request not found: {id}")]
    RequestNotFound { id: Uuid },

    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<TransitionError> for OutpassError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::InvalidStatus { given } => OutpassError::InvalidStatus { given },
            TransitionError::RequestNotFound { id } => OutpassError::NotFound {
                entity: "outpass_request".into(),
                id: id.to_string(),
            },
            TransitionError::Storage(msg) => OutpassError::Database(msg),
        }
    }
}
