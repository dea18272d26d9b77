//! Error types for the Outpass system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutpassError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Unknown outpass status: {given}")]
    InvalidStatus { given: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Notification delivery failed: {0}")]
    NotificationDelivery(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type OutpassResult<T> = Result<T, OutpassError>;
