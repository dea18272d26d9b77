//! Storage-layer error types and conversions.

use outpass_core::error::OutpassError;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("surrealdb: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("migration: {0}")]
    Migration(String),

    #[error("no {entity} record with id {id}")]
    NotFound { entity: String, id: String },
}

impl From<DbError> for OutpassError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => OutpassError::NotFound { entity, id },
            DbError::Surreal(e) => OutpassError::Database(e.to_string()),
            DbError::Migration(msg) => OutpassError::Database(msg),
        }
    }
}
