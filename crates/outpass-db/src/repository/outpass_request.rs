//! SurrealDB implementation of [`OutpassRequestRepository`].

use std::str::FromStr;

use chrono::{DateTime, Utc};
use outpass_core::error::OutpassResult;
use outpass_core::models::outpass_request::{CreateOutpassRequest, OutpassRequest, OutpassStatus};
use outpass_core::repository::OutpassRequestRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct OutpassRequestRow {
    user_id: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn parse_status(s: &str) -> Result<OutpassStatus, DbError> {
    OutpassStatus::from_str(s)
        .map_err(|_| DbError::Migration(format!("unknown outpass status in storage: {s}")))
}

impl OutpassRequestRow {
    fn into_request(self, id: Uuid) -> Result<OutpassRequest, DbError> {
        let user_id = Uuid::parse_str(&self.user_id)
            .map_err(|e| DbError::Migration(format!("invalid user UUID: {e}")))?;
        Ok(OutpassRequest {
            id,
            user_id,
            status: parse_status(&self.status)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// SurrealDB implementation of the outpass request repository.
#[derive(Clone)]
pub struct SurrealOutpassRequestRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealOutpassRequestRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> OutpassRequestRepository for SurrealOutpassRequestRepository<C> {
    async fn create(&self, input: CreateOutpassRequest) -> OutpassResult<OutpassRequest> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('outpass_request', $id) SET \
                 user_id = $user_id, \
                 status = $status",
            )
            .bind(("id", id_str.clone()))
            .bind(("user_id", input.user_id.to_string()))
            .bind(("status", OutpassStatus::Pending.as_str().to_string()))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Migration(e.to_string()))?;

        let rows: Vec<OutpassRequestRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "outpass_request".into(),
            id: id_str,
        })?;

        Ok(row.into_request(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> OutpassResult<OutpassRequest> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('outpass_request', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<OutpassRequestRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "outpass_request".into(),
            id: id_str,
        })?;

        Ok(row.into_request(id)?)
    }

    async fn update_status(&self, id: Uuid, new_status: OutpassStatus) -> OutpassResult<OutpassRequest> {
        let id_str = id.to_string();

        // A single UPDATE on a specific record id: the write is atomic
        // and a missing record yields no rows instead of being created.
        let result = self
            .db
            .query(
                "UPDATE type::record('outpass_request', $id) SET \
                 status = $status, updated_at = time::now()",
            )
            .bind(("id", id_str.clone()))
            .bind(("status", new_status.as_str().to_string()))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Migration(e.to_string()))?;

        let rows: Vec<OutpassRequestRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "outpass_request".into(),
            id: id_str,
        })?;

        Ok(row.into_request(id)?)
    }
}
