//! Outpass request domain model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::OutpassError;

/// Lifecycle status of an outpass request.
///
/// The string form is the exact variant name; it is also the stored
/// representation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutpassStatus {
    Pending,
    Approved,
    Rejected,
}

impl OutpassStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutpassStatus::Pending => "Pending",
            OutpassStatus::Approved => "Approved",
            OutpassStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for OutpassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutpassStatus {
    type Err = OutpassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OutpassStatus::Pending),
            "Approved" => Ok(OutpassStatus::Approved),
            "Rejected" => Ok(OutpassStatus::Rejected),
            other => Err(OutpassError::InvalidStatus {
                given: other.to_string(),
            }),
        }
    }
}

/// A student's request to leave campus.
///
/// `status` is mutated only through the transition workflow; the other
/// fields are immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutpassRequest {
    pub id: Uuid,
    /// The user who filed the request.
    pub user_id: Uuid,
    pub status: OutpassStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to file a new outpass request.
///
/// New requests always start in [`OutpassStatus::Pending`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOutpassRequest {
    pub user_id: Uuid,
}
