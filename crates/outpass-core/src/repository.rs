//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Absent records are signalled
//! with [`OutpassError::NotFound`], kept distinct from I/O faults so
//! callers can tell "no such record" from "storage is down".
//!
//! [`OutpassError::NotFound`]: crate::error::OutpassError::NotFound

use uuid::Uuid;

use crate::error::OutpassResult;
use crate::models::outpass_request::{CreateOutpassRequest, OutpassRequest, OutpassStatus};
use crate::models::user::{CreateUser, User};

// ---------------------------------------------------------------------------
// Outpass requests
// ---------------------------------------------------------------------------

pub trait OutpassRequestRepository: Send + Sync {
    /// Insert a new request in `Pending` status.
    fn create(
        &self,
        input: CreateOutpassRequest,
    ) -> impl Future<Output = OutpassResult<OutpassRequest>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = OutpassResult<OutpassRequest>> + Send;

    /// Atomically set the status of an existing request.
    ///
    /// Either the stored status becomes `new_status` and is durably
    /// visible to subsequent reads, or the call fails and the stored
    /// status is unchanged. A missing id is `NotFound` and must never
    /// create a record.
    fn update_status(
        &self,
        id: Uuid,
        new_status: OutpassStatus,
    ) -> impl Future<Output = OutpassResult<OutpassRequest>> + Send;
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

pub trait UserRepository: Send + Sync {
    fn create(&self, input: CreateUser) -> impl Future<Output = OutpassResult<User>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = OutpassResult<User>> + Send;
}
