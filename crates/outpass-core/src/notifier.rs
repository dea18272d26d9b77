//! Notifier port — the capability that tells a student about a status
//! change.
//!
//! Implementations sit at the edge of the system (mail transport, log
//! sink, test double). The contract is deliberately not `Result`: a
//! notifier reports failure inside [`NotificationResult`] so transport
//! problems stay out of the caller's control flow.

use uuid::Uuid;

use crate::models::notification::NotificationResult;
use crate::models::outpass_request::OutpassStatus;

pub trait Notifier: Send + Sync {
    /// Attempt to deliver a status-change notification.
    ///
    /// Best-effort, single attempt. Never panics and never errors;
    /// non-delivery comes back as `delivered: false` with a
    /// diagnostic.
    fn notify_status_change(
        &self,
        recipient_email: &str,
        recipient_name: &str,
        request_id: Uuid,
        new_status: OutpassStatus,
    ) -> impl Future<Output = NotificationResult> + Send;
}
