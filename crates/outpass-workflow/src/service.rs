//! Transition service — status mutation and notification
//! orchestration.

use std::str::FromStr;

use outpass_core::error::OutpassError;
use outpass_core::models::notification::NotificationResult;
use outpass_core::models::outpass_request::{OutpassRequest, OutpassStatus};
use outpass_core::notifier::Notifier;
use outpass_core::repository::{OutpassRequestRepository, UserRepository};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::WorkflowConfig;
use crate::error::TransitionError;

/// How the notification leg of a transition ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// No delivery attempt was made.
    Skipped { reason: String },
    /// The notifier reported successful delivery.
    Delivered,
    /// The notifier was invoked and did not deliver.
    Failed { error: String },
}

impl NotificationOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, NotificationOutcome::Delivered)
    }

    fn from_result(result: NotificationResult) -> Self {
        if result.delivered {
            NotificationOutcome::Delivered
        } else {
            NotificationOutcome::Failed {
                error: result
                    .error
                    .unwrap_or_else(|| "delivery failed".to_string()),
            }
        }
    }
}

/// Result of a completed transition.
///
/// The request mutation is authoritative; the notification outcome is
/// informational and never implies a rollback.
#[derive(Debug, Clone)]
pub struct TransitionOutcome {
    /// The request after the status write.
    pub request: OutpassRequest,
    pub notification: NotificationOutcome,
}

/// Transition service.
///
/// Generic over the store and notifier ports so the workflow layer
/// has no dependency on the database crate or on a concrete
/// transport.
pub struct TransitionService<R: OutpassRequestRepository, U: UserRepository, N: Notifier> {
    request_repo: R,
    user_repo: U,
    notifier: N,
    config: WorkflowConfig,
}

impl<R: OutpassRequestRepository, U: UserRepository, N: Notifier> TransitionService<R, U, N> {
    pub fn new(request_repo: R, user_repo: U, notifier: N, config: WorkflowConfig) -> Self {
        Self {
            request_repo,
            user_repo,
            notifier,
            config,
        }
    }

    /// Move a request to `new_status` and notify its owner.
    ///
    /// The status write is the commit point: once it succeeds the
    /// transition is final, and every later fault (missing owner,
    /// missing contact details, transport failure, timeout) is
    /// reported through [`TransitionOutcome::notification`] instead
    /// of failing the call.
    pub async fn transition(
        &self,
        request_id: Uuid,
        new_status: &str,
    ) -> Result<TransitionOutcome, TransitionError> {
        // 1. Validate the target status before touching storage.
        let status = OutpassStatus::from_str(new_status).map_err(|_| {
            TransitionError::InvalidStatus {
                given: new_status.to_string(),
            }
        })?;

        // 2. The request must exist before it can be transitioned.
        self.request_repo
            .get_by_id(request_id)
            .await
            .map_err(|e| not_found_or_storage(request_id, e))?;

        // 3. Commit point — after this write the new status is the
        //    durable source of truth.
        let request = self
            .request_repo
            .update_status(request_id, status)
            .await
            .map_err(|e| not_found_or_storage(request_id, e))?;

        info!(
            request_id = %request_id,
            status = %status,
            "Outpass status updated"
        );

        // 4. Owner lookup and delivery are best-effort from here on.
        let notification = self.notify_owner(&request, status).await;
        match &notification {
            NotificationOutcome::Skipped { reason } => {
                warn!(request_id = %request_id, reason = %reason, "Notification skipped");
            }
            NotificationOutcome::Failed { error } => {
                warn!(request_id = %request_id, error = %error, "Notification not delivered");
            }
            NotificationOutcome::Delivered => {}
        }

        Ok(TransitionOutcome {
            request,
            notification,
        })
    }

    /// Look up the request owner and attempt delivery.
    ///
    /// Runs strictly after the commit point, so every failure mode
    /// collapses into a [`NotificationOutcome`] value.
    async fn notify_owner(
        &self,
        request: &OutpassRequest,
        status: OutpassStatus,
    ) -> NotificationOutcome {
        let user = match self.user_repo.get_by_id(request.user_id).await {
            Ok(user) => user,
            Err(OutpassError::NotFound { .. }) => {
                return NotificationOutcome::Skipped {
                    reason: "request owner not found".to_string(),
                };
            }
            Err(e) => {
                return NotificationOutcome::Skipped {
                    reason: format!("owner lookup failed: {e}"),
                };
            }
        };

        let Some((email, name)) = user.contact() else {
            return NotificationOutcome::Skipped {
                reason: "owner has no usable contact details".to_string(),
            };
        };

        let send = self
            .notifier
            .notify_status_change(email, name, request.id, status);
        match tokio::time::timeout(self.config.notify_timeout, send).await {
            Ok(result) => NotificationOutcome::from_result(result),
            Err(_) => NotificationOutcome::Failed {
                error: format!("notifier timed out after {:?}", self.config.notify_timeout),
            },
        }
    }
}

fn not_found_or_storage(request_id: Uuid, err: OutpassError) -> TransitionError {
    match err {
        OutpassError::NotFound { .. } => TransitionError::RequestNotFound { id: request_id },
        other => TransitionError::Storage(other.to_string()),
    }
}
