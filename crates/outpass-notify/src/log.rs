//! Tracing-backed notifier.

use outpass_core::models::notification::NotificationResult;
use outpass_core::models::outpass_request::OutpassStatus;
use outpass_core::notifier::Notifier;
use tracing::info;
use uuid::Uuid;

use crate::message::StatusChangeEmail;

/// Notifier that writes the composed email to the log instead of a
/// mail transport.
///
/// Used for local runs and as the shipped default; deployments swap
/// in a transport-backed implementation at the same trait seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    async fn notify_status_change(
        &self,
        recipient_email: &str,
        recipient_name: &str,
        request_id: Uuid,
        new_status: OutpassStatus,
    ) -> NotificationResult {
        let email = StatusChangeEmail::compose(recipient_name, request_id, new_status);
        info!(
            recipient = %recipient_email,
            request_id = %request_id,
            status = %new_status,
            subject = %email.subject,
            "Dispatching status-change notification"
        );
        NotificationResult::delivered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_notifier_reports_delivery() {
        let result = LogNotifier
            .notify_status_change("a@b.com", "Alice", Uuid::new_v4(), OutpassStatus::Approved)
            .await;
        assert!(result.delivered);
        assert_eq!(result.error, None);
    }
}
