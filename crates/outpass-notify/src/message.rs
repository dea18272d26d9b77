//! Status-change notification message composition.

use outpass_core::models::outpass_request::OutpassStatus;
use uuid::Uuid;

/// A composed status-change email, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChangeEmail {
    pub subject: String,
    pub html_body: String,
}

impl StatusChangeEmail {
    /// Build the notification email for a status change.
    ///
    /// The status word is uppercased and styled green for an approval
    /// and red otherwise, so the outcome is readable at a glance.
    pub fn compose(recipient_name: &str, request_id: Uuid, new_status: OutpassStatus) -> Self {
        let color = match new_status {
            OutpassStatus::Approved => "green",
            _ => "red",
        };
        let status_word = new_status.as_str().to_uppercase();

        let subject = format!("Outpass Request Update - ID: {request_id}");
        let html_body = format!(
            "<div style=\"font-family: Arial, sans-serif; line-height: 1.6;\">\
             <h2 style=\"color: #004d99;\">E-Outpass System Notification</h2>\
             <p>Dear {recipient_name},</p>\
             <p>This is to inform you about the status of your recent outpass \
             request (ID: <strong>{request_id}</strong>).</p>\
             <p>The request has been <strong style=\"color: {color};\">\
             {status_word}</strong> by the HOD.</p>\
             <p>For more details, please log in to the E-Outpass portal.</p>\
             <br>\
             <p>Thank you,<br>The E-Outpass Team</p>\
             </div>"
        );

        Self { subject, html_body }
    }
}
