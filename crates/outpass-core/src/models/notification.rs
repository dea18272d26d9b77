//! Notification delivery reporting.

use serde::{Deserialize, Serialize};

/// Outcome of a single notification delivery attempt.
///
/// Notifiers report failure as data rather than as an error so that a
/// broken transport cannot abort the operation that triggered the
/// notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationResult {
    pub delivered: bool,
    /// Diagnostic for a failed attempt.
    pub error: Option<String>,
}

impl NotificationResult {
    pub fn delivered() -> Self {
        Self {
            delivered: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            delivered: false,
            error: Some(error.into()),
        }
    }
}
