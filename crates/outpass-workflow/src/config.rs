//! Transition workflow configuration.

use std::time::Duration;

/// Configuration for the transition service.
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// Upper bound on a single notifier call. A call that exceeds the
    /// bound counts as a failed delivery, not an operation failure
    /// (default: 10 seconds).
    pub notify_timeout: Duration,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            notify_timeout: Duration::from_secs(10),
        }
    }
}
