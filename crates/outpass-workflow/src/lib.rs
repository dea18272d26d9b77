//! Outpass Workflow — status transition orchestration.

pub mod config;
pub mod error;
pub mod service;

pub use config::WorkflowConfig;
pub use error::TransitionError;
pub use service::{NotificationOutcome, TransitionOutcome, TransitionService};
