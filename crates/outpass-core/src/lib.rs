//! Outpass Core — domain models, the shared error taxonomy, and the
//! port traits every other crate implements or consumes.

pub mod error;
pub mod models;
pub mod notifier;
pub mod repository;

pub use error::{OutpassError, OutpassResult};
pub use models::notification::NotificationResult;
pub use models::outpass_request::{CreateOutpassRequest, OutpassRequest, OutpassStatus};
pub use models::user::{CreateUser, User};
pub use notifier::Notifier;
pub use repository::{OutpassRequestRepository, UserRepository};
