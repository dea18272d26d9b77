//! Outpass Notify — status-change message composition and the
//! tracing-backed default [`Notifier`] implementation.
//!
//! A real mail transport plugs in behind the same `outpass-core`
//! [`Notifier`] trait; this crate owns what the message says, not how
//! it travels.
//!
//! [`Notifier`]: outpass_core::notifier::Notifier

pub mod log;
pub mod message;

pub use log::LogNotifier;
pub use message::StatusChangeEmail;
