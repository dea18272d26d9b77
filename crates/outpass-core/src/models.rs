//! Domain models for the Outpass system.
//!
//! These are the core types shared across all crates.

pub mod notification;
pub mod outpass_request;
pub mod user;
