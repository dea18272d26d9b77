//! SurrealDB repository implementations.

mod outpass_request;
mod user;

pub use outpass_request::SurrealOutpassRequestRepository;
pub use user::SurrealUserRepository;
