//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A student account.
///
/// Contact fields are optional: accounts can exist before a student
/// has filled in their profile, and the transition workflow must cope
/// with that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Contact details usable for notification delivery.
    ///
    /// Returns `(email, name)` only when both are present and
    /// non-empty; an empty string counts as absent.
    pub fn contact(&self) -> Option<(&str, &str)> {
        let email = self.email.as_deref().filter(|e| !e.is_empty())?;
        let name = self.name.as_deref().filter(|n| !n.is_empty())?;
        Some((email, name))
    }
}

/// Fields required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}
