//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use authgate_core::types::UserId;

/// A human user who logs in with account name and password.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Unique login name.
    pub account: String,
    /// Argon2 PHC string of pepper + password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to insert a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Pre-generated identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login name.
    pub account: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// Column-level changes for an existing user. `None` leaves the column as is.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    /// New display name.
    pub name: Option<String>,
    /// New pre-hashed password.
    pub password_hash: Option<String>,
}

impl UserChanges {
    /// True when no column would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.password_hash.is_none()
    }
}
