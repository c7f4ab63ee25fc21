//! Client entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use authgate_core::types::{ClientId, UserId};

/// A machine client owned by exactly one user.
///
/// `scope` holds permission strings; values are checked against the
/// [`Permission`](crate::Permission) registry before they are stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    /// Unique client identifier, used as the login id.
    pub id: ClientId,
    /// Owning user.
    pub user_id: UserId,
    /// Granted permissions.
    pub scope: Vec<String>,
    /// Argon2 PHC string of pepper + secret.
    #[serde(skip_serializing)]
    pub secret_hash: String,
    /// When the client was created.
    pub created_at: DateTime<Utc>,
    /// When the client was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Client {
    /// The scope as carried in token claims: space-separated.
    pub fn scope_string(&self) -> String {
        self.scope.join(" ")
    }
}

/// Data required to insert a new client.
#[derive(Debug, Clone)]
pub struct NewClient {
    /// Pre-generated identifier.
    pub id: ClientId,
    /// Owning user.
    pub user_id: UserId,
    /// Granted permissions.
    pub scope: Vec<String>,
    /// Pre-hashed secret.
    pub secret_hash: String,
}

/// Column-level changes for an existing client. `None` leaves the column as is.
#[derive(Debug, Clone, Default)]
pub struct ClientChanges {
    /// Replacement scope.
    pub scope: Option<Vec<String>>,
    /// Replacement pre-hashed secret.
    pub secret_hash: Option<String>,
}

impl ClientChanges {
    /// True when no column would change.
    pub fn is_empty(&self) -> bool {
        self.scope.is_none() && self.secret_hash.is_none()
    }
}
