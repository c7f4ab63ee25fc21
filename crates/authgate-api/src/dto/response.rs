//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use authgate_auth::jwt::IssuedToken;
use authgate_entity::client::Client;
use authgate_entity::resource::Resource;
use authgate_entity::user::User;

/// Access token response for both user and client logins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
}

impl From<IssuedToken> for TokenResponse {
    fn from(token: IssuedToken) -> Self {
        Self {
            access_token: token.token,
            token_type: "Bearer".to_string(),
            expires_in: token.expires_in,
        }
    }
}

/// User summary for responses. Never includes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub account: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_uuid(),
            name: user.name,
            account: user.account,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// User list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
}

/// Client summary for responses. Never includes the secret hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub scope: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.into_uuid(),
            user_id: client.user_id.into_uuid(),
            scope: client.scope,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

/// Client list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientListResponse {
    pub clients: Vec<ClientResponse>,
}

/// Client plus its plaintext secret, returned once on creation or rotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSecretResponse {
    #[serde(flatten)]
    pub client: ClientResponse,
    pub secret: String,
}

/// Created resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceResponse {
    pub id: Uuid,
}

impl From<Resource> for ResourceResponse {
    fn from(resource: Resource) -> Self {
        Self {
            id: resource.id.into_uuid(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    pub version: String,
    /// `connected`, `unreachable`, or `not_configured`.
    pub database: String,
}
