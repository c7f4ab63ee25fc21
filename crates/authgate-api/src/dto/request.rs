//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use authgate_entity::permission::Permission;

/// User login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Account is required"))]
    pub account: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Client login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClientLoginRequest {
    /// Client id as issued at creation.
    #[validate(length(min = 1, message = "Client id is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Secret is required"))]
    pub secret: String,
}

/// Create user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Login account, unique.
    #[validate(length(min = 1, max = 255))]
    pub account: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Partial user update (admin). Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub password: Option<String>,
}

/// Create client request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateClientRequest {
    /// Permissions to grant; each must be a registered permission.
    #[validate(length(min = 1, message = "At least one permission is required"))]
    pub scope: Vec<Permission>,
}

/// Replace a client's scope.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, message = "At least one permission is required"))]
    pub scope: Vec<Permission>,
}
