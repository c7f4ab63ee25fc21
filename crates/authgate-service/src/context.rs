//! Request context carrying the authenticated principal and its scope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use authgate_auth::jwt::Claims;
use authgate_auth::scope;
use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_core::types::UserId;
use authgate_entity::permission::Permission;
use authgate_entity::principal::PrincipalType;

/// Context for the current authenticated request.
///
/// Built from verified token claims by the HTTP layer and passed to
/// guards so every operation knows who is acting and with what scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// User or client id from the `sub` claim.
    pub subject_id: Uuid,
    pub principal_type: PrincipalType,
    /// Space-separated granted permissions.
    pub scope: String,
    /// Display name, set for user principals.
    pub name: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Builds a context from verified claims. The subject must be a UUID.
    pub fn from_claims(claims: Claims) -> AppResult<Self> {
        let subject_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthenticated("Token subject is not a valid id"))?;

        Ok(Self {
            subject_id,
            principal_type: claims.typ,
            scope: claims.scope,
            name: claims.name,
            request_time: Utc::now(),
        })
    }

    /// Returns whether the principal is a human user.
    pub fn is_user(&self) -> bool {
        self.principal_type == PrincipalType::User
    }

    /// Returns the subject as a user id, or `PermissionDenied` for clients.
    pub fn user_id(&self) -> AppResult<UserId> {
        if !self.is_user() {
            return Err(AppError::permission_denied(
                "This operation requires a user principal",
            ));
        }
        Ok(UserId::from_uuid(self.subject_id))
    }

    /// Fails with `PermissionDenied` unless the scope grants `permission`.
    pub fn require(&self, permission: Permission) -> AppResult<()> {
        scope::require(&self.scope, permission)
    }
}
