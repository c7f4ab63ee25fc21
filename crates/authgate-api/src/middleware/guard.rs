//! Route guards applied at the top of privileged handlers.

use authgate_core::result::AppResult;
use authgate_core::types::UserId;
use authgate_entity::permission::Permission;

use crate::extractors::AuthPrincipal;

/// Checks that the principal's scope grants `permission`.
pub fn require_permission(principal: &AuthPrincipal, permission: Permission) -> AppResult<()> {
    principal.require(permission)
}

/// Checks that the principal is a human user and returns their id.
///
/// Client management is reserved for users; a client token cannot mint
/// or rotate other clients.
pub fn require_user(principal: &AuthPrincipal) -> AppResult<UserId> {
    principal.user_id()
}
