//! Flat scope matching.
//!
//! A granted scope is a whitespace-separated list of permission tokens. A
//! required permission is satisfied when any token is `*` or equals it
//! exactly; there is no prefix or hierarchical matching.

use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_entity::permission::Permission;

/// Returns `true` if `granted` contains `*` or `required` as a whole token.
pub fn satisfies(granted: &str, required: Permission) -> bool {
    granted
        .split_whitespace()
        .any(|token| token == Permission::All.as_str() || token == required.as_str())
}

/// Fails with `PermissionDenied` unless `granted` satisfies `required`.
pub fn require(granted: &str, required: Permission) -> AppResult<()> {
    if satisfies(granted, required) {
        Ok(())
    } else {
        Err(AppError::permission_denied(format!(
            "Missing required permission '{required}'"
        )))
    }
}

/// Joins permissions into a space-separated scope string.
pub fn join_scope(permissions: &[Permission]) -> String {
    permissions
        .iter()
        .map(Permission::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
