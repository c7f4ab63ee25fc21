//! Admin user management handlers. Every route requires the `*` permission,
//! checked before the request body is validated.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use authgate_core::types::UserId;
use authgate_entity::permission::Permission;
use authgate_service::user::UserPatch;

use crate::dto::request::{CreateUserRequest, UpdateUserRequest};
use crate::dto::response::{UserListResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthPrincipal, ValidatedJson};
use crate::middleware::guard::require_permission;
use crate::state::AppState;

/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthPrincipal,
) -> Result<Json<UserListResponse>, ApiError> {
    require_permission(&auth, Permission::All)?;
    let users = state.admin_user_service.list_users().await?;
    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}

/// POST /admin/users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    body: Result<ValidatedJson<CreateUserRequest>, ApiError>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    require_permission(&auth, Permission::All)?;
    let ValidatedJson(req) = body?;
    let user = state
        .admin_user_service
        .create_user(&req.name, &req.account, &req.password)
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /admin/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Path(user_id): Path<UserId>,
) -> Result<Json<UserResponse>, ApiError> {
    require_permission(&auth, Permission::All)?;
    let user = state.admin_user_service.get_user(user_id).await?;
    Ok(Json(user.into()))
}

/// PATCH /admin/users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Path(user_id): Path<UserId>,
    body: Result<ValidatedJson<UpdateUserRequest>, ApiError>,
) -> Result<Json<UserResponse>, ApiError> {
    require_permission(&auth, Permission::All)?;
    let ValidatedJson(req) = body?;
    let user = state
        .admin_user_service
        .update_user(
            user_id,
            UserPatch {
                name: req.name,
                password: req.password,
            },
        )
        .await?;
    Ok(Json(user.into()))
}

/// DELETE /admin/users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Path(user_id): Path<UserId>,
) -> Result<StatusCode, ApiError> {
    require_permission(&auth, Permission::All)?;
    state.admin_user_service.delete_user(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
