//! Login handlers for users and clients.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use authgate_auth::scope::join_scope;
use authgate_core::error::AppError;
use authgate_core::types::ClientId;
use authgate_entity::permission::Permission;
use authgate_entity::principal::PrincipalType;

use crate::dto::request::{ClientLoginRequest, LoginRequest};
use crate::dto::response::TokenResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /auth/users/login
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state
        .user_auth_service
        .login(&req.account, &req.password)
        .await?;

    let token = state.token_issuer.issue(
        &user.id.to_string(),
        PrincipalType::User,
        &join_scope(&[Permission::All]),
        Some(&user.name),
        Utc::now(),
    )?;

    Ok(Json(token.into()))
}

/// POST /clients/login
pub async fn login_client(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ClientLoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    // A malformed id is reported like any other credential mismatch.
    let id: ClientId = req
        .id
        .parse()
        .map_err(|_| AppError::login_failure("Invalid client id or secret"))?;

    let client = state.client_service.login(id, &req.secret).await?;

    let token = state.token_issuer.issue(
        &client.id.to_string(),
        PrincipalType::Client,
        &client.scope_string(),
        None,
        Utc::now(),
    )?;

    Ok(Json(token.into()))
}
