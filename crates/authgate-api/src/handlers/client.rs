//! Client management handlers. The caller must be a user; the token
//! subject is the owner.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use authgate_core::types::ClientId;

use crate::dto::request::{CreateClientRequest, UpdateClientRequest};
use crate::dto::response::{ClientListResponse, ClientResponse, ClientSecretResponse};
use crate::error::ApiError;
use crate::extractors::{AuthPrincipal, ValidatedJson};
use crate::middleware::guard::require_user;
use crate::state::AppState;

/// GET /clients
pub async fn list_clients(
    State(state): State<AppState>,
    auth: AuthPrincipal,
) -> Result<Json<ClientListResponse>, ApiError> {
    let owner = require_user(&auth)?;
    let clients = state.client_service.list_clients(owner).await?;
    Ok(Json(ClientListResponse {
        clients: clients.into_iter().map(ClientResponse::from).collect(),
    }))
}

/// POST /clients
pub async fn create_client(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    body: Result<ValidatedJson<CreateClientRequest>, ApiError>,
) -> Result<(StatusCode, Json<ClientSecretResponse>), ApiError> {
    let owner = require_user(&auth)?;
    let ValidatedJson(req) = body?;
    let issued = state
        .client_service
        .create_client(owner, &req.scope)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ClientSecretResponse {
            client: issued.client.into(),
            secret: issued.secret,
        }),
    ))
}

/// GET /clients/{client_id}
pub async fn get_client(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Path(client_id): Path<ClientId>,
) -> Result<Json<ClientResponse>, ApiError> {
    let owner = require_user(&auth)?;
    let client = state.client_service.get_client(client_id, owner).await?;
    Ok(Json(client.into()))
}

/// PATCH /clients/{client_id}
pub async fn update_client(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Path(client_id): Path<ClientId>,
    body: Result<ValidatedJson<UpdateClientRequest>, ApiError>,
) -> Result<Json<ClientResponse>, ApiError> {
    let owner = require_user(&auth)?;
    let ValidatedJson(req) = body?;
    let client = state
        .client_service
        .update_scope(client_id, owner, &req.scope)
        .await?;
    Ok(Json(client.into()))
}

/// DELETE /clients/{client_id}
pub async fn delete_client(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Path(client_id): Path<ClientId>,
) -> Result<StatusCode, ApiError> {
    let owner = require_user(&auth)?;
    state.client_service.delete_client(client_id, owner).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /clients/{client_id}/secret
pub async fn rotate_secret(
    State(state): State<AppState>,
    auth: AuthPrincipal,
    Path(client_id): Path<ClientId>,
) -> Result<Json<ClientSecretResponse>, ApiError> {
    let owner = require_user(&auth)?;
    let issued = state.client_service.rotate_secret(client_id, owner).await?;
    Ok(Json(ClientSecretResponse {
        client: issued.client.into(),
        secret: issued.secret,
    }))
}
