//! Resource handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use authgate_entity::permission::Permission;

use crate::dto::response::ResourceResponse;
use crate::error::ApiError;
use crate::extractors::AuthPrincipal;
use crate::middleware::guard::require_permission;
use crate::state::AppState;

/// POST /resources
pub async fn create_resource(
    State(state): State<AppState>,
    auth: AuthPrincipal,
) -> Result<(StatusCode, Json<ResourceResponse>), ApiError> {
    require_permission(&auth, Permission::CreateResource)?;
    let resource = state.resource_service.create_resource().await?;
    Ok((StatusCode::CREATED, Json(resource.into())))
}
