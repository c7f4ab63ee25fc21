//! `AuthPrincipal` extractor: pulls the bearer token from the Authorization
//! header, verifies it, and exposes the request context.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use authgate_core::error::AppError;
use authgate_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated principal (user or client) available in handlers.
#[derive(Debug, Clone)]
pub struct AuthPrincipal(pub RequestContext);

impl std::ops::Deref for AuthPrincipal {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthPrincipal {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthenticated("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthenticated("Invalid Authorization header format"))?;

        let claims = state.token_verifier.verify(token)?;
        let ctx = RequestContext::from_claims(claims)?;

        Ok(AuthPrincipal(ctx))
    }
}
