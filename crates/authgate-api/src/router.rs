//! Route definitions for the authgate HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route group and the state attached.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(admin_routes())
        .merge(client_routes())
        .merge(resource_routes())
        .merge(health_routes())
        .with_state(state)
}

/// Login endpoints
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/users/login", post(handlers::auth::login_user))
        .route("/clients/login", post(handlers::auth::login_client))
}

/// User administration, `*` permission required
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/users",
            get(handlers::admin::list_users).post(handlers::admin::create_user),
        )
        .route(
            "/admin/users/{user_id}",
            get(handlers::admin::get_user)
                .patch(handlers::admin::update_user)
                .delete(handlers::admin::delete_user),
        )
}

/// Client management for the calling user
fn client_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clients",
            get(handlers::client::list_clients).post(handlers::client::create_client),
        )
        .route(
            "/clients/{client_id}",
            get(handlers::client::get_client)
                .patch(handlers::client::update_client)
                .delete(handlers::client::delete_client),
        )
        .route(
            "/clients/{client_id}/secret",
            post(handlers::client::rotate_secret),
        )
}

/// Permission-gated resources
fn resource_routes() -> Router<AppState> {
    Router::new().route("/resources", post(handlers::resource::create_resource))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
