//! # authgate-api
//!
//! HTTP API layer for authgate built on Axum.
//!
//! Provides the REST endpoints, bearer-token extraction, permission guards,
//! request validation, DTOs, and the mapping from `AppError` to HTTP status.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use error::ApiError;
pub use state::AppState;
