//! Axum middleware and route guards.

pub mod cors;
pub mod guard;
pub mod logging;
