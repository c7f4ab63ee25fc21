//! HTTP request handlers, one module per route group.

pub mod admin;
pub mod auth;
pub mod client;
pub mod health;
pub mod resource;
