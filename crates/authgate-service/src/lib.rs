//! # authgate-service
//!
//! Use cases for authgate. Each service holds its stores and credential
//! primitives behind `Arc` and is injected at construction time. Store
//! errors pass through unchanged; credential checks collapse into
//! `LoginFailure`.

pub mod client;
pub mod context;
pub mod resource;
pub mod user;

pub use client::{ClientService, IssuedClient};
pub use context::RequestContext;
pub use resource::ResourceService;
pub use user::{AdminUserService, UserAuthService, UserPatch};

#[cfg(test)]
mod test_support;
