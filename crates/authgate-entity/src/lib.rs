//! # authgate-entity
//!
//! Domain entity models for authgate. Database entities derive
//! `sqlx::FromRow`; secret hashes are never serialized outward.

pub mod client;
pub mod permission;
pub mod principal;
pub mod resource;
pub mod user;

pub use client::Client;
pub use permission::Permission;
pub use principal::PrincipalType;
pub use resource::Resource;
pub use user::User;
