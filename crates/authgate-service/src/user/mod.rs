//! User administration and login.

pub mod admin;
pub mod auth;

pub use admin::{AdminUserService, UserPatch};
pub use auth::UserAuthService;
