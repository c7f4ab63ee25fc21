//! PostgreSQL store implementations.

mod error;

pub mod client;
pub mod user;

pub use client::PgClientStore;
pub use user::PgUserStore;
