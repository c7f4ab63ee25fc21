//! In-memory store adapters.
//!
//! They enforce the same uniqueness, check, and ownership rules as the
//! PostgreSQL schema, except that client owners are not checked against
//! the user table. A [`MemoryUserStore`] built with
//! [`MemoryUserStore::with_clients`] cascades user deletes the way the
//! `clients.user_id` foreign key does.

pub mod client;
pub mod user;

pub use client::MemoryClientStore;
pub use user::MemoryUserStore;
