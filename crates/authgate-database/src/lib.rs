//! # authgate-database
//!
//! PostgreSQL connection management, the [`UserStore`] and [`ClientStore`]
//! capabilities, and their PostgreSQL and in-memory adapters.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::{MemoryClientStore, MemoryUserStore};
pub use repositories::{PgClientStore, PgUserStore};
pub use store::{ClientStore, UserStore};
