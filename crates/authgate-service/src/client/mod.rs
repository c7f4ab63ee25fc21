//! Machine client management and login.

pub mod service;

pub use service::{ClientService, IssuedClient};
