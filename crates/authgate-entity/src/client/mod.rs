//! Machine client entities.

pub mod model;

pub use model::{Client, ClientChanges, NewClient};
