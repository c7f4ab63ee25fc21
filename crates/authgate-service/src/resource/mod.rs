//! Resource creation.

pub mod service;

pub use service::ResourceService;
