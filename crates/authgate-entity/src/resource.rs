//! Resource entity.

use serde::{Deserialize, Serialize};

use authgate_core::types::ResourceId;

/// A resource created through the permission-gated resource endpoint.
///
/// Only the identifier exists for now; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: ResourceId,
}
