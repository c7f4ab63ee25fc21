//! Resource creation.

use tracing::info;

use authgate_core::result::AppResult;
use authgate_core::types::ResourceId;
use authgate_entity::resource::Resource;

/// Creates resources. Resources carry only an id and are not persisted.
#[derive(Debug, Clone, Default)]
pub struct ResourceService;

impl ResourceService {
    /// Creates a new resource service.
    pub fn new() -> Self {
        Self
    }

    /// Returns a resource with a fresh id.
    pub async fn create_resource(&self) -> AppResult<Resource> {
        let resource = Resource {
            id: ResourceId::new(),
        };
        info!(resource_id = %resource.id, "Resource created");
        Ok(resource)
    }
}
