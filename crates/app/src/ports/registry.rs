//! Entity registry port — resolve entity references and their linkage.

use std::future::Future;

use shutterplan_domain::error::ShutterPlanError;

/// A registry record for an existing entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    /// The entity id this record describes.
    pub entity_id: String,
    /// Area the entity is assigned to, if any.
    pub area_id: Option<String>,
    /// Device the entity belongs to, if any.
    pub device_id: Option<String>,
}

impl RegistryEntry {
    /// A registry entry without area or device linkage.
    #[must_use]
    pub fn new(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            area_id: None,
            device_id: None,
        }
    }

    /// Attach an area assignment.
    #[must_use]
    pub fn with_area(mut self, area_id: impl Into<String>) -> Self {
        self.area_id = Some(area_id.into());
        self
    }

    /// Attach a device assignment.
    #[must_use]
    pub fn with_device(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }
}

/// Read access to the host's entity registry.
pub trait EntityRegistry: Send + Sync {
    /// Look up an entity by id; `None` when the reference does not resolve.
    fn get(
        &self,
        entity_id: &str,
    ) -> impl Future<Output = Result<Option<RegistryEntry>, ShutterPlanError>> + Send;
}

impl<T: EntityRegistry> EntityRegistry for std::sync::Arc<T> {
    fn get(
        &self,
        entity_id: &str,
    ) -> impl Future<Output = Result<Option<RegistryEntry>, ShutterPlanError>> + Send {
        (**self).get(entity_id)
    }
}
