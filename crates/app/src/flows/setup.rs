//! Setup flow — validate the base cover reference and create the config record.

use shutterplan_domain::config::{CoverConfig, DEFAULT_NAME};
use shutterplan_domain::id::UniqueId;

use crate::ports::{ConfigStore, EntityRegistry};

/// Values submitted on the initial setup step.
#[derive(Debug, Clone)]
pub struct SetupInput {
    /// Display name for the proxy cover; empty falls back to the default.
    pub name: String,
    /// Entity id of the cover to wrap.
    pub base_cover: String,
}

impl SetupInput {
    /// Build an input from the submitted form values.
    pub fn new(name: impl Into<String>, base_cover: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_cover: base_cover.into(),
        }
    }
}

/// User-visible setup failures, keyed by stable form-error codes.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// The base cover reference does not resolve in the registry.
    #[error("selected cover does not exist")]
    InvalidCover,
    /// A record with the derived unique id already exists.
    #[error("this cover is already configured")]
    AlreadyConfigured,
    /// Anything unexpected; details are logged, not surfaced.
    #[error("unexpected error during setup")]
    Unknown,
}

impl SetupError {
    /// Stable code for the host's form-error display.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCover => "invalid_cover",
            Self::AlreadyConfigured => "already_configured",
            Self::Unknown => "unknown",
        }
    }
}

/// Result of a successful setup submission.
#[derive(Debug, Clone)]
pub struct CreatedConfig {
    /// The derived unique id the record was stored under.
    pub unique_id: UniqueId,
    /// The stored record.
    pub config: CoverConfig,
    /// Area linkage propagated from the base cover's registry entry.
    pub area_id: Option<String>,
    /// Device linkage propagated from the base cover's registry entry.
    pub device_id: Option<String>,
}

/// The initial `user` setup step.
pub struct SetupFlow<R, C> {
    registry: R,
    configs: C,
}

impl<R: EntityRegistry, C: ConfigStore> SetupFlow<R, C> {
    /// Create a flow backed by the given registry and config store.
    pub fn new(registry: R, configs: C) -> Self {
        Self { registry, configs }
    }

    /// Handle one submission of the setup form.
    ///
    /// The base cover must resolve in the registry and the derived unique id
    /// must not already be configured. On success the record is stored and
    /// returned together with the base cover's area/device linkage.
    ///
    /// # Errors
    ///
    /// [`SetupError::InvalidCover`] when the reference does not resolve,
    /// [`SetupError::AlreadyConfigured`] on a duplicate unique id, and
    /// [`SetupError::Unknown`] for any unexpected port failure (logged).
    pub async fn submit(&self, input: SetupInput) -> Result<CreatedConfig, SetupError> {
        let name = if input.name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            input.name
        };
        let config = CoverConfig::new(name, input.base_cover);

        let entry = match self.registry.get(&config.base_cover).await {
            Ok(Some(entry)) => entry,
            Ok(None) => return Err(SetupError::InvalidCover),
            Err(err) => {
                tracing::error!(base_cover = %config.base_cover, error = %err, "registry lookup failed during setup");
                return Err(SetupError::Unknown);
            }
        };

        let unique_id = config.unique_id();
        match self.configs.get(&unique_id).await {
            Ok(Some(_)) => return Err(SetupError::AlreadyConfigured),
            Ok(None) => {}
            Err(err) => {
                tracing::error!(unique_id = %unique_id, error = %err, "config lookup failed during setup");
                return Err(SetupError::Unknown);
            }
        }

        match self.configs.insert(unique_id.clone(), config).await {
            Ok(config) => Ok(CreatedConfig {
                unique_id,
                config,
                area_id: entry.area_id,
                device_id: entry.device_id,
            }),
            Err(err) => {
                tracing::error!(unique_id = %unique_id, error = %err, "storing config record failed");
                Err(SetupError::Unknown)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    use shutterplan_domain::error::{HostError, ShutterPlanError};
    use shutterplan_domain::schedule::Schedule;

    use super::*;
    use crate::ports::RegistryEntry;

    struct InMemoryRegistry {
        entries: HashMap<String, RegistryEntry>,
        fail: bool,
    }

    impl InMemoryRegistry {
        fn with(entries: Vec<RegistryEntry>) -> Self {
            Self {
                entries: entries
                    .into_iter()
                    .map(|e| (e.entity_id.clone(), e))
                    .collect(),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                entries: HashMap::new(),
                fail: true,
            }
        }
    }

    impl EntityRegistry for InMemoryRegistry {
        fn get(
            &self,
            entity_id: &str,
        ) -> impl Future<Output = Result<Option<RegistryEntry>, ShutterPlanError>> + Send {
            let result = if self.fail {
                Err(HostError::new("registry unavailable").into())
            } else {
                Ok(self.entries.get(entity_id).cloned())
            };
            async { result }
        }
    }

    #[derive(Default)]
    struct InMemoryConfigStore {
        configs: Mutex<HashMap<UniqueId, CoverConfig>>,
        schedules: Mutex<HashMap<UniqueId, Schedule>>,
    }

    impl ConfigStore for InMemoryConfigStore {
        fn get(
            &self,
            id: &UniqueId,
        ) -> impl Future<Output = Result<Option<CoverConfig>, ShutterPlanError>> + Send {
            let result = self.configs.lock().unwrap().get(id).cloned();
            async { Ok(result) }
        }

        fn insert(
            &self,
            id: UniqueId,
            config: CoverConfig,
        ) -> impl Future<Output = Result<CoverConfig, ShutterPlanError>> + Send {
            self.configs.lock().unwrap().insert(id, config.clone());
            async { Ok(config) }
        }

        fn load_schedule(
            &self,
            id: &UniqueId,
        ) -> impl Future<Output = Result<Schedule, ShutterPlanError>> + Send {
            let result = self
                .schedules
                .lock()
                .unwrap()
                .get(id)
                .cloned()
                .unwrap_or_default();
            async { Ok(result) }
        }

        fn save_schedule(
            &self,
            id: &UniqueId,
            schedule: Schedule,
        ) -> impl Future<Output = Result<(), ShutterPlanError>> + Send {
            self.schedules.lock().unwrap().insert(id.clone(), schedule);
            async { Ok(()) }
        }
    }

    fn flow_with_cover(entity_id: &str) -> SetupFlow<InMemoryRegistry, InMemoryConfigStore> {
        SetupFlow::new(
            InMemoryRegistry::with(vec![RegistryEntry::new(entity_id)]),
            InMemoryConfigStore::default(),
        )
    }

    #[tokio::test]
    async fn should_create_config_record_when_cover_exists() {
        let flow = flow_with_cover("cover.living_room");
        let created = flow
            .submit(SetupInput::new("Living room", "cover.living_room"))
            .await
            .unwrap();

        assert_eq!(created.unique_id.as_str(), "shutterplan_cover.living_room");
        assert_eq!(created.config.name, "Living room");
        assert_eq!(created.config.base_cover, "cover.living_room");
    }

    #[tokio::test]
    async fn should_reject_unresolvable_cover_and_store_nothing() {
        let registry = InMemoryRegistry::with(vec![]);
        let configs = InMemoryConfigStore::default();
        let flow = SetupFlow::new(registry, configs);

        let result = flow
            .submit(SetupInput::new("Ghost", "cover.missing"))
            .await;
        assert_eq!(result.unwrap_err(), SetupError::InvalidCover);

        let stored = flow
            .configs
            .get(&UniqueId::for_base_cover("cover.missing"))
            .await
            .unwrap();
        assert!(stored.is_none());
    }

    #[tokio::test]
    async fn should_reject_duplicate_setup_for_same_base_cover() {
        let flow = flow_with_cover("cover.kitchen");
        flow.submit(SetupInput::new("First", "cover.kitchen"))
            .await
            .unwrap();

        let result = flow.submit(SetupInput::new("Second", "cover.kitchen")).await;
        assert_eq!(result.unwrap_err(), SetupError::AlreadyConfigured);
    }

    #[tokio::test]
    async fn should_surface_unknown_when_registry_fails() {
        let flow = SetupFlow::new(InMemoryRegistry::failing(), InMemoryConfigStore::default());
        let result = flow
            .submit(SetupInput::new("Any", "cover.living_room"))
            .await;
        assert_eq!(result.unwrap_err(), SetupError::Unknown);
    }

    #[tokio::test]
    async fn should_fall_back_to_default_name_when_empty() {
        let flow = flow_with_cover("cover.office");
        let created = flow
            .submit(SetupInput::new("", "cover.office"))
            .await
            .unwrap();
        assert_eq!(created.config.name, DEFAULT_NAME);
    }

    #[tokio::test]
    async fn should_propagate_area_and_device_linkage() {
        let registry = InMemoryRegistry::with(vec![RegistryEntry::new("cover.bedroom")
            .with_area("bedroom")
            .with_device("device-42")]);
        let flow = SetupFlow::new(registry, InMemoryConfigStore::default());

        let created = flow
            .submit(SetupInput::new("Bedroom", "cover.bedroom"))
            .await
            .unwrap();
        assert_eq!(created.area_id.as_deref(), Some("bedroom"));
        assert_eq!(created.device_id.as_deref(), Some("device-42"));
    }

    #[test]
    fn should_expose_stable_error_codes() {
        assert_eq!(SetupError::InvalidCover.code(), "invalid_cover");
        assert_eq!(SetupError::AlreadyConfigured.code(), "already_configured");
        assert_eq!(SetupError::Unknown.code(), "unknown");
    }
}
