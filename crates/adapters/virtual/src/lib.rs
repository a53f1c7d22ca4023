//! # shutterplan-adapter-virtual
//!
//! Virtual/demo host backing every port with in-memory state, for testing and
//! demonstration purposes.
//!
//! A registered base cover behaves like a real one: commands issued through
//! the [`CommandBus`] port update its snapshot (open, close, or move to the
//! requested position) and every call is journaled so tests and the demo
//! binary can inspect what was issued.
//!
//! ## Dependency rule
//!
//! Depends on `shutterplan-app` (port traits) and `shutterplan-domain` only.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use shutterplan_app::ports::{
    CommandBus, ConfigStore, EntityRegistry, RegistryEntry, StateStore,
};
use shutterplan_domain::config::CoverConfig;
use shutterplan_domain::cover::{CoverCommand, CoverSnapshot, CoverState};
use shutterplan_domain::error::ShutterPlanError;
use shutterplan_domain::id::UniqueId;
use shutterplan_domain::schedule::Schedule;

/// In-memory host implementing all four ports.
#[derive(Default)]
pub struct VirtualHost {
    registry: Mutex<HashMap<String, RegistryEntry>>,
    states: Mutex<HashMap<String, CoverSnapshot>>,
    configs: Mutex<HashMap<UniqueId, CoverConfig>>,
    schedules: Mutex<HashMap<UniqueId, Schedule>>,
    journal: Mutex<Vec<(String, CoverCommand)>>,
}

impl VirtualHost {
    /// Empty host with no entities.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a base cover with an initial snapshot.
    pub fn register_cover(&self, entry: RegistryEntry, snapshot: CoverSnapshot) {
        let entity_id = entry.entity_id.clone();
        self.registry.lock().unwrap().insert(entity_id.clone(), entry);
        self.states.lock().unwrap().insert(entity_id, snapshot);
    }

    /// Replace an entity's snapshot, as an external state change would.
    pub fn set_state(&self, entity_id: &str, snapshot: CoverSnapshot) {
        self.states
            .lock()
            .unwrap()
            .insert(entity_id.to_string(), snapshot);
    }

    /// Every command issued so far, in order.
    #[must_use]
    pub fn issued_commands(&self) -> Vec<(String, CoverCommand)> {
        self.journal.lock().unwrap().clone()
    }

    /// Apply a command to the simulated cover's own snapshot.
    fn apply(snapshot: &mut CoverSnapshot, command: CoverCommand) {
        match command {
            CoverCommand::Open => {
                snapshot.state = CoverState::Open;
                if snapshot.position.is_some() {
                    snapshot.position = Some(100);
                }
            }
            CoverCommand::Close => {
                snapshot.state = CoverState::Closed;
                if snapshot.position.is_some() {
                    snapshot.position = Some(0);
                }
            }
            CoverCommand::SetPosition { position } => {
                snapshot.state = if position == 0 {
                    CoverState::Closed
                } else {
                    CoverState::Open
                };
                snapshot.position = Some(position);
            }
        }
    }
}

impl EntityRegistry for VirtualHost {
    fn get(
        &self,
        entity_id: &str,
    ) -> impl Future<Output = Result<Option<RegistryEntry>, ShutterPlanError>> + Send {
        let result = self.registry.lock().unwrap().get(entity_id).cloned();
        async { Ok(result) }
    }
}

impl StateStore for VirtualHost {
    fn get(
        &self,
        entity_id: &str,
    ) -> impl Future<Output = Result<Option<CoverSnapshot>, ShutterPlanError>> + Send {
        let result = self.states.lock().unwrap().get(entity_id).cloned();
        async { Ok(result) }
    }
}

impl CommandBus for VirtualHost {
    fn call(
        &self,
        entity_id: &str,
        command: CoverCommand,
    ) -> impl Future<Output = Result<(), ShutterPlanError>> + Send {
        tracing::debug!(entity_id, %command, "virtual host received command");
        self.journal
            .lock()
            .unwrap()
            .push((entity_id.to_string(), command));
        if let Some(snapshot) = self.states.lock().unwrap().get_mut(entity_id) {
            Self::apply(snapshot, command);
        }
        async { Ok(()) }
    }
}

impl ConfigStore for VirtualHost {
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
