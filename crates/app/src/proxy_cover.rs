//! The scheduled proxy cover — mirrors the base cover and drives it on a
//! schedule.
//!
//! Read properties are derived live from the base cover's snapshot on every
//! access, with one exception: `supported_features` is fetched once and cached
//! for the entity's lifetime. The cached value can go stale if the base
//! cover's capabilities change at runtime; that tradeoff is deliberate and not
//! invalidated here.

use std::sync::OnceLock;

use shutterplan_domain::config::CoverConfig;
use shutterplan_domain::cover::{CoverCommand, CoverFeatures, CoverState};
use shutterplan_domain::error::ShutterPlanError;
use shutterplan_domain::id::UniqueId;
use shutterplan_domain::schedule::Schedule;
use shutterplan_domain::time::{truncate_to_minute, LocalTimestamp};

use crate::ports::{CommandBus, StateStore};

/// Virtual cover entity wrapping a base cover with a schedule.
pub struct ScheduledCover<S, C> {
    name: String,
    base_cover: String,
    unique_id: UniqueId,
    schedule: Schedule,
    area_id: Option<String>,
    device_id: Option<String>,
    features: OnceLock<CoverFeatures>,
    states: S,
    commands: C,
}

impl<S: StateStore, C: CommandBus> ScheduledCover<S, C> {
    /// Instantiate the proxy for `config` with the current `schedule`.
    pub fn new(config: &CoverConfig, schedule: Schedule, states: S, commands: C) -> Self {
        Self {
            name: config.name.clone(),
            base_cover: config.base_cover.clone(),
            unique_id: config.unique_id(),
            schedule,
            area_id: None,
            device_id: None,
            features: OnceLock::new(),
            states,
            commands,
        }
    }

    /// Carry the area/device linkage of the base cover's registry entry.
    #[must_use]
    pub fn with_links(mut self, area_id: Option<String>, device_id: Option<String>) -> Self {
        self.area_id = area_id;
        self.device_id = device_id;
        self
    }

    /// Display name of the proxy.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entity id of the wrapped base cover.
    #[must_use]
    pub fn base_cover(&self) -> &str {
        &self.base_cover
    }

    /// Deterministic unique id of this proxy.
    #[must_use]
    pub fn unique_id(&self) -> &UniqueId {
        &self.unique_id
    }

    /// The schedule this proxy was instantiated with.
    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Area propagated from the base cover, if any.
    #[must_use]
    pub fn area_id(&self) -> Option<&str> {
        self.area_id.as_deref()
    }

    /// Device propagated from the base cover, if any.
    #[must_use]
    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    /// Whether the base cover is closed; `None` when its state is missing or
    /// not an operational state.
    ///
    /// # Errors
    ///
    /// Propagates a state-store failure.
    pub async fn is_closed(&self) -> Result<Option<bool>, ShutterPlanError> {
        let snapshot = self.states.get(&self.base_cover).await?;
        Ok(snapshot.and_then(|s| {
            s.state
                .is_available()
                .then_some(s.state == CoverState::Closed)
        }))
    }

    /// Current position of the base cover.
    ///
    /// Positionable covers report their position attribute verbatim. Covers
    /// without intermediate-position support get a synthesized binary
    /// position: 0 when closed, 100 otherwise, regardless of any stray
    /// position attribute they may carry.
    ///
    /// # Errors
    ///
    /// Propagates a state-store failure.
    pub async fn current_position(&self) -> Result<Option<u8>, ShutterPlanError> {
        let Some(snapshot) = self.states.get(&self.base_cover).await? else {
            return Ok(None);
        };
        if self.supported_features().await?.supports_set_position() {
            Ok(snapshot.position)
        } else {
            Ok(Some(if snapshot.state == CoverState::Closed {
                0
            } else {
                100
            }))
        }
    }

    /// Device class passed through live from the base cover.
    ///
    /// # Errors
    ///
    /// Propagates a state-store failure.
    pub async fn device_class(&self) -> Result<Option<String>, ShutterPlanError> {
        let snapshot = self.states.get(&self.base_cover).await?;
        Ok(snapshot.and_then(|s| s.device_class))
    }

    /// Capability flags of the base cover, fetched once and cached.
    ///
    /// A missing snapshot does not poison the cache: the next read retries.
    /// Once a snapshot was seen, its flags (or none at all) are cached for
    /// the entity's lifetime.
    ///
    /// # Errors
    ///
    /// Propagates a state-store failure.
    pub async fn supported_features(&self) -> Result<CoverFeatures, ShutterPlanError> {
        if let Some(features) = self.features.get() {
            return Ok(*features);
        }
        let Some(snapshot) = self.states.get(&self.base_cover).await? else {
            return Ok(CoverFeatures::empty());
        };
        let fetched = snapshot.supported_features.unwrap_or_default();
        Ok(*self.features.get_or_init(|| fetched))
    }

    /// Forward an open command to the base cover.
    ///
    /// # Errors
    ///
    /// Propagates the command-bus failure; there is no retry.
    pub async fn open(&self) -> Result<(), ShutterPlanError> {
        self.commands.call(&self.base_cover, CoverCommand::Open).await
    }

    /// Forward a close command to the base cover.
    ///
    /// # Errors
    ///
    /// Propagates the command-bus failure; there is no retry.
    pub async fn close(&self) -> Result<(), ShutterPlanError> {
        self.commands
            .call(&self.base_cover, CoverCommand::Close)
            .await
    }

    /// Move the base cover to `position`, translating for covers without
    /// intermediate-position support (above 50 opens, otherwise closes).
    ///
    /// # Errors
    ///
    /// Propagates the command-bus failure; there is no retry.
    pub async fn set_position(&self, position: u8) -> Result<(), ShutterPlanError> {
        let features = self.supported_features().await?;
        self.commands
            .call(&self.base_cover, CoverCommand::for_position(position, features))
            .await
    }

    /// First fire time for every schedule entry, in entry order.
    #[must_use]
    pub fn initial_fire_times(&self, now: LocalTimestamp) -> Vec<LocalTimestamp> {
        self.schedule
            .entries()
            .iter()
            .map(|entry| entry.next_occurrence(now))
            .collect()
    }

    /// Common timer callback: scan for the entry matching the current minute,
    /// issue its position command, and return the matched entry's next fire
    /// time.
    ///
    /// Scanning stops at the first match, so two entries sharing a minute
    /// fire at most once per invocation. `None` means nothing matched and
    /// nothing was re-armed.
    ///
    /// # Errors
    ///
    /// Propagates the command failure; the caller must not re-arm in that
    /// case.
    pub async fn handle_fire(
        &self,
        now: LocalTimestamp,
    ) -> Result<Option<LocalTimestamp>, ShutterPlanError> {
        let now = truncate_to_minute(now);
        let Some(entry) = self.schedule.first_match(now) else {
            tracing::debug!(cover = %self.base_cover, at = %now, "timer fired without a matching schedule entry");
            return Ok(None);
        };

        tracing::info!(cover = %self.base_cover, entry = %entry, "schedule entry fired");
        self.set_position(entry.position).await?;
        Ok(Some(entry.next_occurrence(now)))
    }
}
