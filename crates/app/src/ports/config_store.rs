//! Config store port — config records and persisted schedules.
//!
//! The host owns the actual persistence; this port only exposes the narrow
//! surface the flows need: record lookup/creation keyed by the derived unique
//! id, and wholesale schedule load/save.

use std::future::Future;

use shutterplan_domain::config::CoverConfig;
use shutterplan_domain::error::ShutterPlanError;
use shutterplan_domain::id::UniqueId;
use shutterplan_domain::schedule::Schedule;

/// Access to the host's config-entry storage.
pub trait ConfigStore: Send + Sync {
    /// Fetch the config record stored under `id`, if any.
    fn get(
        &self,
        id: &UniqueId,
    ) -> impl Future<Output = Result<Option<CoverConfig>, ShutterPlanError>> + Send;

    /// Store a new config record under `id`.
    fn insert(
        &self,
        id: UniqueId,
        config: CoverConfig,
    ) -> impl Future<Output = Result<CoverConfig, ShutterPlanError>> + Send;

    /// Load the persisted schedule for `id`; empty when none was saved yet.
    fn load_schedule(
        &self,
        id: &UniqueId,
    ) -> impl Future<Output = Result<Schedule, ShutterPlanError>> + Send;

    /// Replace the persisted schedule for `id` wholesale.
    fn save_schedule(
        &self,
        id: &UniqueId,
        schedule: Schedule,
    ) -> impl Future<Output = Result<(), ShutterPlanError>> + Send;
}

impl<T: ConfigStore> ConfigStore for std::sync::Arc<T> {
    fn get(
        &self,
        id: &UniqueId,
    ) -> impl Future<Output = Result<Option<CoverConfig>, ShutterPlanError>> + Send {
        (**self).get(id)
    }

    fn insert(
        &self,
        id: UniqueId,
        config: CoverConfig,
    ) -> impl Future<Output = Result<CoverConfig, ShutterPlanError>> + Send {
        (**self).insert(id, config)
    }

    fn load_schedule(
        &self,
        id: &UniqueId,
    ) -> impl Future<Output = Result<Schedule, ShutterPlanError>> + Send {
        (**self).load_schedule(id)
    }

    fn save_schedule(
        &self,
        id: &UniqueId,
        schedule: Schedule,
    ) -> impl Future<Output = Result<(), ShutterPlanError>> + Send {
        (**self).save_schedule(id, schedule)
    }
}
