//! State store port — read the base cover's live state.

use std::future::Future;

use shutterplan_domain::cover::CoverSnapshot;
use shutterplan_domain::error::ShutterPlanError;

/// Read access to the host's state machine.
pub trait StateStore: Send + Sync {
    /// Current snapshot of an entity; `None` when the host has no state row.
    fn get(
        &self,
        entity_id: &str,
    ) -> impl Future<Output = Result<Option<CoverSnapshot>, ShutterPlanError>> + Send;
}

impl<T: StateStore> StateStore for std::sync::Arc<T> {
    fn get(
        &self,
        entity_id: &str,
    ) -> impl Future<Output = Result<Option<CoverSnapshot>, ShutterPlanError>> + Send {
        (**self).get(entity_id)
    }
}
