//! Command bus port — outbound service calls against the base cover.

use std::future::Future;

use shutterplan_domain::cover::CoverCommand;
use shutterplan_domain::error::ShutterPlanError;

/// Dispatch of outbound cover commands through the host.
pub trait CommandBus: Send + Sync {
    /// Issue `command` against the entity identified by `entity_id`.
    ///
    /// There is no retry logic; a failure propagates however the host's
    /// dispatch signals it.
    fn call(
        &self,
        entity_id: &str,
        command: CoverCommand,
    ) -> impl Future<Output = Result<(), ShutterPlanError>> + Send;
}

impl<T: CommandBus> CommandBus for std::sync::Arc<T> {
    fn call(
        &self,
        entity_id: &str,
        command: CoverCommand,
    ) -> impl Future<Output = Result<(), ShutterPlanError>> + Send {
        (**self).call(entity_id, command)
    }
}
