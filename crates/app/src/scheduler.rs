//! Timer runner — one recurring chain per schedule entry.
//!
//! Each chain is a spawned task: sleep until the armed instant, invoke the
//! proxy cover's fire handler, continue with whatever instant it returns.
//! Every timer is one-shot; the "re-arm" is the next loop iteration with a
//! freshly computed instant. All task handles are tracked so teardown can
//! cancel the chains instead of leaking them to the runtime.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use shutterplan_domain::time::{now_local, LocalTimestamp};

use crate::ports::{CommandBus, StateStore};
use crate::proxy_cover::ScheduledCover;

/// Wall-clock re-check interval; a single long sleep drifts across
/// suspend/resume.
const MAX_SLEEP_CHUNK: Duration = Duration::from_secs(300);

/// Owns the running timer chains of one scheduled cover.
pub struct CoverScheduler {
    handles: Vec<JoinHandle<()>>,
}

impl CoverScheduler {
    /// Arm one timer chain per schedule entry, starting from now.
    pub fn start<S, C>(cover: Arc<ScheduledCover<S, C>>) -> Self
    where
        S: StateStore + 'static,
        C: CommandBus + 'static,
    {
        let now = now_local();
        let handles = cover
            .initial_fire_times(now)
            .into_iter()
            .map(|at| {
                let cover = Arc::clone(&cover);
                tokio::spawn(run_chain(cover, at))
            })
            .collect();
        Self { handles }
    }

    /// Number of live timer chains.
    #[must_use]
    pub fn timer_count(&self) -> usize {
        self.handles.len()
    }

    /// Whether no chains are armed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Cancel every timer chain.
    pub fn shutdown(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for CoverScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_chain<S, C>(cover: Arc<ScheduledCover<S, C>>, first: LocalTimestamp)
where
    S: StateStore,
    C: CommandBus,
{
    let mut next = Some(first);
    while let Some(at) = next.take() {
        tracing::debug!(cover = %cover.base_cover(), at = %at, "timer armed");
        sleep_until_wall_clock(at).await;
        match cover.handle_fire(now_local()).await {
            Ok(rearmed) => next = rearmed,
            Err(err) => {
                tracing::error!(
                    cover = %cover.base_cover(),
                    error = %err,
                    "scheduled command failed; entry will not re-arm"
                );
            }
        }
    }
}

/// Sleep until the wall clock reaches `at`, re-checking periodically.
async fn sleep_until_wall_clock(at: LocalTimestamp) {
    loop {
        let Ok(remaining) = (at - now_local()).to_std() else {
            // `at` is not in the future anymore.
            return;
        };
        if remaining.is_zero() {
            return;
        }
        tokio::time::sleep(remaining.min(MAX_SLEEP_CHUNK)).await;
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::sync::Mutex;

    use chrono::NaiveTime;

    use shutterplan_domain::config::CoverConfig;
    use shutterplan_domain::cover::{CoverCommand, CoverSnapshot};
    use shutterplan_domain::error::ShutterPlanError;
    use shutterplan_domain::schedule::{Schedule, ScheduleEntry};

    use super::*;

    #[derive(Default)]
    struct NullStates;

    impl StateStore for NullStates {
        fn get(
            &self,
            _entity_id: &str,
        ) -> impl Future<Output = Result<Option<CoverSnapshot>, ShutterPlanError>> + Send {
            async { Ok(None) }
        }
    }

    #[derive(Default)]
    struct NullCommands {
        calls: Mutex<Vec<CoverCommand>>,
    }

    impl CommandBus for NullCommands {
        fn call(
            &self,
            _entity_id: &str,
            command: CoverCommand,
        ) -> impl Future<Output = Result<(), ShutterPlanError>> + Send {
            self.calls.lock().unwrap().push(command);
            async { Ok(()) }
        }
    }

    fn cover_with_entries(count: usize) -> Arc<ScheduledCover<NullStates, NullCommands>> {
        let entries: Vec<ScheduleEntry> = (0..count)
            .map(|i| {
                #[allow(clippy::cast_possible_truncation)]
                let hour = (i % 24) as u32;
                ScheduleEntry::new(NaiveTime::from_hms_opt(hour, 0, 0).unwrap(), 50).unwrap()
            })
            .collect();
        Arc::new(ScheduledCover::new(
            &CoverConfig::new("Test", "cover.test"),
            Schedule::from(entries),
            NullStates,
            NullCommands::default(),
        ))
    }

    #[tokio::test]
    async fn should_arm_one_chain_per_schedule_entry() {
        let mut scheduler = CoverScheduler::start(cover_with_entries(3));
        assert_eq!(scheduler.timer_count(), 3);
        scheduler.shutdown();
    }

    #[tokio::test]
    async fn should_arm_nothing_for_empty_schedule() {
        let scheduler = CoverScheduler::start(cover_with_entries(0));
        assert!(scheduler.is_empty());
    }

    #[tokio::test]
    async fn should_cancel_all_chains_on_shutdown() {
        let mut scheduler = CoverScheduler::start(cover_with_entries(2));
        scheduler.shutdown();
        assert_eq!(scheduler.timer_count(), 0);

        // Idempotent.
        scheduler.shutdown();
        assert!(scheduler.is_empty());
    }

    #[tokio::test]
    async fn should_return_immediately_when_instant_already_passed() {
        let past = now_local() - chrono::Duration::seconds(5);
        // Completes without sleeping; a hang would trip the test harness.
        sleep_until_wall_clock(past).await;
    }
}
