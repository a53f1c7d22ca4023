//! Schedule editing — the single repeatable options step.
//!
//! A session loads the persisted schedule into memory and applies each
//! submission against that in-memory list. One submission may combine a
//! removal, an addition, and a finish; removal is applied before addition.
//! Only finishing writes anything back, replacing the stored schedule
//! wholesale.

use chrono::NaiveTime;

use shutterplan_domain::error::ShutterPlanError;
use shutterplan_domain::id::UniqueId;
use shutterplan_domain::schedule::{Schedule, ScheduleEntry};

use crate::ports::ConfigStore;

/// Values submitted on one round of the `schedule` step.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStepInput {
    /// Positional index to remove; out-of-bounds is a silent no-op.
    pub remove_entry: Option<usize>,
    /// Time of day for a new entry; ignored unless `position` is also set.
    pub time: Option<NaiveTime>,
    /// Target position for a new entry; ignored unless `time` is also set.
    pub position: Option<u8>,
    /// Persist the current list and leave the flow.
    pub finish: bool,
}

/// What the step does after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Step re-displays; `rendered` is the current list, one line per entry.
    Continue { rendered: String },
    /// The schedule was persisted and the session is complete.
    Finished,
}

/// One editing session over a cover's schedule.
pub struct ScheduleSession<C> {
    store: C,
    unique_id: UniqueId,
    entries: Schedule,
}

impl<C: ConfigStore> ScheduleSession<C> {
    /// Open a session, loading the currently persisted schedule.
    ///
    /// # Errors
    ///
    /// Propagates a storage failure from the config store.
    pub async fn open(store: C, unique_id: UniqueId) -> Result<Self, ShutterPlanError> {
        let entries = store.load_schedule(&unique_id).await?;
        Ok(Self {
            store,
            unique_id,
            entries,
        })
    }

    /// The current in-memory list.
    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.entries
    }

    /// Labels for the removal selector, one per entry in order.
    #[must_use]
    pub fn removal_labels(&self) -> Vec<String> {
        self.entries
            .entries()
            .iter()
            .map(|entry| format!("Remove {entry}"))
            .collect()
    }

    /// Apply one submission: remove first, then add, then maybe finish.
    ///
    /// A half-specified addition (time without position or vice versa) is
    /// ignored, mirroring the out-of-bounds removal policy.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range position, or a storage
    /// failure when finishing.
    pub async fn submit(
        &mut self,
        input: ScheduleStepInput,
    ) -> Result<StepOutcome, ShutterPlanError> {
        if let Some(index) = input.remove_entry {
            self.entries.remove(index);
        }

        if let (Some(time), Some(position)) = (input.time, input.position) {
            self.entries.push(ScheduleEntry::new(time, position)?);
        }

        if input.finish {
            self.store
                .save_schedule(&self.unique_id, self.entries.clone())
                .await?;
            return Ok(StepOutcome::Finished);
        }

        Ok(StepOutcome::Continue {
            rendered: self.entries.render(),
        })
    }
}
