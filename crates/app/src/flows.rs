//! User-facing flows — setup validation and schedule editing.
//!
//! The host renders the actual forms; these types carry the submitted values
//! and apply the flow policies against the injected ports.

pub mod schedule;
pub mod setup;

pub use schedule::{ScheduleSession, ScheduleStepInput, StepOutcome};
pub use setup::{CreatedConfig, SetupError, SetupFlow, SetupInput};
