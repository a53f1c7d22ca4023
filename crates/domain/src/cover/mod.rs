//! Cover — states, capability flags, commands, and host snapshots.
//!
//! The proxy cover exposes the same surface as the base cover it wraps; the
//! types here describe that surface and the translation from a target
//! position to a concrete command.

mod command;
mod features;
mod snapshot;
mod state;

pub use command::CoverCommand;
pub use features::CoverFeatures;
pub use snapshot::CoverSnapshot;
pub use state::CoverState;
