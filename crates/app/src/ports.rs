//! Port definitions — traits that host adapters implement.
//!
//! Ports are the boundaries between the application core and the host
//! platform. They are defined here (in `app`) so that both the use-case layer
//! and the adapter layer can depend on them without creating circular
//! dependencies.

pub mod command_bus;
pub mod config_store;
pub mod registry;
pub mod state_store;

pub use command_bus::CommandBus;
pub use config_store::ConfigStore;
pub use registry::{EntityRegistry, RegistryEntry};
pub use state_store::StateStore;
