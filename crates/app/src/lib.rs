//! # shutterplan-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that host adapters must implement
//!   (driven/outbound ports):
//!   - `EntityRegistry` — resolve entity references, read area/device linkage
//!   - `StateStore` — read the base cover's current snapshot
//!   - `CommandBus` — issue outbound cover commands
//!   - `ConfigStore` — config records and persisted schedules
//! - Define **driving/inbound ports** as use-case structs:
//!   - `SetupFlow` — validate a base cover and create the config record
//!   - `ScheduleSession` — the repeatable schedule-editing options step
//!   - `ScheduledCover` — the proxy cover entity (properties, commands,
//!     fire handling)
//!   - `CoverScheduler` — one recurring timer chain per schedule entry
//! - Orchestrate domain objects without knowing *how* the host stores state
//!   or dispatches commands
//!
//! ## Dependency rule
//! Depends on `shutterplan-domain` only (plus `tokio` for tasks and timers).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod flows;
pub mod ports;
pub mod proxy_cover;
pub mod scheduler;
