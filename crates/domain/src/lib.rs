//! # shutterplan-domain
//!
//! Pure domain model for the shutterplan scheduled-cover system.
//!
//! ## Responsibilities
//! - Foundational types: the derived unique identifier, error conventions,
//!   wall-clock timestamps
//! - Define the **Schedule** (ordered time-of-day → position rules) and the
//!   next-occurrence computation that drives the recurring timers
//! - Define the **Cover** vocabulary (state, capability flags, commands,
//!   snapshots) including the position → command translation for covers
//!   without intermediate-position support
//! - Define the **CoverConfig** record created by the setup flow
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod config;
pub mod cover;
pub mod schedule;
