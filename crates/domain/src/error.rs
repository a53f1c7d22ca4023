//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ShutterPlanError`] via `#[from]` — no `String` catch-all variants in the
//! domain itself.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum ShutterPlanError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced entity or record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A call into a host collaborator (registry, state store, command bus,
    /// options storage) failed.
    #[error("host call failed")]
    Host(#[from] HostError),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A cover name must not be empty.
    #[error("name must not be empty")]
    EmptyName,
    /// The base cover reference must not be empty.
    #[error("base cover reference must not be empty")]
    EmptyBaseCover,
    /// Target positions are percentages.
    #[error("position {0} is outside 0..=100")]
    PositionOutOfRange(u8),
}

/// A lookup that came back empty.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"Cover"`, `"Config"`).
    pub entity: &'static str,
    /// The identifier that failed to resolve.
    pub id: String,
}

/// Failure reported by a host collaborator.
#[derive(Debug, thiserror::Error)]
#[error("host service call failed: {reason}")]
pub struct HostError {
    pub reason: String,
}

impl HostError {
    /// Wrap a failure reason coming from the host side.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
