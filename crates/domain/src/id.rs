//! The deterministically derived unique identifier for a scheduled cover.
//!
//! Unlike random identifiers, a [`UniqueId`] is a pure function of the base
//! cover's entity id. Re-adding the same base cover derives the same id, which
//! is what makes duplicate setup detectable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integration domain prefix used in derived identifiers.
pub const DOMAIN: &str = "shutterplan";

/// Unique identifier of a scheduled proxy cover, `shutterplan_<base_cover>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueId(String);

impl UniqueId {
    /// Derive the identifier for a proxy wrapping `base_cover`.
    #[must_use]
    pub fn for_base_cover(base_cover: &str) -> Self {
        Self(format!("{DOMAIN}_{base_cover}"))
    }

    /// Access the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
