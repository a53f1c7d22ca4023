//! Cover state — the operational state reported by the base cover.

use serde::{Deserialize, Serialize};

/// Discrete operational state of a cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverState {
    Open,
    Closed,
    Opening,
    Closing,
    #[default]
    Unknown,
    Unavailable,
}

impl CoverState {
    /// Whether the cover is reachable and reporting a real state.
    #[must_use]
    pub fn is_available(self) -> bool {
        !matches!(self, Self::Unavailable | Self::Unknown)
    }
}

impl std::fmt::Display for CoverState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Closed => f.write_str("closed"),
            Self::Opening => f.write_str("opening"),
            Self::Closing => f.write_str("closing"),
            Self::Unknown => f.write_str("unknown"),
            Self::Unavailable => f.write_str("unavailable"),
        }
    }
}
