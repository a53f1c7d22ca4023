//! Commands issued against the base cover.

use serde::{Deserialize, Serialize};

use super::CoverFeatures;

/// An outbound command for a cover entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CoverCommand {
    /// Fully open the cover.
    Open,
    /// Fully close the cover.
    Close,
    /// Move to an intermediate position (percent, 0 = closed).
    SetPosition { position: u8 },
}

impl CoverCommand {
    /// Translate a target position into the right command for `features`.
    ///
    /// Covers with intermediate-position support get the position verbatim.
    /// Simple open/close covers get a binary bridge: above half-way opens,
    /// half-way or below closes (exactly 50 closes).
    #[must_use]
    pub fn for_position(position: u8, features: CoverFeatures) -> Self {
        if features.supports_set_position() {
            Self::SetPosition { position }
        } else if position > 50 {
            Self::Open
        } else {
            Self::Close
        }
    }

    /// The host service name this command maps to.
    #[must_use]
    pub fn service_name(self) -> &'static str {
        match self {
            Self::Open => "open_cover",
            Self::Close => "close_cover",
            Self::SetPosition { .. } => "set_cover_position",
        }
    }
}

impl std::fmt::Display for CoverCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Close => f.write_str("close"),
            Self::SetPosition { position } => write!(f, "set_position({position})"),
        }
    }
}
