//! Capability flags advertised by a cover.
//!
//! Bit values follow the convention of the host platform's
//! `supported_features` attribute, so a snapshot's raw integer can be wrapped
//! verbatim.

use serde::{Deserialize, Serialize};

/// Bit set of cover capabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverFeatures(u32);

impl CoverFeatures {
    /// The cover can be opened.
    pub const OPEN: Self = Self(1);
    /// The cover can be closed.
    pub const CLOSE: Self = Self(2);
    /// The cover can be set to an arbitrary 0–100 position.
    pub const SET_POSITION: Self = Self(4);
    /// Movement can be stopped mid-way.
    pub const STOP: Self = Self(8);

    /// No capabilities.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Wrap a raw `supported_features` integer.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw flag bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the cover supports intermediate positions.
    #[must_use]
    pub const fn supports_set_position(self) -> bool {
        self.contains(Self::SET_POSITION)
    }
}

impl std::ops::BitOr for CoverFeatures {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_combine_flags_with_bitor() {
        let features = CoverFeatures::OPEN | CoverFeatures::CLOSE;
        assert!(features.contains(CoverFeatures::OPEN));
        assert!(features.contains(CoverFeatures::CLOSE));
        assert!(!features.contains(CoverFeatures::SET_POSITION));
    }

    #[test]
    fn should_detect_set_position_support() {
        let positionable =
            CoverFeatures::OPEN | CoverFeatures::CLOSE | CoverFeatures::SET_POSITION;
        assert!(positionable.supports_set_position());

        let binary = CoverFeatures::OPEN | CoverFeatures::CLOSE | CoverFeatures::STOP;
        assert!(!binary.supports_set_position());
    }

    #[test]
    fn should_default_to_empty() {
        assert_eq!(CoverFeatures::default(), CoverFeatures::empty());
        assert!(!CoverFeatures::default().supports_set_position());
    }

    #[test]
    fn should_preserve_raw_bits() {
        let features = CoverFeatures::from_bits(15);
        assert_eq!(features.bits(), 15);
        assert!(features.contains(CoverFeatures::SET_POSITION));
    }

    #[test]
    fn should_serialize_as_plain_integer() {
        let features = CoverFeatures::OPEN | CoverFeatures::SET_POSITION;
        let json = serde_json::to_string(&features).unwrap();
        assert_eq!(json, "5");
        let parsed: CoverFeatures = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, features);
    }
}
