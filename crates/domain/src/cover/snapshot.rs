//! Snapshot of a base cover's current state as reported by the host.

use serde::{Deserialize, Serialize};

use super::{CoverFeatures, CoverState};

/// Point-in-time view of the base cover, read through the state store port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverSnapshot {
    /// Operational state.
    pub state: CoverState,
    /// Reported position attribute, if any.
    pub position: Option<u8>,
    /// Device class attribute (e.g. `"shutter"`, `"blind"`).
    pub device_class: Option<String>,
    /// Raw capability flags, if the cover reports them.
    pub supported_features: Option<CoverFeatures>,
}

impl CoverSnapshot {
    /// Snapshot with only a state, no attributes.
    #[must_use]
    pub fn new(state: CoverState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    /// Attach a reported position attribute.
    #[must_use]
    pub fn with_position(mut self, position: u8) -> Self {
        self.position = Some(position);
        self
    }

    /// Attach a device class attribute.
    #[must_use]
    pub fn with_device_class(mut self, device_class: impl Into<String>) -> Self {
        self.device_class = Some(device_class.into());
        self
    }

    /// Attach capability flags.
    #[must_use]
    pub fn with_features(mut self, features: CoverFeatures) -> Self {
        self.supported_features = Some(features);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_snapshot_with_chained_attributes() {
        let snapshot = CoverSnapshot::new(CoverState::Open)
            .with_position(40)
            .with_device_class("shutter")
            .with_features(CoverFeatures::SET_POSITION);

        assert_eq!(snapshot.state, CoverState::Open);
        assert_eq!(snapshot.position, Some(40));
        assert_eq!(snapshot.device_class.as_deref(), Some("shutter"));
        assert_eq!(
            snapshot.supported_features,
            Some(CoverFeatures::SET_POSITION)
        );
    }

    #[test]
    fn should_default_to_unknown_state_without_attributes() {
        let snapshot = CoverSnapshot::default();
        assert_eq!(snapshot.state, CoverState::Unknown);
        assert!(snapshot.position.is_none());
        assert!(snapshot.device_class.is_none());
        assert!(snapshot.supported_features.is_none());
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let snapshot = CoverSnapshot::new(CoverState::Closed).with_position(0);
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: CoverSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
