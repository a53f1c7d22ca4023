//! Configuration record created by the setup flow.

use serde::{Deserialize, Serialize};

use crate::error::{ShutterPlanError, ValidationError};
use crate::id::UniqueId;

/// Name used when the user leaves the field untouched.
pub const DEFAULT_NAME: &str = "Scheduled Shutter";

/// The `{name, base_cover}` record persisted per scheduled cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverConfig {
    /// User-chosen display name of the proxy cover.
    pub name: String,
    /// Entity id of the wrapped base cover.
    pub base_cover: String,
}

impl CoverConfig {
    /// Create a config record.
    pub fn new(name: impl Into<String>, base_cover: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_cover: base_cover.into(),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ShutterPlanError::Validation`] when `name`
    /// ([`ValidationError::EmptyName`]) or `base_cover`
    /// ([`ValidationError::EmptyBaseCover`]) is empty.
    pub fn validate(&self) -> Result<(), ShutterPlanError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.base_cover.is_empty() {
            return Err(ValidationError::EmptyBaseCover.into());
        }
        Ok(())
    }

    /// Derive the deterministic unique id for this record.
    #[must_use]
    pub fn unique_id(&self) -> UniqueId {
        UniqueId::for_base_cover(&self.base_cover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_valid_config() {
        let config = CoverConfig::new(DEFAULT_NAME, "cover.living_room");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_empty_name() {
        let config = CoverConfig::new("", "cover.living_room");
        assert!(matches!(
            config.validate(),
            Err(ShutterPlanError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_reject_empty_base_cover() {
        let config = CoverConfig::new(DEFAULT_NAME, "");
        assert!(matches!(
            config.validate(),
            Err(ShutterPlanError::Validation(ValidationError::EmptyBaseCover))
        ));
    }

    #[test]
    fn should_derive_unique_id_from_base_cover() {
        let config = CoverConfig::new(DEFAULT_NAME, "cover.living_room");
        assert_eq!(config.unique_id().as_str(), "shutterplan_cover.living_room");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let config = CoverConfig::new("Bedroom shutter", "cover.bedroom");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CoverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
