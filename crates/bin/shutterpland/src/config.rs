//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `shutterplan.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use chrono::NaiveTime;
use serde::Deserialize;

use shutterplan_domain::config::DEFAULT_NAME;
use shutterplan_domain::schedule::{Schedule, ScheduleEntry};

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The proxy cover to create.
    pub cover: CoverSection,
    /// Schedule entries, in order.
    pub schedule: Vec<ScheduleEntrySection>,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Simulated base cover settings.
    pub virtual_cover: VirtualCoverConfig,
}

/// Name and base cover of the proxy.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CoverSection {
    /// Display name of the proxy cover.
    pub name: String,
    /// Entity id of the base cover to wrap.
    pub base_cover: String,
}

/// One `time = "HH:MM"`, `position = 0..=100` rule.
#[derive(Debug, Deserialize)]
pub struct ScheduleEntrySection {
    /// Wall-clock time of day, `HH:MM`.
    pub time: String,
    /// Target position in percent.
    pub position: u8,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Settings for the simulated base cover the demo host registers.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct VirtualCoverConfig {
    /// Whether the simulated cover supports intermediate positions.
    pub positionable: bool,
    /// Device class reported by the simulated cover.
    pub device_class: String,
}

impl Config {
    /// Load configuration from `shutterplan.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// schedule entry fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("shutterplan.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SHUTTERPLAN_NAME") {
            self.cover.name = val;
        }
        if let Ok(val) = std::env::var("SHUTTERPLAN_BASE_COVER") {
            self.cover.base_cover = val;
        }
        if let Ok(val) = std::env::var("SHUTTERPLAN_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cover.base_cover.is_empty() {
            return Err(ConfigError::Validation(
                "base_cover must not be empty".to_string(),
            ));
        }
        for entry in &self.schedule {
            entry.to_entry()?;
        }
        Ok(())
    }

    /// Build the domain [`Schedule`] from the configured entries.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed time or position.
    pub fn schedule(&self) -> Result<Schedule, ConfigError> {
        let entries = self
            .schedule
            .iter()
            .map(ScheduleEntrySection::to_entry)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Schedule::from(entries))
    }
}

impl ScheduleEntrySection {
    /// Parse into a domain [`ScheduleEntry`].
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed `HH:MM` time or an
    /// out-of-range position.
    pub fn to_entry(&self) -> Result<ScheduleEntry, ConfigError> {
        let time = NaiveTime::parse_from_str(&self.time, "%H:%M")
            .map_err(|_| ConfigError::Validation(format!("invalid time {:?}", self.time)))?;
        ScheduleEntry::new(time, self.position)
            .map_err(|err| ConfigError::Validation(err.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cover: CoverSection::default(),
            schedule: vec![
                ScheduleEntrySection {
                    time: "08:00".to_string(),
                    position: 100,
                },
                ScheduleEntrySection {
                    time: "20:30".to_string(),
                    position: 0,
                },
            ],
            logging: LoggingConfig::default(),
            virtual_cover: VirtualCoverConfig::default(),
        }
    }
}

impl Default for CoverSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            base_cover: "cover.virtual_shutter".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "shutterpland=info,shutterplan=info".to_string(),
        }
    }
}

impl Default for VirtualCoverConfig {
    fn default() -> Self {
        Self {
            positionable: true,
            device_class: "shutter".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
