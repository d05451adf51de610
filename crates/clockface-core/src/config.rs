//! Configuration loading and typed config structures for Clockface.
//!
//! The configuration lives in `clockface-config.yaml`. Every field has a
//! default, so an empty or missing file is valid. The display zone can be
//! overridden with the `CLOCKFACE_ZONE` environment variable. The zone is
//! kept as text here and only checked when a resolver is built from it,
//! so commands that never read an instant are not blocked by a bad zone.

use std::path::Path;

use serde::Deserialize;

use crate::resolver::{ResolverError, ZoneSetting};

/// Environment variable that overrides `display.zone`.
pub const ZONE_ENV: &str = "CLOCKFACE_ZONE";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level Clockface configuration.
///
/// Mirrors the structure of `clockface-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClockfaceConfig {
    /// How instants are read and printed.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClockfaceConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `CLOCKFACE_ZONE` overrides `display.zone` when set.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// Applies the same `CLOCKFACE_ZONE` override as [`Self::from_file`].
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse_with_zone_override(yaml, std::env::var(ZONE_ENV).ok())
    }

    /// Parse configuration from a YAML string, replacing `display.zone`
    /// with `zone` when present.
    pub fn parse_with_zone_override(yaml: &str, zone: Option<String>) -> Result<Self, ConfigError> {
        // An empty document means all defaults.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.display.apply_zone_override(zone);
        Ok(config)
    }
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Zone used to read instants: `utc`, `local`, or `+HH:MM`.
    #[serde(default = "default_zone")]
    pub zone: String,

    /// Print the plain-text reading next to the glyph.
    #[serde(default)]
    pub show_label: bool,
}

impl DisplayConfig {
    /// Replace the zone with `value` when present.
    pub fn apply_zone_override(&mut self, value: Option<String>) {
        if let Some(zone) = value {
            self.zone = zone;
        }
    }

    /// Parse the configured zone into a resolver.
    pub fn zone_setting(&self) -> Result<ZoneSetting, ResolverError> {
        self.zone.parse()
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            zone: default_zone(),
            show_label: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG`
    /// is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_zone() -> String {
    "utc".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}
