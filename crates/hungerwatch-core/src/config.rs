//! Configuration loading and typed config structures for Hungerwatch.
//!
//! The canonical configuration lives in `hungerwatch-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror the
//! YAML structure, and a loader that reads and validates the file. Every
//! field has a default, so an empty file is a valid configuration.

use std::path::Path;

use hungerwatch_types::LeverPolicy;
use serde::Deserialize;

use crate::levers::LeverError;
use crate::scenario::ScenarioStep;

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

    /// A scenario step carries a lever value outside its domain.
    #[error("scenario step {index} is invalid: {source}")]
    InvalidLever {
        /// Zero-based position of the step in `scenario.steps`.
        index: usize,
        /// The domain violation.
        source: LeverError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HungerwatchConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Lever input handling.
    #[serde(default)]
    pub levers: LeverConfig,

    /// Scripted scenario for the runner.
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

impl HungerwatchConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::InvalidLever`] if a scenario step is out of domain.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::InvalidLever`] if a scenario step is out of domain.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.scenario.validate()?;
        Ok(config)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error). `RUST_LOG` wins
    /// when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Lever input handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct LeverConfig {
    /// Whether the store trusts (`lenient`) or clamps (`clamp`) lever values.
    #[serde(default)]
    pub policy: LeverPolicy,
}

/// A named, ordered list of store operations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioConfig {
    /// Label used in logs and the report.
    #[serde(default = "default_scenario_name")]
    pub name: String,

    /// Steps replayed against a fresh store.
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
}

impl ScenarioConfig {
    /// Check every step against the lever domains.
    ///
    /// The config file acts as an input control, so out-of-domain levers are
    /// rejected here rather than left to the store policy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, step) in self.steps.iter().enumerate() {
            step.validate()
                .map_err(|source| ConfigError::InvalidLever { index, source })?;
        }
        Ok(())
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: default_scenario_name(),
            steps: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_scenario_name() -> String {
    "Baseline".to_owned()
}
