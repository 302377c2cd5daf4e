//! Error types for the scenario runner binary.
//!
//! [`SimError`] is the top-level error type that wraps every failure mode
//! during startup and report output.

/// Top-level error for the scenario runner.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// Configuration loading or validation failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: hungerwatch_core::config::ConfigError,
    },

    /// The report could not be serialized.
    #[error("report serialization error: {source}")]
    Report {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
