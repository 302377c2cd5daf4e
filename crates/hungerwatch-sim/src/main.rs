//! Scenario runner binary for the Hungerwatch simulator.
//!
//! Replays the scenario configured in `hungerwatch-config.yaml` against a
//! fresh simulation store and prints a JSON report on stdout. Logs go to
//! stderr so the report can be piped.
//!
//! # Startup Sequence
//!
//! 1. Load configuration (`HUNGERWATCH_CONFIG` or `hungerwatch-config.yaml`)
//! 2. Initialize structured logging (tracing)
//! 3. Replay the scenario steps
//! 4. Print the report

mod error;
mod report;

use std::ffi::OsString;
use std::path::PathBuf;

use hungerwatch_core::config::{HungerwatchConfig, LoggingConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::SimError;

/// Environment variable naming an alternative config file.
const CONFIG_PATH_ENV: &str = "HUNGERWATCH_CONFIG";

/// Config file looked up in the working directory by default.
const DEFAULT_CONFIG_PATH: &str = "hungerwatch-config.yaml";

/// Filter used when neither `RUST_LOG` nor `logging.level` parses.
const FALLBACK_LOG_LEVEL: &str = "info";

/// Application entry point for the scenario runner.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the report cannot be
/// serialized.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let (config, source) = load_config(std::env::var_os(CONFIG_PATH_ENV))?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("hungerwatch-sim starting");
    match &source {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!("Config file not found, using defaults"),
    }

    // 3. Replay the scenario.
    let report = report::run_scenario(&config.scenario, config.levers.policy);
    info!(
        session = %report.session_id,
        risk_change = %report.state.metrics.risk_change,
        stress = %report.state.metrics.system_stress,
        stability = report.state.metrics.stability_index,
        affected_schools = report.state.metrics.affected_schools,
        projected_shortages = report.state.metrics.projected_shortages,
        "Scenario finished"
    );

    // 4. Print the report.
    let json = serde_json::to_string_pretty(&report).map_err(SimError::from)?;
    println!("{json}");

    Ok(())
}

/// Load the configuration, returning the file it came from.
///
/// `override_path` is the value of `HUNGERWATCH_CONFIG`, if set. A missing
/// file is not an error: defaults are used and the source is `None`. A file
/// that exists but fails to parse or validate is an error.
fn load_config(
    override_path: Option<OsString>,
) -> Result<(HungerwatchConfig, Option<PathBuf>), SimError> {
    let path = override_path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if path.exists() {
        let config = HungerwatchConfig::from_file(&path)?;
        Ok((config, Some(path)))
    } else {
        Ok((HungerwatchConfig::default(), None))
    }
}

/// Pick the log filter: `RUST_LOG` first, then `logging.level`, then `info`.
///
/// Empty or unparsable directives fall through to the next source.
fn select_filter(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_LOG_LEVEL))
}

/// Install the global tracing subscriber.
fn init_tracing(logging: &LoggingConfig) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = select_filter(rust_log.as_deref(), &logging.level);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
