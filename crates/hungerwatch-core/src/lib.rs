//! Scenario simulation engine for the Hungerwatch dashboard.
//!
//! This crate maps policy levers (capacity change, budget change, weather and
//! transport disruption) to derived risk metrics and keeps them in an owned,
//! eagerly recomputed store.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `hungerwatch-config.yaml` into
//!   strongly-typed structs.
//! - [`levers`] -- Lever domain validation and the store's input policy.
//! - [`model`] -- The pure recompute function from levers to metrics.
//! - [`narrative`] -- Scenario analysis text for the dashboard.
//! - [`scenario`] -- [`ScenarioStep`] operations and deterministic replay.
//! - [`shared`] -- [`SharedSimulation`], a lock-guarded store handle.
//! - [`store`] -- [`SimulationStore`], the owned per-session state.
//!
//! [`ScenarioStep`]: scenario::ScenarioStep
//! [`SharedSimulation`]: shared::SharedSimulation
//! [`SimulationStore`]: store::SimulationStore

pub mod config;
pub mod levers;
pub mod model;
pub mod narrative;
pub mod scenario;
pub mod shared;
pub mod store;

// Re-export primary types at crate root.
pub use levers::LeverError;
pub use model::recompute;
pub use scenario::{ScenarioStep, replay};
pub use shared::SharedSimulation;
pub use store::SimulationStore;
