//! Shared type definitions for the Hungerwatch scenario simulator.
//!
//! This crate is the single source of truth for the lever and metric types
//! exchanged between the simulation core and the dashboard. Types defined
//! here flow downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers (simulation session identifiers)
//! - [`enums`] -- Stress level, stability band, risk direction, levers, policy
//! - [`structs`] -- Lever set, derived metrics, and the full snapshot

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Lever, LeverPolicy, RiskDirection, StabilityBand, SystemStress};
pub use ids::SessionId;
pub use structs::{DerivedMetrics, Levers, SimulationState};
