//! Enumeration types for the Hungerwatch scenario simulator.
//!
//! These are the categorical values the dashboard renders (stress level,
//! stability band, risk direction) plus the lever identifiers and the
//! lever-input policy.

use core::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Stress
// ---------------------------------------------------------------------------

/// Categorical system stress level derived from the stress magnitude.
///
/// Ordered from least to most severe, so `SystemStress::High > SystemStress::Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum SystemStress {
    /// Stress magnitude of 8 or less.
    Low,
    /// Stress magnitude above 8, up to 15.
    Moderate,
    /// Stress magnitude above 15, up to 25.
    High,
    /// Stress magnitude above 25.
    Critical,
}

impl SystemStress {
    /// Lowercase label as shown on the dashboard.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for SystemStress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Stability gauge
// ---------------------------------------------------------------------------

/// Colour band of the stability gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum StabilityBand {
    /// Stability index above 60.
    Stable,
    /// Stability index above 30, up to 60.
    Strained,
    /// Stability index of 30 or less.
    Unstable,
}

impl StabilityBand {
    /// Classify a stability index into its gauge band.
    pub const fn from_index(index: u8) -> Self {
        if index > 60 {
            Self::Stable
        } else if index > 30 {
            Self::Strained
        } else {
            Self::Unstable
        }
    }
}

// ---------------------------------------------------------------------------
// Risk direction
// ---------------------------------------------------------------------------

/// Sign of the net risk change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum RiskDirection {
    /// Net risk goes up (positive change).
    Rising,
    /// Net risk goes down (negative change).
    Falling,
    /// No net change.
    Unchanged,
}

// ---------------------------------------------------------------------------
// Levers
// ---------------------------------------------------------------------------

/// Identifies one of the four caller-controlled inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Lever {
    /// Percentage change to meal-serving capacity.
    Capacity,
    /// Percentage change to allocated budget.
    Budget,
    /// Monsoon / heavy rain disruption flag.
    Weather,
    /// Road closure / supply delay disruption flag.
    Transport,
}

impl Lever {
    /// All levers in display order.
    pub const ALL: [Self; 4] = [Self::Capacity, Self::Budget, Self::Weather, Self::Transport];
}

/// How a store treats percentage lever values outside their domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum LeverPolicy {
    /// Trust the caller: out-of-domain values flow through the formula as-is.
    #[default]
    Lenient,
    /// Pin out-of-domain values to the nearest bound before recomputing.
    Clamp,
}
