//! Lever, metric, and snapshot structs for the Hungerwatch scenario simulator.
//!
//! [`SimulationState`] is the snapshot handed to the dashboard. It serializes
//! flat and in `camelCase` so the JSON shape matches what the view layer
//! already reads (`capacityModifier`, `stabilityIndex`, ...).

use core::ops::RangeInclusive;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Lever, RiskDirection, StabilityBand, SystemStress};

// ---------------------------------------------------------------------------
// Levers
// ---------------------------------------------------------------------------

/// The four caller-controlled inputs of a scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Levers {
    /// Percentage change to meal-serving capacity, expected in `-50..=50`.
    pub capacity_modifier: i32,
    /// Percentage change to allocated budget, expected in `-30..=30`.
    pub budget_modifier: i32,
    /// Monsoon / weather disruption flag.
    pub weather_disruption: bool,
    /// Road / supply disruption flag.
    pub transport_disruption: bool,
}

impl Levers {
    /// Domain of the capacity lever (inclusive).
    pub const CAPACITY_RANGE: RangeInclusive<i32> = -50..=50;

    /// Domain of the budget lever (inclusive).
    pub const BUDGET_RANGE: RangeInclusive<i32> = -30..=30;

    /// All levers at zero / off.
    pub const BASELINE: Self = Self {
        capacity_modifier: 0,
        budget_modifier: 0,
        weather_disruption: false,
        transport_disruption: false,
    };

    /// Whether the given lever sits at its default value.
    pub const fn is_default(&self, lever: Lever) -> bool {
        match lever {
            Lever::Capacity => self.capacity_modifier == 0,
            Lever::Budget => self.budget_modifier == 0,
            Lever::Weather => !self.weather_disruption,
            Lever::Transport => !self.transport_disruption,
        }
    }

    /// Whether every lever sits at its default value.
    pub const fn is_baseline(&self) -> bool {
        self.is_default(Lever::Capacity)
            && self.is_default(Lever::Budget)
            && self.is_default(Lever::Weather)
            && self.is_default(Lever::Transport)
    }
}

// ---------------------------------------------------------------------------
// Derived metrics
// ---------------------------------------------------------------------------

/// Metrics derived from a lever set. Never set independently of a recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct DerivedMetrics {
    /// Net percentage change in aggregate risk, one decimal place.
    #[serde(rename = "resultRiskChange", with = "rust_decimal::serde::float")]
    #[ts(as = "f64")]
    pub risk_change: Decimal,
    /// System stability score in `0..=100`.
    pub stability_index: u8,
    /// Categorical stress level.
    pub system_stress: SystemStress,
    /// Estimated number of impacted schools, capped at 50.
    pub affected_schools: u32,
    /// Estimated shortage-days; zero whenever net risk is not positive.
    pub projected_shortages: u32,
}

impl DerivedMetrics {
    /// Metrics of the zero-lever baseline.
    pub const BASELINE: Self = Self {
        risk_change: Decimal::ZERO,
        stability_index: 85,
        system_stress: SystemStress::Low,
        affected_schools: 0,
        projected_shortages: 0,
    };
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Full snapshot of a simulation: levers plus the metrics derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SimulationState {
    /// Current lever values.
    #[serde(flatten)]
    pub levers: Levers,
    /// Metrics derived from `levers`.
    #[serde(flatten)]
    pub metrics: DerivedMetrics,
}

impl SimulationState {
    /// The canonical initial and reset state.
    pub const BASELINE: Self = Self {
        levers: Levers::BASELINE,
        metrics: DerivedMetrics::BASELINE,
    };

    /// Sign of the net risk change.
    pub fn risk_direction(&self) -> RiskDirection {
        if self.metrics.risk_change > Decimal::ZERO {
            RiskDirection::Rising
        } else if self.metrics.risk_change < Decimal::ZERO {
            RiskDirection::Falling
        } else {
            RiskDirection::Unchanged
        }
    }

    /// Gauge band of the current stability index.
    pub const fn stability_band(&self) -> StabilityBand {
        StabilityBand::from_index(self.metrics.stability_index)
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::BASELINE
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn baseline_levers_are_all_default() {
        let levers = Levers::BASELINE;
        assert!(levers.is_baseline());
        for lever in Lever::ALL {
            assert!(levers.is_default(lever), "{lever:?} should be default");
        }
        assert_eq!(Levers::default(), Levers::BASELINE);
    }

    #[test]
    fn single_non_default_lever_is_reported() {
        let levers = Levers {
            budget_modifier: -5,
            ..Levers::BASELINE
        };
        assert!(!levers.is_baseline());
        assert!(levers.is_default(Lever::Capacity));
        assert!(!levers.is_default(Lever::Budget));
        assert!(levers.is_default(Lever::Weather));

        let levers = Levers {
            transport_disruption: true,
            ..Levers::BASELINE
        };
        assert!(!levers.is_default(Lever::Transport));
    }

    #[test]
    fn lever_ranges_are_inclusive() {
        assert!(Levers::CAPACITY_RANGE.contains(&50));
        assert!(Levers::CAPACITY_RANGE.contains(&-50));
        assert!(!Levers::CAPACITY_RANGE.contains(&51));
        assert!(Levers::BUDGET_RANGE.contains(&30));
        assert!(Levers::BUDGET_RANGE.contains(&-30));
        assert!(!Levers::BUDGET_RANGE.contains(&-31));
    }

    #[test]
    fn risk_direction_follows_sign() {
        let mut state = SimulationState::BASELINE;
        assert_eq!(state.risk_direction(), RiskDirection::Unchanged);

        state.metrics.risk_change = dec!(18.0);
        assert_eq!(state.risk_direction(), RiskDirection::Rising);

        state.metrics.risk_change = dec!(-0.4);
        assert_eq!(state.risk_direction(), RiskDirection::Falling);
    }

    #[test]
    fn baseline_is_stable_band() {
        assert_eq!(SimulationState::BASELINE.stability_band(), StabilityBand::Stable);
    }

    #[test]
    fn snapshot_serializes_flat_camel_case() {
        let mut state = SimulationState::BASELINE;
        state.levers.weather_disruption = true;
        state.metrics.risk_change = dec!(18.0);
        state.metrics.system_stress = SystemStress::High;

        let value = serde_json::to_value(state).ok();
        assert!(value.is_some());
        let value = value.unwrap_or_default();

        let field = |name: &str| value.get(name).cloned();
        assert_eq!(field("capacityModifier"), Some(serde_json::json!(0)));
        assert_eq!(field("weatherDisruption"), Some(serde_json::json!(true)));
        assert_eq!(field("resultRiskChange"), Some(serde_json::json!(18.0)));
        assert_eq!(field("stabilityIndex"), Some(serde_json::json!(85)));
        assert_eq!(field("systemStress"), Some(serde_json::json!("high")));
        assert!(value.get("levers").is_none());
    }

    #[test]
    fn snapshot_deserializes_from_dashboard_shape() {
        let json = r#"{
            "capacityModifier": 50,
            "budgetModifier": 0,
            "weatherDisruption": false,
            "transportDisruption": false,
            "resultRiskChange": -25.0,
            "stabilityIndex": 48,
            "systemStress": "high",
            "affectedSchools": 45,
            "projectedShortages": 0
        }"#;
        let state: Result<SimulationState, _> = serde_json::from_str(json);
        assert!(state.is_ok());
        let state = state.unwrap_or_default();
        assert_eq!(state.levers.capacity_modifier, 50);
        assert_eq!(state.metrics.risk_change, dec!(-25));
        assert_eq!(state.metrics.system_stress, SystemStress::High);
        assert_eq!(state.risk_direction(), RiskDirection::Falling);
    }
}
