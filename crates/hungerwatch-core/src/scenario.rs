//! Scripted scenarios: ordered lever operations replayed against a store.
//!
//! A [`ScenarioStep`] is one store operation in data form, so a scenario can
//! be written in the config file and replayed deterministically. The store
//! keeps no hidden history, so replaying the same steps after a reset always
//! lands on the same state.
//!
//! In YAML, steps are tagged by `action`:
//!
//! ```yaml
//! steps:
//!   - action: set_capacity
//!     percent: -20
//!   - action: toggle_weather
//! ```

use hungerwatch_types::SimulationState;
use serde::{Deserialize, Serialize};

use crate::levers::{self, LeverError};
use crate::store::SimulationStore;

/// One store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// [`SimulationStore::set_capacity`].
    SetCapacity {
        /// Capacity change in percent.
        percent: i32,
    },
    /// [`SimulationStore::set_budget`].
    SetBudget {
        /// Budget change in percent.
        percent: i32,
    },
    /// [`SimulationStore::toggle_weather`].
    ToggleWeather,
    /// [`SimulationStore::toggle_transport`].
    ToggleTransport,
    /// [`SimulationStore::reset`].
    Reset,
}

impl ScenarioStep {
    /// Apply this step to a store and return the committed snapshot.
    pub fn apply(self, store: &mut SimulationStore) -> &SimulationState {
        match self {
            Self::SetCapacity { percent } => store.set_capacity(percent),
            Self::SetBudget { percent } => store.set_budget(percent),
            Self::ToggleWeather => store.toggle_weather(),
            Self::ToggleTransport => store.toggle_transport(),
            Self::Reset => store.reset(),
        }
    }

    /// Check any percentage carried by this step against its lever domain.
    pub fn validate(self) -> Result<(), LeverError> {
        match self {
            Self::SetCapacity { percent } => levers::validate_capacity(percent).map(drop),
            Self::SetBudget { percent } => levers::validate_budget(percent).map(drop),
            Self::ToggleWeather | Self::ToggleTransport | Self::Reset => Ok(()),
        }
    }
}

/// Apply every step in order and return the final snapshot.
pub fn replay(store: &mut SimulationStore, steps: &[ScenarioStep]) -> SimulationState {
    for step in steps {
        step.apply(store);
    }
    *store.state()
}

#[cfg(test)]
mod tests {
    use hungerwatch_types::SystemStress;
    use rust_decimal_macros::dec;

    use super::*;

    fn monsoon_with_cuts() -> Vec<ScenarioStep> {
        vec![
            ScenarioStep::SetCapacity { percent: -20 },
            ScenarioStep::SetBudget { percent: -10 },
            ScenarioStep::ToggleWeather,
        ]
    }

    #[test]
    fn replay_applies_steps_in_order() {
        let mut store = SimulationStore::new();
        let state = replay(&mut store, &monsoon_with_cuts());
        // 10 + 4 + 18 = 32
        assert_eq!(state.metrics.risk_change, dec!(32));
        assert_eq!(state.metrics.system_stress, SystemStress::Critical);
        assert_eq!(state.metrics.stability_index, 37);
        assert_eq!(state.metrics.projected_shortages, 80);
    }

    #[test]
    fn reset_step_clears_earlier_steps() {
        let mut store = SimulationStore::new();
        let mut steps = monsoon_with_cuts();
        steps.push(ScenarioStep::Reset);
        steps.push(ScenarioStep::ToggleTransport);
        let state = replay(&mut store, &steps);
        assert_eq!(state.levers.capacity_modifier, 0);
        assert!(!state.levers.weather_disruption);
        assert!(state.levers.transport_disruption);
        assert_eq!(state.metrics.risk_change, dec!(12));
    }

    #[test]
    fn validate_rejects_out_of_domain_percentages() {
        assert!(ScenarioStep::SetCapacity { percent: 50 }.validate().is_ok());
        assert!(ScenarioStep::SetCapacity { percent: 51 }.validate().is_err());
        assert!(ScenarioStep::SetBudget { percent: -31 }.validate().is_err());
        assert!(ScenarioStep::ToggleWeather.validate().is_ok());
    }

    #[test]
    fn steps_deserialize_from_tagged_json() {
        let json = r#"[
            {"action": "set_capacity", "percent": 15},
            {"action": "toggle_transport"},
            {"action": "reset"}
        ]"#;
        let steps: Result<Vec<ScenarioStep>, _> = serde_json::from_str(json);
        assert_eq!(
            steps.ok(),
            Some(vec![
                ScenarioStep::SetCapacity { percent: 15 },
                ScenarioStep::ToggleTransport,
                ScenarioStep::Reset,
            ])
        );
    }
}
