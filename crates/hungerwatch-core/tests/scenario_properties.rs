//! Integration tests for the simulation store's observable properties.
//!
//! These drive the public API only: build a store, move levers, and check
//! the committed snapshot against the model formulas.

#![allow(clippy::unwrap_used)]

use hungerwatch_core::{ScenarioStep, SimulationStore, recompute, replay};
use hungerwatch_types::{Lever, Levers, RiskDirection, SimulationState, SystemStress};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn flags_off(capacity: i32, budget: i32) -> Levers {
    Levers {
        capacity_modifier: capacity,
        budget_modifier: budget,
        weather_disruption: false,
        transport_disruption: false,
    }
}

#[test]
fn zero_levers_recompute_to_the_baseline_constant() {
    let metrics = recompute(&Levers::BASELINE);
    assert_eq!(metrics.risk_change, Decimal::ZERO);
    assert_eq!(metrics.stability_index, 85);
    assert_eq!(metrics.system_stress, SystemStress::Low);
    assert_eq!(metrics.affected_schools, 0);
    assert_eq!(metrics.projected_shortages, 0);
    assert_eq!(
        SimulationState {
            levers: Levers::BASELINE,
            metrics
        },
        SimulationState::BASELINE
    );
}

#[test]
fn risk_change_is_linear_over_the_whole_domain() {
    for capacity in Levers::CAPACITY_RANGE {
        for budget in Levers::BUDGET_RANGE {
            let metrics = recompute(&flags_off(capacity, budget));
            // -(c * 0.5) - (b * 0.4) == (-5c - 4b) / 10, exactly.
            let tenths = i64::from(capacity) * -5 - i64::from(budget) * 4;
            assert_eq!(
                metrics.risk_change,
                Decimal::new(tenths, 1),
                "capacity {capacity}, budget {budget}"
            );
        }
    }
}

#[test]
fn positive_levers_lower_risk() {
    for capacity in 1..=50 {
        let state = *SimulationStore::new().set_capacity(capacity);
        assert_eq!(state.risk_direction(), RiskDirection::Falling);
    }
    for budget in 1..=30 {
        let state = *SimulationStore::new().set_budget(budget);
        assert_eq!(state.risk_direction(), RiskDirection::Falling);
    }
}

#[test]
fn weather_disruption_alone() {
    let mut store = SimulationStore::new();
    let state = *store.toggle_weather();
    assert_eq!(state.metrics.risk_change, dec!(18.0));
    assert_eq!(state.metrics.system_stress, SystemStress::High);
    assert_eq!(state.metrics.stability_index, 58);
    assert_eq!(state.metrics.affected_schools, 32);
    assert_eq!(state.metrics.projected_shortages, 45);
}

#[test]
fn both_disruptions() {
    let mut store = SimulationStore::new();
    store.toggle_weather();
    let state = *store.toggle_transport();
    assert_eq!(state.metrics.risk_change, dec!(30));
    assert_eq!(state.metrics.system_stress, SystemStress::Critical);
    assert_eq!(state.metrics.stability_index, 40);
    assert_eq!(state.metrics.affected_schools, 50);
}

#[test]
fn full_capacity_boost_has_no_shortages_but_high_stress() {
    let mut store = SimulationStore::new();
    let state = *store.set_capacity(50);
    assert_eq!(state.metrics.risk_change, dec!(-25));
    assert_eq!(state.metrics.projected_shortages, 0);
    assert_eq!(state.metrics.system_stress, SystemStress::High);
    assert_eq!(state.metrics.stability_index, 48);
    assert_eq!(state.metrics.affected_schools, 45);
}

#[test]
fn reset_is_exact_and_idempotent_from_any_state() {
    let scripts: [&[ScenarioStep]; 3] = [
        &[ScenarioStep::ToggleWeather],
        &[
            ScenarioStep::SetCapacity { percent: -50 },
            ScenarioStep::SetBudget { percent: -30 },
            ScenarioStep::ToggleTransport,
        ],
        &[ScenarioStep::SetBudget { percent: 999 }],
    ];
    for script in scripts {
        let mut store = SimulationStore::new();
        replay(&mut store, script);
        let once = *store.reset();
        let twice = *store.reset();
        assert_eq!(once, SimulationState::BASELINE);
        assert_eq!(twice, once);
        assert!(once.levers.is_baseline());
    }
}

#[test]
fn replay_after_reset_reproduces_the_same_state() {
    let steps = [
        ScenarioStep::SetCapacity { percent: 17 },
        ScenarioStep::ToggleTransport,
        ScenarioStep::SetBudget { percent: -23 },
        ScenarioStep::ToggleWeather,
        ScenarioStep::ToggleTransport,
        ScenarioStep::SetCapacity { percent: -3 },
    ];
    let mut store = SimulationStore::new();
    let first = replay(&mut store, &steps);
    store.reset();
    let second = replay(&mut store, &steps);
    assert_eq!(first, second);

    let fresh = replay(&mut SimulationStore::new(), &steps);
    assert_eq!(first, fresh);
}

#[test]
fn derived_metrics_always_match_the_levers() {
    let mut store = SimulationStore::new();
    for percent in (-50..=50).step_by(7) {
        store.set_capacity(percent);
        store.toggle_weather();
        store.set_budget(percent / 2);
        let state = *store.state();
        assert_eq!(state.metrics, recompute(&state.levers));
    }
}

#[test]
fn lever_defaults_are_queryable_for_narratives() {
    let mut store = SimulationStore::new();
    store.set_budget(-5);
    let levers = store.state().levers;
    let moved: Vec<Lever> = Lever::ALL
        .into_iter()
        .filter(|lever| !levers.is_default(*lever))
        .collect();
    assert_eq!(moved, vec![Lever::Budget]);
    assert_eq!(store.state().risk_direction(), RiskDirection::Rising);
}
