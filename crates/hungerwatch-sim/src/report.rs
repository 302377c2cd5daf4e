//! The JSON report printed after a scenario run.

use chrono::{DateTime, Utc};
use hungerwatch_core::config::ScenarioConfig;
use hungerwatch_core::{SimulationStore, narrative};
use hungerwatch_types::{LeverPolicy, RiskDirection, SessionId, SimulationState, StabilityBand};
use serde::Serialize;
use tracing::info;

/// Outcome of replaying one configured scenario.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    /// Scenario label from config.
    pub scenario: String,
    /// Session that produced the result.
    pub session_id: SessionId,
    /// When the run finished.
    pub generated_at: DateTime<Utc>,
    /// Lever policy the store applied.
    pub policy: LeverPolicy,
    /// Number of steps replayed.
    pub steps_applied: usize,
    /// Final snapshot.
    pub state: SimulationState,
    /// Sign of the final risk change.
    pub risk_direction: RiskDirection,
    /// Gauge band of the final stability index.
    pub stability_band: StabilityBand,
    /// Scenario analysis text.
    pub narrative: Vec<String>,
}

/// Replay the scenario on a fresh store and collect the report.
pub fn run_scenario(scenario: &ScenarioConfig, policy: LeverPolicy) -> ScenarioReport {
    let mut store = SimulationStore::with_policy(policy);
    info!(
        session = %store.session_id(),
        scenario = scenario.name,
        steps = scenario.steps.len(),
        ?policy,
        "Scenario started"
    );

    for (index, step) in scenario.steps.iter().enumerate() {
        let state = step.apply(&mut store);
        info!(
            step = index,
            ?step,
            risk_change = %state.metrics.risk_change,
            stress = %state.metrics.system_stress,
            stability = state.metrics.stability_index,
            "Step applied"
        );
    }

    let state = *store.state();
    ScenarioReport {
        scenario: scenario.name.clone(),
        session_id: store.session_id(),
        generated_at: Utc::now(),
        policy,
        steps_applied: scenario.steps.len(),
        state,
        risk_direction: state.risk_direction(),
        stability_band: state.stability_band(),
        narrative: narrative::summarize(&state),
    }
}
