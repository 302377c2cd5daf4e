//! Human-readable scenario analysis text.
//!
//! Composes the "Scenario Analysis" panel from a snapshot: one line per lever
//! that is away from its default, then a net-impact line. When every lever is
//! at its default a single prompt line is returned instead.

use hungerwatch_types::{Lever, RiskDirection, SimulationState};

/// Text shown when no lever has been moved.
pub const IDLE_PROMPT: &str =
    "Adjust the controls to model a scenario. The system will recalculate risk metrics in real-time.";

/// Build the analysis lines for a snapshot.
pub fn summarize(state: &SimulationState) -> Vec<String> {
    let levers = &state.levers;
    if levers.is_baseline() {
        return vec![IDLE_PROMPT.to_owned()];
    }

    let mut lines = Vec::with_capacity(Lever::ALL.len().saturating_add(1));
    for lever in Lever::ALL {
        if levers.is_default(lever) {
            continue;
        }
        lines.push(lever_line(state, lever));
    }
    lines.push(net_impact_line(state));
    lines
}

fn lever_line(state: &SimulationState, lever: Lever) -> String {
    let levers = &state.levers;
    match lever {
        Lever::Capacity => {
            let value = levers.capacity_modifier;
            let (change, effect) = if value > 0 {
                ("increase", "reduces")
            } else {
                ("decrease", "increases")
            };
            format!(
                "Capacity {change} of {}% {effect} system risk.",
                value.unsigned_abs()
            )
        }
        Lever::Budget => {
            let value = levers.budget_modifier;
            let (change, effect) = if value > 0 {
                ("increase", "improves")
            } else {
                ("cut", "worsens")
            };
            format!(
                "Budget {change} of {}% {effect} allocation flexibility.",
                value.unsigned_abs()
            )
        }
        Lever::Weather => "Weather disruption adds +18% to overall risk due to attendance \
                           drops and supply delays."
            .to_owned(),
        Lever::Transport => {
            "Transport disruption adds +12% to risk from supply chain interruptions.".to_owned()
        }
    }
}

fn net_impact_line(state: &SimulationState) -> String {
    let sign = match state.risk_direction() {
        RiskDirection::Rising => "+",
        RiskDirection::Falling | RiskDirection::Unchanged => "",
    };
    format!(
        "Net impact: {sign}{}% risk change affecting {} schools.",
        state.metrics.risk_change, state.metrics.affected_schools
    )
}
