//! The simulation store: owned lever state with eager recompute.
//!
//! A [`SimulationStore`] holds one [`SimulationState`]. Each mutation builds
//! the next lever set, runs [`model::recompute`] on it, and commits levers and
//! metrics together in a single assignment. Derived metrics are cached on
//! write, so [`SimulationStore::state`] is a plain accessor.
//!
//! Stores are ordinary values. Create as many as needed (one per session,
//! one per test); nothing is shared between them. For access from several
//! threads wrap one in [`SharedSimulation`](crate::shared::SharedSimulation).

use hungerwatch_types::{LeverPolicy, Levers, SessionId, SimulationState};
use tracing::debug;

use crate::levers;
use crate::model;

/// Owned scenario state for one simulation session.
///
/// Cloning forks the scenario: the copy starts from the same levers and
/// metrics under a new [`SessionId`].
#[derive(Debug)]
pub struct SimulationStore {
    /// Identifier used in log fields.
    session_id: SessionId,
    /// How out-of-domain percentage levers are treated.
    policy: LeverPolicy,
    /// Current levers and the metrics derived from them.
    state: SimulationState,
}

impl SimulationStore {
    /// Create a store at the baseline with the lenient lever policy.
    pub fn new() -> Self {
        Self::with_policy(LeverPolicy::default())
    }

    /// Create a store at the baseline with an explicit lever policy.
    pub fn with_policy(policy: LeverPolicy) -> Self {
        Self {
            session_id: SessionId::new(),
            policy,
            state: SimulationState::BASELINE,
        }
    }

    /// Current snapshot.
    pub const fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Identifier of this session.
    pub const fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Lever policy this store applies.
    pub const fn policy(&self) -> LeverPolicy {
        self.policy
    }

    /// Set the capacity modifier (percent) and recompute.
    pub fn set_capacity(&mut self, percent: i32) -> &SimulationState {
        let levers = Levers {
            capacity_modifier: levers::admit_capacity(self.policy, percent),
            ..self.state.levers
        };
        self.commit(levers)
    }

    /// Set the budget modifier (percent) and recompute.
    pub fn set_budget(&mut self, percent: i32) -> &SimulationState {
        let levers = Levers {
            budget_modifier: levers::admit_budget(self.policy, percent),
            ..self.state.levers
        };
        self.commit(levers)
    }

    /// Flip the weather disruption flag and recompute.
    pub fn toggle_weather(&mut self) -> &SimulationState {
        let levers = Levers {
            weather_disruption: !self.state.levers.weather_disruption,
            ..self.state.levers
        };
        self.commit(levers)
    }

    /// Flip the transport disruption flag and recompute.
    pub fn toggle_transport(&mut self) -> &SimulationState {
        let levers = Levers {
            transport_disruption: !self.state.levers.transport_disruption,
            ..self.state.levers
        };
        self.commit(levers)
    }

    /// Restore the baseline constant. Does not run the model.
    pub fn reset(&mut self) -> &SimulationState {
        self.state = SimulationState::BASELINE;
        debug!(session = %self.session_id, "Scenario reset to baseline");
        &self.state
    }

    fn commit(&mut self, levers: Levers) -> &SimulationState {
        let metrics = model::recompute(&levers);
        self.state = SimulationState { levers, metrics };
        debug!(
            session = %self.session_id,
            capacity = levers.capacity_modifier,
            budget = levers.budget_modifier,
            weather = levers.weather_disruption,
            transport = levers.transport_disruption,
            risk_change = %metrics.risk_change,
            stress = %metrics.system_stress,
            stability = metrics.stability_index,
            "Scenario recomputed"
        );
        &self.state
    }
}

impl Clone for SimulationStore {
    fn clone(&self) -> Self {
        Self {
            session_id: SessionId::new(),
            policy: self.policy,
            state: self.state,
        }
    }
}

impl Default for SimulationStore {
    fn default() -> Self {
        Self::new()
    }
}
