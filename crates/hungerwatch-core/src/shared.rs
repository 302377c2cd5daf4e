//! Thread-safe handle around a [`SimulationStore`].
//!
//! The whole read-modify-write of a mutation (lever update, recompute,
//! commit) runs while holding one lock, so concurrent writers never build on
//! stale levers and readers never see levers without their metrics.
//!
//! Clones share the same store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hungerwatch_types::{SessionId, SimulationState};

use crate::store::SimulationStore;

/// Cloneable, lock-guarded simulation store.
#[derive(Debug, Clone, Default)]
pub struct SharedSimulation {
    inner: Arc<Mutex<SimulationStore>>,
}

impl SharedSimulation {
    /// Wrap an existing store.
    pub fn new(store: SimulationStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> SimulationState {
        *self.lock().state()
    }

    /// Identifier of the wrapped session.
    pub fn session_id(&self) -> SessionId {
        self.lock().session_id()
    }

    /// Set the capacity modifier and return the committed snapshot.
    pub fn set_capacity(&self, percent: i32) -> SimulationState {
        *self.lock().set_capacity(percent)
    }

    /// Set the budget modifier and return the committed snapshot.
    pub fn set_budget(&self, percent: i32) -> SimulationState {
        *self.lock().set_budget(percent)
    }

    /// Flip the weather flag and return the committed snapshot.
    pub fn toggle_weather(&self) -> SimulationState {
        *self.lock().toggle_weather()
    }

    /// Flip the transport flag and return the committed snapshot.
    pub fn toggle_transport(&self) -> SimulationState {
        *self.lock().toggle_transport()
    }

    /// Restore the baseline and return it.
    pub fn reset(&self) -> SimulationState {
        *self.lock().reset()
    }

    /// Run several operations under a single lock acquisition.
    pub fn with_store<R>(&self, f: impl FnOnce(&mut SimulationStore) -> R) -> R {
        f(&mut self.lock())
    }

    // Commits are a single assignment, so a poisoned store is still consistent.
    fn lock(&self) -> MutexGuard<'_, SimulationStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
