//! Lever domain checks and the input policy applied by the store.
//!
//! The percentage levers have inclusive domains (`-50..=50` for capacity,
//! `-30..=30` for budget). Input controls are expected to enforce them; the
//! store only applies its configured [`LeverPolicy`]:
//!
//! - [`LeverPolicy::Lenient`] passes values through unchanged and logs a
//!   warning when they fall outside the domain.
//! - [`LeverPolicy::Clamp`] pins values to the nearest bound.
//!
//! The `validate_*` functions are for input controls that want to reject bad
//! values up front, such as the scenario config loader.

use core::ops::RangeInclusive;

use hungerwatch_types::{Lever, LeverPolicy, Levers};
use tracing::warn;

/// A percentage lever value outside its domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeverError {
    /// Capacity modifier outside `-50..=50`.
    #[error("capacity modifier {value}% is outside {min}..={max}")]
    CapacityOutOfRange {
        /// The rejected value.
        value: i32,
        /// Lower bound (inclusive).
        min: i32,
        /// Upper bound (inclusive).
        max: i32,
    },

    /// Budget modifier outside `-30..=30`.
    #[error("budget modifier {value}% is outside {min}..={max}")]
    BudgetOutOfRange {
        /// The rejected value.
        value: i32,
        /// Lower bound (inclusive).
        min: i32,
        /// Upper bound (inclusive).
        max: i32,
    },
}

/// Check a capacity value against its domain.
pub fn validate_capacity(value: i32) -> Result<i32, LeverError> {
    let range = Levers::CAPACITY_RANGE;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(LeverError::CapacityOutOfRange {
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Check a budget value against its domain.
pub fn validate_budget(value: i32) -> Result<i32, LeverError> {
    let range = Levers::BUDGET_RANGE;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(LeverError::BudgetOutOfRange {
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Check both percentage levers of a full lever set.
pub fn validate(levers: &Levers) -> Result<(), LeverError> {
    validate_capacity(levers.capacity_modifier)?;
    validate_budget(levers.budget_modifier)?;
    Ok(())
}

/// Apply the store policy to an incoming capacity value.
pub fn admit_capacity(policy: LeverPolicy, value: i32) -> i32 {
    admit(policy, Lever::Capacity, Levers::CAPACITY_RANGE, value)
}

/// Apply the store policy to an incoming budget value.
pub fn admit_budget(policy: LeverPolicy, value: i32) -> i32 {
    admit(policy, Lever::Budget, Levers::BUDGET_RANGE, value)
}

fn admit(policy: LeverPolicy, lever: Lever, range: RangeInclusive<i32>, value: i32) -> i32 {
    if range.contains(&value) {
        return value;
    }
    let (min, max) = range.into_inner();
    match policy {
        LeverPolicy::Lenient => {
            warn!(?lever, value, min, max, "Lever value outside its domain, applying as-is");
            value
        }
        LeverPolicy::Clamp => value.clamp(min, max),
    }
}
