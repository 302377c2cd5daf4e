//! The risk model: a pure mapping from a lever set to derived metrics.
//!
//! # Formula
//!
//! ```text
//! risk_delta          = -(capacity * 0.5) - (budget * 0.4)
//!                       + 18 (weather) + 12 (transport)
//! stress              = |risk_delta|
//! risk_change         = round(risk_delta, 1 dp)
//! stability_index     = clamp(round(85 - stress * 1.5), 0, 100)
//! affected_schools    = min(50, floor(stress * 1.8))
//! projected_shortages = max(0, floor(risk_delta * 2.5))
//! ```
//!
//! | Stress magnitude | Level    |
//! |------------------|----------|
//! | > 25             | critical |
//! | > 15             | high     |
//! | > 8              | moderate |
//! | otherwise        | low      |
//!
//! # Numerics
//!
//! All arithmetic uses [`Decimal`], so the weights carry no binary floating
//! error and `.5` midpoints are exact. Rounding is half away from zero.
//! Shortage-days are floored from the exact product, so a delta such as
//! `12.8` yields `32`. A binary-float evaluation of the same formula lands
//! just below the integer (`31.999...`) and floors to `31` on a few hundred
//! in-domain lever sets; this model reports the exact value.
//! Operations saturate, which keeps [`recompute`] total even for lever values
//! far outside their domains.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use hungerwatch_types::{DerivedMetrics, Levers, SystemStress};

/// Risk points removed per percent of added capacity.
pub const CAPACITY_RISK_WEIGHT: Decimal = dec!(0.5);

/// Risk points removed per percent of added budget.
pub const BUDGET_RISK_WEIGHT: Decimal = dec!(0.4);

/// Fixed risk shock of a weather disruption.
pub const WEATHER_SHOCK: Decimal = dec!(18);

/// Fixed risk shock of a transport disruption.
pub const TRANSPORT_SHOCK: Decimal = dec!(12);

/// Stability index with zero stress.
pub const STABILITY_BASE: Decimal = dec!(85);

/// Stability points lost per point of stress.
pub const STABILITY_STRESS_WEIGHT: Decimal = dec!(1.5);

/// Schools affected per point of stress.
pub const AFFECTED_STRESS_WEIGHT: Decimal = dec!(1.8);

/// Upper bound on the affected-school estimate.
pub const MAX_AFFECTED_SCHOOLS: Decimal = dec!(50);

/// Shortage-days per point of positive net risk.
pub const SHORTAGE_RISK_WEIGHT: Decimal = dec!(2.5);

const CRITICAL_STRESS: Decimal = dec!(25);
const HIGH_STRESS: Decimal = dec!(15);
const MODERATE_STRESS: Decimal = dec!(8);
const STABILITY_MAX: Decimal = dec!(100);

const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Compute every derived metric from a lever set.
pub fn recompute(levers: &Levers) -> DerivedMetrics {
    let delta = risk_delta(levers);
    let stress = delta.abs();

    DerivedMetrics {
        risk_change: delta.round_dp_with_strategy(1, ROUNDING).normalize(),
        stability_index: stability_index(stress),
        system_stress: classify_stress(stress),
        affected_schools: affected_schools(stress),
        projected_shortages: projected_shortages(delta),
    }
}

/// Net change in modeled risk, before rounding.
///
/// Capacity and budget increases lower risk linearly; each active disruption
/// adds a fixed shock. There is no relief lever that offsets a disruption.
pub fn risk_delta(levers: &Levers) -> Decimal {
    let capacity = Decimal::from(levers.capacity_modifier).saturating_mul(CAPACITY_RISK_WEIGHT);
    let budget = Decimal::from(levers.budget_modifier).saturating_mul(BUDGET_RISK_WEIGHT);

    let mut delta = Decimal::ZERO.saturating_sub(capacity).saturating_sub(budget);
    if levers.weather_disruption {
        delta = delta.saturating_add(WEATHER_SHOCK);
    }
    if levers.transport_disruption {
        delta = delta.saturating_add(TRANSPORT_SHOCK);
    }
    delta
}

/// Map a stress magnitude to its category. Thresholds are strict.
pub fn classify_stress(stress: Decimal) -> SystemStress {
    if stress > CRITICAL_STRESS {
        SystemStress::Critical
    } else if stress > HIGH_STRESS {
        SystemStress::High
    } else if stress > MODERATE_STRESS {
        SystemStress::Moderate
    } else {
        SystemStress::Low
    }
}

fn stability_index(stress: Decimal) -> u8 {
    STABILITY_BASE
        .saturating_sub(stress.saturating_mul(STABILITY_STRESS_WEIGHT))
        .round_dp_with_strategy(0, ROUNDING)
        .clamp(Decimal::ZERO, STABILITY_MAX)
        .to_u8()
        .unwrap_or(0)
}

fn affected_schools(stress: Decimal) -> u32 {
    stress
        .saturating_mul(AFFECTED_STRESS_WEIGHT)
        .floor()
        .min(MAX_AFFECTED_SCHOOLS)
        .to_u32()
        .unwrap_or(0)
}

// Uses the signed delta: net risk reduction never yields shortages.
fn projected_shortages(delta: Decimal) -> u32 {
    let days = delta.saturating_mul(SHORTAGE_RISK_WEIGHT).floor();
    if days <= Decimal::ZERO {
        return 0;
    }
    days.to_u32().unwrap_or(u32::MAX)
}
