//! Catch probability formula.
//!
//! # Formula
//!
//! ```text
//! current_hp = MAX_HP * hp_percentage / 100
//! x = ((3 * MAX_HP - 2 * current_hp) * base_rate * ball / (3 * MAX_HP)) * status
//!
//! x > 255  -> 100%
//! x <= 0   -> 0%
//! y = 65536 / sqrt(sqrt(255 / x))
//! probability = (y / 65536)^4 * 100
//! ```
//!
//! A guaranteed device skips the formula entirely.

use crate::config::CatchConfig;
use crate::env::TablesOracle;

use super::{CaptureDevice, CatchAttempt, DeviceMultiplier};

/// How the final probability was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CatchOutcome {
    /// No creature selected.
    NoTarget,
    /// The device always captures.
    Guaranteed,
    /// Catch value exceeded the representable range.
    Saturated,
    /// Catch value was zero or negative.
    Impossible,
    /// Regular shake-check probability.
    Chance,
}

/// Intermediate values of one calculation, for display and debugging.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatchBreakdown {
    /// Resolved device rule; `None` without a target.
    pub device: Option<CaptureDevice>,
    pub ball_multiplier: f64,
    pub status_multiplier: f64,
    /// Catch value `x`; `None` when the formula was skipped.
    pub catch_value: Option<f64>,
    pub outcome: CatchOutcome,
    /// Final probability in percent, within `[0, 100]`.
    pub probability: f64,
}

impl CatchBreakdown {
    fn no_target() -> Self {
        Self {
            device: None,
            ball_multiplier: CatchConfig::DEFAULT_MULTIPLIER,
            status_multiplier: CatchConfig::DEFAULT_MULTIPLIER,
            catch_value: None,
            outcome: CatchOutcome::NoTarget,
            probability: 0.0,
        }
    }
}

/// Probability in percent that a single throw captures the target.
///
/// Never fails: a missing target yields 0 and unknown table names use the
/// neutral multiplier. The result is always within `[0, 100]`.
pub fn compute_catch_probability(
    attempt: &CatchAttempt,
    tables: &(impl TablesOracle + ?Sized),
) -> f64 {
    explain_catch(attempt, tables).probability
}

/// Runs the calculation and returns every intermediate value.
pub fn explain_catch(
    attempt: &CatchAttempt,
    tables: &(impl TablesOracle + ?Sized),
) -> CatchBreakdown {
    let Some(target) = attempt.target.as_ref() else {
        return CatchBreakdown::no_target();
    };
    let encounter = &attempt.encounter;

    let device = CaptureDevice::from_encounter(encounter, target.base_catch_rate, tables);
    let ball = device.resolve();
    let status_multiplier = tables
        .status_multiplier(&encounter.status_condition)
        .unwrap_or(CatchConfig::DEFAULT_MULTIPLIER);

    let factor = match ball {
        DeviceMultiplier::Guaranteed => {
            return CatchBreakdown {
                device: Some(device),
                ball_multiplier: ball.value(),
                status_multiplier,
                catch_value: None,
                outcome: CatchOutcome::Guaranteed,
                probability: 100.0,
            };
        }
        DeviceMultiplier::Factor(factor) => factor,
    };

    let x = catch_value(
        encounter.hp_percentage,
        target.base_catch_rate,
        factor,
        status_multiplier,
    );
    let outcome = if x > CatchConfig::CATCH_VALUE_CAP {
        CatchOutcome::Saturated
    } else if x.is_nan() || x <= 0.0 {
        CatchOutcome::Impossible
    } else {
        CatchOutcome::Chance
    };

    CatchBreakdown {
        device: Some(device),
        ball_multiplier: factor,
        status_multiplier,
        catch_value: Some(x),
        outcome,
        probability: probability_from_catch_value(x),
    }
}

/// Modified catch value `x` before the shake check.
pub fn catch_value(
    hp_percentage: f64,
    base_catch_rate: u32,
    ball_multiplier: f64,
    status_multiplier: f64,
) -> f64 {
    let max_hp = CatchConfig::MAX_HP;
    let current_hp = max_hp * (hp_percentage / 100.0);

    ((max_hp * 3.0 - current_hp * 2.0) * base_catch_rate as f64 * ball_multiplier
        / (max_hp * 3.0))
        * status_multiplier
}

/// Converts a catch value into a percentage in `[0, 100]`.
pub fn probability_from_catch_value(x: f64) -> f64 {
    if x > CatchConfig::CATCH_VALUE_CAP {
        return 100.0;
    }
    if x.is_nan() || x <= 0.0 {
        return 0.0;
    }

    let scale = CatchConfig::FIXED_POINT_SCALE;
    let y = scale / (CatchConfig::CATCH_VALUE_CAP / x).sqrt().sqrt();
    let rate = (y / scale).powi(4) * 100.0;

    rate.min(100.0)
}
