use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Floor for the raw step so all-equal series never degenerate into a
/// zero step and a division by zero downstream.
const MIN_STEP: f64 = 1e-6;

/// Canonical step fractions the raw step snaps onto, keeping axis labels
/// on round, human-friendly numbers.
const CANONICAL_FRACTIONS: [f64; 6] = [0.1, 0.2, 0.25, 0.3, 0.5, 1.0];

/// Rounded value-axis specification derived from the raw data extrema.
///
/// `max` is always `step * tick_count`; the value-scale domain top is
/// `step * (tick_count - below_zero_ticks)` (see [`AxisSpec::domain_top`]),
/// so `max - min` is an exact multiple of `step` in both views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub tick_count: usize,
    pub step: f64,
    pub min: f64,
    pub max: f64,
    pub below_zero_ticks: usize,
}

impl AxisSpec {
    /// Upper bound of the value-scale domain.
    #[must_use]
    pub fn domain_top(self) -> f64 {
        self.step * (self.tick_count as f64 - self.below_zero_ticks as f64)
    }

    /// Label values drawn on the Y axis, lowest first (`tick_count + 1` entries).
    #[must_use]
    pub fn tick_values(self) -> Vec<f64> {
        (0..=self.tick_count)
            .map(|i| self.min + self.step * i as f64)
            .collect()
    }

    /// The step scaled down into `(0, 1]` by its power of ten, using the
    /// same exponent bump as the normalization that produced it.
    #[must_use]
    pub fn normalized_fraction(self) -> f64 {
        let mut exponent = trunc_toward_zero(self.step.log10());
        if self.step != 10f64.powi(exponent) {
            exponent += 1;
        }
        self.step / 10f64.powi(exponent)
    }
}

/// JavaScript-style truncation toward zero; non-finite inputs become 0.
fn trunc_toward_zero(value: f64) -> i32 {
    if value.is_finite() {
        value.trunc() as i32
    } else {
        0
    }
}

/// Computes the "nice axis" spec for a set of raw values.
///
/// The tick-count target comes from the natural-log magnitude of the data
/// extrema (the minimum's magnitude floored at 1 when it computes to 0),
/// plus 2. The raw step `(max - min_bound) / tick_count` is normalized by
/// its power of ten, with the exponent bumped by one when the step is not
/// already an exact power of ten, and snapped up into the nearest
/// canonical fraction. Negative minima are covered by whole negative
/// steps so the rounded lower bound never clips data.
pub fn nice_axis_spec(values: &[f64]) -> ChartResult<AxisSpec> {
    if values.is_empty() {
        return Err(ChartError::InvalidData(
            "axis spec requires at least one value".to_owned(),
        ));
    }

    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    for value in values {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "axis values must be finite".to_owned(),
            ));
        }
        max = max.max(*value);
        min = min.min(*value);
    }

    let mut min_bound = if min > 0.0 { 0.0 } else { min };

    let max_magnitude = trunc_toward_zero(max.ln());
    let mut min_magnitude = trunc_toward_zero(min.ln());
    if min_magnitude == 0 {
        min_magnitude = 1;
    }
    let tick_count = max_magnitude.max(min_magnitude).saturating_add(2).max(1) as usize;

    let raw_step = (max - min_bound) / tick_count as f64;
    let raw_step = if raw_step.is_finite() && raw_step > 0.0 {
        raw_step
    } else {
        MIN_STEP
    };

    let mut exponent = trunc_toward_zero(raw_step.log10());
    if raw_step != 10f64.powi(exponent) {
        exponent += 1;
    }
    // Match the reference normalization, which rounds the scaled-down step
    // to six decimals before comparing against the snap thresholds.
    let fraction = (raw_step / 10f64.powi(exponent) * 1e6).round() / 1e6;
    let snapped = CANONICAL_FRACTIONS
        .iter()
        .copied()
        .find(|candidate| fraction <= *candidate)
        .unwrap_or(1.0);
    let step = snapped * 10f64.powi(exponent);

    let mut below_zero_ticks = 0usize;
    if min < 0.0 {
        // Kept in f64: a clamped step under a large negative minimum can
        // need more whole steps than i32 holds.
        let whole_steps = (min / step).trunc().abs();
        let covering_steps = if min % step != 0.0 {
            whole_steps + 1.0
        } else {
            whole_steps
        };
        below_zero_ticks = covering_steps as usize;
        min_bound = -covering_steps * step;
    }

    Ok(AxisSpec {
        tick_count,
        step,
        min: min_bound,
        max: step * tick_count as f64,
        below_zero_ticks,
    })
}
