//! Threshold-and-limit transformation.
//!
//! Each value contributes only the amount by which it exceeds the threshold,
//! and the running total of contributions is capped at the limit. Once the
//! cap is reached every later contribution is zero.

use crate::debug_event;

/// The two invocation parameters, already range-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintApplier {
    threshold: f64,
    limit: f64,
}

impl ConstraintApplier {
    pub fn new(threshold: f64, limit: f64) -> Self {
        Self { threshold, limit }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Transform `values` in order. Pure; never fails.
    ///
    /// The total is accumulated in `f64`, so it equals the in-order sum of
    /// the outputs exactly. A clamp adds `limit - total` back onto `total`,
    /// and that pair of roundings can leave the total one ulp of `limit`
    /// above it (at most `2 * f64::EPSILON * limit`). Later outputs are then
    /// zero, and fixed-precision printing rounds the excess away.
    pub fn apply(&self, values: &[f64]) -> OutputSequence {
        let mut outputs = Vec::with_capacity(values.len());
        let mut total = 0.0_f64;

        for &value in values {
            let mut excess = (value - self.threshold).max(0.0);

            if total + excess > self.limit {
                let remaining = (self.limit - total).max(0.0);
                debug_event!("constraint", "clamped", "{excess} -> {remaining}");
                excess = remaining;
            }

            outputs.push(excess);
            total += excess;
        }

        OutputSequence { outputs, total }
    }
}

/// Per-value outputs followed by their running total.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSequence {
    outputs: Vec<f64>,
    total: f64,
}

impl OutputSequence {
    /// One entry per input value, same order.
    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of printed elements, including the trailing total.
    pub fn len(&self) -> usize {
        self.outputs.len() + 1
    }

    /// Never empty: the total is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Outputs followed by the total.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.outputs
            .iter()
            .copied()
            .chain(std::iter::once(self.total))
    }

    pub fn into_vec(self) -> Vec<f64> {
        let mut values = self.outputs;
        values.push(self.total);
        values
    }
}
