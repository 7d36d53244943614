//! Line-oriented reader for validated input values.
//!
//! Each non-blank line must hold one decimal value inside the configured
//! bounds with no more fractional digits than allowed. The first bad line
//! aborts the read; nothing is returned for a partially valid stream.

use std::io::BufRead;

use crate::config::Bounds;
use crate::debug_event;
use crate::error::{ComputeError, ComputeResult};

/// Reads and validates values against immutable [`Bounds`].
#[derive(Debug, Clone, Copy)]
pub struct InputReader {
    bounds: Bounds,
}

impl InputReader {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// Consume `reader` to end-of-stream and return every accepted value.
    ///
    /// Blank lines are skipped. Line numbers in errors are 1-based and count
    /// blank lines too.
    pub fn read_values<R: BufRead>(&self, reader: R) -> ComputeResult<Vec<f64>> {
        let mut values = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line?;
            let token = line.trim();
            if token.is_empty() {
                continue;
            }

            let value = self.parse_value(line_number, token)?;

            if values.len() >= self.bounds.max_inputs {
                return Err(ComputeError::InputCount {
                    line: line_number,
                    max: self.bounds.max_inputs,
                });
            }
            values.push(value);
        }

        debug_event!("input", "accepted", "{} values", values.len());
        Ok(values)
    }

    /// Parse and validate a single trimmed token.
    pub fn parse_value(&self, line: usize, token: &str) -> ComputeResult<f64> {
        let value: f64 = token.parse().map_err(|_| ComputeError::InputParse {
            line,
            token: token.to_string(),
        })?;

        if !self.bounds.contains(value) {
            return Err(ComputeError::InputRange {
                line,
                value,
                min: self.bounds.min_value,
                max: self.bounds.max_value,
            });
        }

        let digits = fractional_digits(token).ok_or_else(|| ComputeError::InputParse {
            line,
            token: token.to_string(),
        })?;
        if digits > self.bounds.decimal_places {
            return Err(ComputeError::InputPrecision {
                line,
                token: token.to_string(),
                max_places: self.bounds.decimal_places,
            });
        }

        tracing::trace!(line, value, "value accepted");
        Ok(value)
    }
}

/// Number of fractional digits a literal token denotes.
///
/// Counts the digits written after the first `.` and shifts by the
/// exponent, floored at zero: `10.` has none, `10.00` has two, `1.25e1`
/// has one and `1.5e-3` has four. Returns `None` when the exponent is not
/// an integer that fits in `i64`.
pub fn fractional_digits(token: &str) -> Option<usize> {
    let (mantissa, exponent) = match token.find(['e', 'E']) {
        Some(at) => (&token[..at], token[at + 1..].parse::<i64>().ok()?),
        None => (token, 0),
    };
    let written = mantissa
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len());
    let shifted = i64::try_from(written).ok()?.saturating_sub(exponent);
    usize::try_from(shifted.max(0)).ok()
}
