//! Document-wide paragraph thresholds.

use serde::Serialize;

use super::AnalyzedLine;
use crate::error::{Error, Result};

/// Margin added on top of the mean deltas.
pub const DEFAULT_EPSILON: f64 = 0.01;

/// Cutoffs above which a line's deltas mark a new paragraph.
///
/// Both cutoffs are derived from the document's own mean line deltas, so a
/// document with loose line spacing needs a proportionally larger gap to
/// register a paragraph break.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    /// Arithmetic mean of all vertical deltas
    pub mean_vertical_delta: f64,
    /// Arithmetic mean of all horizontal deltas
    pub mean_horizontal_delta: f64,
    /// `|mean_vertical_delta| + epsilon`
    pub vertical: f64,
    /// `|mean_horizontal_delta| + epsilon`
    pub indent: f64,
    /// Margin used for both cutoffs
    pub epsilon: f64,
}

impl Thresholds {
    /// Calibrate thresholds over the analyzed lines of one document.
    ///
    /// Fails with [`Error::EmptyDocument`] when there are no lines.
    pub fn calibrate(lines: &[AnalyzedLine], epsilon: f64) -> Result<Self> {
        if lines.is_empty() {
            return Err(Error::EmptyDocument);
        }

        let mean_vertical_delta = mean(lines.iter().map(|l| l.vertical_delta), lines.len());
        let mean_horizontal_delta = mean(lines.iter().map(|l| l.horizontal_delta), lines.len());

        Ok(Self {
            mean_vertical_delta,
            mean_horizontal_delta,
            vertical: mean_vertical_delta.abs() + epsilon,
            indent: mean_horizontal_delta.abs() + epsilon,
            epsilon,
        })
    }
}

impl std::fmt::Display for Thresholds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "vertical threshold: {} (mean {}), indent threshold: {} (mean {}), epsilon: {}",
            self.vertical,
            self.mean_vertical_delta,
            self.indent,
            self.mean_horizontal_delta,
            self.epsilon
        )
    }
}

/// Correctly rounded arithmetic mean.
///
/// The sum is carried as an unevaluated pair `hi + lo` and the division is
/// corrected by its exact remainder, so the result does not depend on
/// summation order.
fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    let (hi, lo) = values.fold((0.0f64, 0.0f64), |(hi, lo), value| {
        let (sum, err) = two_sum(hi, value);
        two_sum(sum, err + lo)
    });

    let n = count as f64;
    let quotient = hi / n;
    let remainder = (-quotient).mul_add(n, hi) + lo;
    quotient + remainder / n
}

/// Sum of two floats with the exact rounding error.
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let sum = a + b;
    let b_part = sum - a;
    let err = (a - (sum - b_part)) + (b - b_part);
    (sum, err)
}
