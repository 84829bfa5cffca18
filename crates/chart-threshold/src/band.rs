// File: crates/chart-threshold/src/band.rs
// Summary: Validated threshold sequence and the bands it derives.

use crate::error::{Result, ThresholdError};

/// Ordered threshold values, highest ("above") first.
/// Contract: non-empty, finite, non-increasing.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdSet {
    values: Vec<f64>,
}

impl ThresholdSet {
    /// Validate and wrap a sequence of thresholds.
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self> {
        let values = values.into();
        if values.is_empty() {
            return Err(ThresholdError::EmptyThresholds);
        }
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ThresholdError::NonFiniteThreshold { index, value });
            }
        }
        for index in 1..values.len() {
            let (previous, next) = (values[index - 1], values[index]);
            if next > previous {
                return Err(ThresholdError::UnorderedThresholds { index, previous, next });
            }
        }
        Ok(Self { values })
    }

    /// A single scalar threshold, normalized into a one-element set.
    pub fn single(value: f64) -> Result<Self> { Self::new(vec![value]) }

    pub fn as_slice(&self) -> &[f64] { &self.values }
    pub fn len(&self) -> usize { self.values.len() }

    /// Always false for a validated set.
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Highest threshold (boundary of the "above" band).
    pub fn first(&self) -> f64 { self.values[0] }
    /// Lowest threshold (boundary of the "below" band).
    pub fn last(&self) -> f64 { self.values[self.values.len() - 1] }

    /// Number of bands: one more than the number of thresholds.
    pub fn band_count(&self) -> usize { self.values.len() + 1 }

    /// Bands in drawing order: above, interior 0.., below.
    pub fn bands(&self) -> impl Iterator<Item = Band> + '_ {
        std::iter::once(Band::Above)
            .chain((0..self.values.len() - 1).map(Band::Interior))
            .chain(std::iter::once(Band::Below))
    }
}

impl Default for ThresholdSet {
    /// A single threshold at zero.
    fn default() -> Self { Self { values: vec![crate::config::DEFAULT_THRESHOLD] } }
}

/// One contiguous region of the value range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    /// At or above the first threshold.
    Above,
    /// Below thresholds[k] and at or above thresholds[k + 1].
    Interior(usize),
    /// Strictly below the last threshold.
    Below,
}

impl Band {
    /// Position of the band counted from the top, given the number of thresholds.
    /// Above is 0, `Interior(k)` is `k + 1`, Below is `threshold_count`.
    pub fn ordinal(self, threshold_count: usize) -> usize {
        match self {
            Band::Above => 0,
            Band::Interior(k) => k + 1,
            Band::Below => threshold_count,
        }
    }

    pub fn is_interior(self) -> bool { matches!(self, Band::Interior(_)) }
}
