// File: crates/chart-threshold/src/error.rs
// Summary: Error type shared by configuration, mask building and classification.

use thiserror::Error;

use crate::classify::ShapeKind;

pub type Result<T> = std::result::Result<T, ThresholdError>;

#[derive(Debug, Error)]
pub enum ThresholdError {
    #[error("at least one threshold is required")]
    EmptyThresholds,

    #[error("threshold #{index} is not a finite number ({value})")]
    NonFiniteThreshold { index: usize, value: f64 },

    /// Thresholds must run from the highest value to the lowest.
    #[error("threshold #{index} ({next}) is above its predecessor ({previous}); thresholds must be ordered highest first")]
    UnorderedThresholds { index: usize, previous: f64, next: f64 },

    #[error("mask padding must be a finite, non-negative number of pixels (got {0})")]
    InvalidMaskPadding(f64),

    #[error("invalid chart geometry: {0}")]
    InvalidGeometry(&'static str),

    #[error("malformed threshold options: {0}")]
    Options(#[from] serde_json::Error),

    #[error("draw event received before the chart was created")]
    DrawBeforeCreated,

    #[error("payload does not match shape kind {kind:?}")]
    PayloadMismatch { kind: ShapeKind },

    #[error("mask set holds {found} masks but the configuration defines {expected} bands")]
    MaskSetMismatch { expected: usize, found: usize },
}
