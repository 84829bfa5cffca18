// File: crates/chart-threshold/src/classify.rs
// Summary: Band classifier; tags points with their band and splits continuous shapes into masked copies.

use log::{trace, warn};

use crate::band::{Band, ThresholdSet};
use crate::config::Config;
use crate::error::{Result, ThresholdError};
use crate::mask::MaskSet;

/// Kind of shape the host is drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Line,
    Bar,
    Area,
}

impl ShapeKind {
    /// Lines, bars and areas are split with masks; points are tagged directly.
    pub fn is_continuous(self) -> bool { !matches!(self, ShapeKind::Point) }
}

/// Data attached to a draw event: the data value for points, a shape handle otherwise.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawPayload<S> {
    Value(f64),
    Shape(S),
}

/// Whether a copy is a fresh duplicate or the host's original element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOrigin {
    Clone,
    Original,
}

/// One rendered duplicate of a continuous shape, restricted to a single band.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeCopy<S> {
    pub shape: S,
    pub band: Band,
    pub class_name: String,
    pub mask_id: String,
    pub origin: CopyOrigin,
}

impl<S> ShapeCopy<S> {
    /// Value for the shape's `mask` attribute.
    pub fn mask_url(&self) -> String { format!("url(#{})", self.mask_id) }
}

/// Result of classifying one draw event.
#[derive(Clone, Debug, PartialEq)]
pub enum BandAssignment<S> {
    Point { band: Band, class_name: String },
    /// Copies in band order: above, interior 0.., below (the original element last).
    Copies(Vec<ShapeCopy<S>>),
}

impl<S> BandAssignment<S> {
    pub fn bands(&self) -> Vec<Band> {
        match self {
            BandAssignment::Point { band, .. } => vec![*band],
            BandAssignment::Copies(copies) => copies.iter().map(|c| c.band).collect(),
        }
    }
}

/// Band of a data value. First match wins, in this order:
/// at or above the first threshold, below the last one, then the first
/// interior threshold the value reaches. Values equal to a threshold land in
/// the band above it.
pub fn classify_value(value: f64, thresholds: &ThresholdSet) -> Band {
    if value >= thresholds.first() {
        return Band::Above;
    }
    if value < thresholds.last() {
        return Band::Below;
    }
    let t = thresholds.as_slice();
    for i in 1..t.len() {
        if value >= t[i] {
            return Band::Interior(i - 1);
        }
    }
    // Only NaN reaches here: it fails every comparison above.
    warn!("threshold classification of NaN value; treating as below");
    Band::Below
}

/// Classify a draw event against the masks built for this chart.
pub fn classify<S: Clone>(
    kind: ShapeKind,
    payload: DrawPayload<S>,
    config: &Config,
    masks: &MaskSet,
) -> Result<BandAssignment<S>> {
    match (kind.is_continuous(), payload) {
        (false, DrawPayload::Value(value)) => {
            let band = classify_value(value, config.thresholds());
            trace!("point {value} -> {band:?}");
            Ok(BandAssignment::Point { band, class_name: config.class_name(band) })
        }
        (true, DrawPayload::Shape(shape)) => Ok(BandAssignment::Copies(split_shape(shape, config, masks)?)),
        _ => Err(ThresholdError::PayloadMismatch { kind }),
    }
}

/// Duplicate `shape` once per band. All but the last copy are clones; the
/// "below" copy takes over the original element.
pub fn split_shape<S: Clone>(shape: S, config: &Config, masks: &MaskSet) -> Result<Vec<ShapeCopy<S>>> {
    let expected = config.thresholds().band_count();
    if masks.len() != expected {
        return Err(ThresholdError::MaskSetMismatch { expected, found: masks.len() });
    }

    let mut copies = Vec::with_capacity(expected);
    let (last, rest) = match masks.masks().split_last() {
        Some(split) => split,
        None => return Err(ThresholdError::MaskSetMismatch { expected, found: 0 }),
    };
    for mask in rest {
        copies.push(ShapeCopy {
            shape: shape.clone(),
            band: mask.band,
            class_name: config.class_name(mask.band),
            mask_id: mask.id.clone(),
            origin: CopyOrigin::Clone,
        });
    }
    copies.push(ShapeCopy {
        shape,
        band: last.band,
        class_name: config.class_name(last.band),
        mask_id: last.id.clone(),
        origin: CopyOrigin::Original,
    });
    trace!("split shape into {} masked copies", copies.len());
    Ok(copies)
}
