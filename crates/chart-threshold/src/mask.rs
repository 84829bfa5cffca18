// File: crates/chart-threshold/src/mask.rs
// Summary: Mask builder; projects thresholds into pixel rows and emits one reveal mask per band.

use log::debug;

use crate::band::Band;
use crate::config::Config;
use crate::error::{Result, ThresholdError};
use crate::geometry::{ChartGeometry, Rect};

/// Fill of the reveal rectangle; white means fully visible under an SVG luminance mask.
pub const REVEAL_FILL: &str = "white";

/// One mask resource: the mask element's own bounds plus the rectangle it reveals.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    pub id: String,
    pub band: Band,
    /// Bounds of the mask element itself.
    pub bounds: Rect,
    /// The only visible region; encodes the band's pixel span.
    pub reveal: Rect,
}

/// All masks for one chart render, in band order (above, interior 0.., below).
#[derive(Clone, Debug, PartialEq)]
pub struct MaskSet {
    masks: Vec<Mask>,
    projected: Vec<f64>,
}

impl MaskSet {
    pub fn masks(&self) -> &[Mask] { &self.masks }
    pub fn len(&self) -> usize { self.masks.len() }
    pub fn is_empty(&self) -> bool { self.masks.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Mask> { self.masks.iter() }

    /// Projected pixel row of every threshold, in threshold order.
    pub fn projected_rows(&self) -> &[f64] { &self.projected }

    pub fn get(&self, band: Band) -> Option<&Mask> {
        self.masks.iter().find(|m| m.band == band)
    }
}

impl<'a> IntoIterator for &'a MaskSet {
    type Item = &'a Mask;
    type IntoIter = std::slice::Iter<'a, Mask>;
    fn into_iter(self) -> Self::IntoIter { self.masks.iter() }
}

/// Build one mask per band for `geometry`. Pure: equal inputs give equal masks.
///
/// Thresholds are expected to lie within the axis range. One that projects
/// past the padded edge yields a negative reveal height, which SVG rejects.
pub fn build(geometry: &ChartGeometry<'_>, config: &Config) -> Result<MaskSet> {
    geometry.validate()?;
    let thresholds = config.thresholds().as_slice();
    let pad = config.mask_padding();
    let (width, height) = (geometry.width, geometry.height);

    let projected: Vec<f64> = thresholds.iter().map(|&t| geometry.projected_row(t)).collect();
    if projected.iter().any(|row| !row.is_finite()) {
        return Err(ThresholdError::InvalidGeometry("threshold projection must be finite"));
    }
    let above_row = projected[0];
    let below_row = projected[projected.len() - 1];

    // Edge masks extend past the surface so strokes at the extremes are not clipped.
    let padded_bounds = Rect::from_xywh(0.0, -pad, width, height + pad);

    let mut masks = Vec::with_capacity(thresholds.len() + 1);
    masks.push(Mask {
        id: config.mask_id(Band::Above),
        band: Band::Above,
        bounds: padded_bounds,
        reveal: Rect::from_xywh(0.0, -pad, width, above_row + pad),
    });
    for i in 1..thresholds.len() {
        let band = Band::Interior(i - 1);
        let (prev, curr) = (projected[i - 1], projected[i]);
        masks.push(Mask {
            id: config.mask_id(band),
            band,
            bounds: Rect::from_xywh(0.0, 0.0, width, height),
            reveal: Rect::from_xywh(0.0, prev, width, curr - prev),
        });
    }
    masks.push(Mask {
        id: config.mask_id(Band::Below),
        band: Band::Below,
        bounds: padded_bounds,
        reveal: Rect::from_xywh(0.0, below_row, width, height - below_row + pad),
    });

    debug!("built {} threshold masks, projected rows {:?}", masks.len(), projected);
    Ok(MaskSet { masks, projected })
}
