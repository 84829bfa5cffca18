// File: crates/chart-threshold/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and the host-provided chart geometry.

use crate::error::{Result, ThresholdError};

/// Axis-aligned rectangle in pixel space (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn top(&self) -> f64 { self.y }
    pub fn bottom(&self) -> f64 { self.y + self.height }
    pub fn left(&self) -> f64 { self.x }
    pub fn right(&self) -> f64 { self.x + self.width }

    /// True when the interiors of the two rectangles share any area.
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Maps a data value to a pixel offset along the value axis, measured from the axis start.
pub trait AxisProjection {
    fn project_value(&self, value: f64) -> f64;
}

impl<F: Fn(f64) -> f64> AxisProjection for F {
    fn project_value(&self, value: f64) -> f64 { self(value) }
}

/// What the host knows about a chart once it has been laid out.
/// `width`/`height` are the whole drawing surface; `plot` is the data area,
/// with `plot.y` its top edge.
#[derive(Clone, Copy)]
pub struct ChartGeometry<'a> {
    pub width: f64,
    pub height: f64,
    pub plot: Rect,
    pub axis: &'a dyn AxisProjection,
}

impl<'a> ChartGeometry<'a> {
    pub fn new(width: f64, height: f64, plot: Rect, axis: &'a dyn AxisProjection) -> Self {
        Self { width, height, plot, axis }
    }

    /// Surface-sized geometry where the plot fills the whole surface.
    pub fn full(width: f64, height: f64, axis: &'a dyn AxisProjection) -> Self {
        Self::new(width, height, Rect::from_xywh(0.0, 0.0, width, height), axis)
    }

    pub fn validate(&self) -> Result<()> {
        let sizes = [self.width, self.height, self.plot.width, self.plot.height];
        if sizes.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ThresholdError::InvalidGeometry("sizes must be finite and non-negative"));
        }
        if !self.plot.x.is_finite() || !self.plot.y.is_finite() {
            return Err(ThresholdError::InvalidGeometry("plot origin must be finite"));
        }
        Ok(())
    }

    /// Pixel row of `value`: flips the axis offset into surface rows and
    /// shifts by the plot origin.
    #[inline]
    pub fn projected_row(&self, value: f64) -> f64 {
        self.plot.height - self.axis.project_value(value) + self.plot.y
    }
}

impl std::fmt::Debug for ChartGeometry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartGeometry")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("plot", &self.plot)
            .finish_non_exhaustive()
    }
}
