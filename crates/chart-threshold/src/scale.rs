// File: crates/chart-threshold/src/scale.rs
// Summary: Minimal value axis (linear / log10) implementing AxisProjection for hosts without their own.

use crate::geometry::AxisProjection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

/// Vertical value axis mapping [vmin, vmax] onto [0, length] pixels from the axis start.
#[derive(Clone, Copy, Debug)]
pub struct ValueAxis {
    pub length: f64,
    pub vmin: f64,
    pub vmax: f64,
    pub kind: ScaleKind,
    // cached log endpoints when kind is Log10
    log_min: f64,
    log_max: f64,
}

impl ValueAxis {
    pub fn linear(length: f64, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { length, vmin, vmax, kind: ScaleKind::Linear, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn log10(length: f64, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        Self { length, vmin, vmax, kind: ScaleKind::Log10, log_min: vmin.log10(), log_max: vmax.log10() }
    }

    /// Fit a linear axis around `values`, padded by 2% of the span on both ends.
    pub fn fit_linear(length: f64, values: impl IntoIterator<Item = f64>) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if !lo.is_finite() || !hi.is_finite() { return Self::linear(length, 0.0, 1.0); }
        if (hi - lo).abs() < 1e-9 { hi = lo + 1.0; }
        let m = (hi - lo) * 0.02;
        Self::linear(length, lo - m, hi + m)
    }

    /// Inverse of `project_value`.
    pub fn value_at(&self, offset: f64) -> f64 {
        let frac = offset / self.length.max(1e-12);
        match self.kind {
            ScaleKind::Linear => self.vmin + frac * (self.vmax - self.vmin),
            ScaleKind::Log10 => 10f64.powf(self.log_min + frac * (self.log_max - self.log_min)),
        }
    }
}

impl AxisProjection for ValueAxis {
    #[inline]
    fn project_value(&self, value: f64) -> f64 {
        match self.kind {
            ScaleKind::Linear => {
                let span = (self.vmax - self.vmin).max(1e-12);
                (value - self.vmin) / span * self.length
            }
            ScaleKind::Log10 => {
                let yy = value.max(1e-12).log10();
                let span = (self.log_max - self.log_min).max(1e-12);
                (yy - self.log_min) / span * self.length
            }
        }
    }
}
