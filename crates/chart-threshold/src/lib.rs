// File: crates/chart-threshold/src/lib.rs
// Summary: Core library entry point; exports threshold configuration, mask building and band classification.

pub mod band;
pub mod classify;
pub mod config;
pub mod error;
pub mod geometry;
pub mod mask;
pub mod plugin;
pub mod scale;
pub mod svg;

pub use band::{Band, ThresholdSet};
pub use classify::{classify, classify_value, split_shape, BandAssignment, CopyOrigin, DrawPayload, ShapeCopy, ShapeKind};
pub use config::{BandNames, Config, ConfigBuilder, NameOverrides, ThresholdOptions};
pub use error::{Result, ThresholdError};
pub use geometry::{AxisProjection, ChartGeometry, Rect};
pub use mask::{build, Mask, MaskSet};
pub use plugin::{ChartEvent, ChartKind, ChartThresholds, PluginOutput, ThresholdPlugin};
pub use scale::{ScaleKind, ValueAxis};
pub use svg::{SvgDocument, SvgElement};
