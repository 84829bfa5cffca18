// File: crates/chart-threshold/src/plugin.rs
// Summary: Two-phase plugin adapter (created -> draw) wiring the mask builder and classifier to host events.

use std::sync::Arc;

use log::{debug, info};

use crate::classify::{self, BandAssignment, DrawPayload, ShapeKind};
use crate::config::{Config, ThresholdOptions};
use crate::error::{Result, ThresholdError};
use crate::geometry::ChartGeometry;
use crate::mask::{self, MaskSet};

/// Chart types a host may try to attach the plugin to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

/// Host render events, in the order the host emits them for one render.
pub enum ChartEvent<'a, S> {
    Created(ChartGeometry<'a>),
    Draw { kind: ShapeKind, payload: DrawPayload<S> },
}

/// What the plugin asks the host to materialize for an event.
#[derive(Clone, Debug, PartialEq)]
pub enum PluginOutput<S> {
    Masks(MaskSet),
    Assignment(BandAssignment<S>),
}

/// Plugin factory holding the resolved configuration shared by every chart it attaches to.
#[derive(Clone, Debug)]
pub struct ThresholdPlugin {
    config: Arc<Config>,
}

impl ThresholdPlugin {
    pub fn new(config: Config) -> Self { Self { config: Arc::new(config) } }

    pub fn from_options(options: ThresholdOptions) -> Result<Self> {
        Ok(Self::new(Config::resolve(options)?))
    }

    pub fn id(&self) -> &'static str { "ct_threshold" }
    pub fn config(&self) -> &Config { &self.config }

    /// Per-chart state for line and bar charts; other chart kinds are left alone.
    pub fn attach(&self, chart: ChartKind) -> Option<ChartThresholds> {
        match chart {
            ChartKind::Line | ChartKind::Bar => {
                info!("{} attached to {:?} chart", self.id(), chart);
                Some(ChartThresholds { config: Arc::clone(&self.config), masks: None })
            }
            _ => {
                info!("{} skipped: {:?} charts are not supported", self.id(), chart);
                None
            }
        }
    }
}

/// Threshold state of one chart instance.
#[derive(Clone, Debug)]
pub struct ChartThresholds {
    config: Arc<Config>,
    masks: Option<MaskSet>,
}

impl ChartThresholds {
    pub fn config(&self) -> &Config { &self.config }

    /// Masks from the most recent `created` event, if any.
    pub fn masks(&self) -> Option<&MaskSet> { self.masks.as_ref() }

    /// Build masks for a fresh render. A re-render replaces the previous set.
    pub fn on_created(&mut self, geometry: &ChartGeometry<'_>) -> Result<&MaskSet> {
        let built = mask::build(geometry, &self.config)?;
        if self.masks.is_some() {
            debug!("replacing threshold masks from previous render");
        }
        let masks: &MaskSet = self.masks.insert(built);
        Ok(masks)
    }

    /// Classify a drawn shape. Requires a prior `on_created`.
    pub fn on_draw<S: Clone>(&self, kind: ShapeKind, payload: DrawPayload<S>) -> Result<BandAssignment<S>> {
        let masks = self.masks.as_ref().ok_or(ThresholdError::DrawBeforeCreated)?;
        classify::classify(kind, payload, &self.config, masks)
    }

    pub fn handle_event<S: Clone>(&mut self, event: ChartEvent<'_, S>) -> Result<PluginOutput<S>> {
        match event {
            ChartEvent::Created(geometry) => self.on_created(&geometry).map(|m| PluginOutput::Masks(m.clone())),
            ChartEvent::Draw { kind, payload } => self.on_draw(kind, payload).map(PluginOutput::Assignment),
        }
    }
}
