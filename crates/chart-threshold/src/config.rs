// File: crates/chart-threshold/src/config.rs
// Summary: Caller-facing threshold options, defaults, and the resolved immutable configuration.

use serde::{Deserialize, Serialize};

use crate::band::{Band, ThresholdSet};
use crate::error::{Result, ThresholdError};

pub const DEFAULT_THRESHOLD: f64 = 0.0;
pub const DEFAULT_MASK_PADDING: f64 = 10.0;
pub const DEFAULT_PREFIX: &str = "ct-threshold-";

/// Naming scheme for the three band roles. Interior names are `interior_prefix + index`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BandNames {
    pub above: String,
    pub interior_prefix: String,
    pub below: String,
}

impl BandNames {
    pub fn new(above: impl Into<String>, interior_prefix: impl Into<String>, below: impl Into<String>) -> Self {
        Self { above: above.into(), interior_prefix: interior_prefix.into(), below: below.into() }
    }

    pub fn default_classes() -> Self { Self::new("above", "area-", "below") }
    pub fn default_masks() -> Self { Self::new("mask-above", "mask-area-", "mask-below") }

    /// Unprefixed name for `band`.
    pub fn name(&self, band: Band) -> String {
        match band {
            Band::Above => self.above.clone(),
            Band::Interior(k) => format!("{}{}", self.interior_prefix, k),
            Band::Below => self.below.clone(),
        }
    }

    fn merged(mut self, overrides: Option<NameOverrides>) -> Self {
        if let Some(o) = overrides {
            if let Some(v) = o.above_threshold { self.above = v; }
            if let Some(v) = o.prefix_threshold { self.interior_prefix = v; }
            if let Some(v) = o.below_threshold { self.below = v; }
        }
        self
    }
}

/// Partial override map for class or mask names; missing keys keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NameOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub above_threshold: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_threshold: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub below_threshold: Option<String>,
}

impl From<BandNames> for NameOverrides {
    fn from(n: BandNames) -> Self {
        Self {
            above_threshold: Some(n.above),
            prefix_threshold: Some(n.interior_prefix),
            below_threshold: Some(n.below),
        }
    }
}

/// Raw options as supplied by the caller (e.g. parsed from JSON).
/// `thresholds` takes precedence over the `threshold` shorthand.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThresholdOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_padding: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_names: Option<NameOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_names: Option<NameOverrides>,
}

/// Resolved, validated configuration. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    thresholds: ThresholdSet,
    mask_padding: f64,
    prefix: String,
    class_names: BandNames,
    mask_names: BandNames,
}

impl Config {
    /// Merge `options` onto the defaults and validate the result.
    pub fn resolve(options: ThresholdOptions) -> Result<Self> {
        let thresholds = match options.thresholds {
            Some(list) => ThresholdSet::new(list)?,
            None => ThresholdSet::single(options.threshold.unwrap_or(DEFAULT_THRESHOLD))?,
        };
        let mask_padding = options.mask_padding.unwrap_or(DEFAULT_MASK_PADDING);
        if !mask_padding.is_finite() || mask_padding < 0.0 {
            return Err(ThresholdError::InvalidMaskPadding(mask_padding));
        }
        Ok(Self {
            thresholds,
            mask_padding,
            prefix: options.prefix.unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            class_names: BandNames::default_classes().merged(options.class_names),
            mask_names: BandNames::default_masks().merged(options.mask_names),
        })
    }

    /// Parse JSON options (camelCase keys) and resolve them.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: ThresholdOptions = serde_json::from_str(json)?;
        Self::resolve(options)
    }

    pub fn builder() -> ConfigBuilder { ConfigBuilder::default() }

    pub fn thresholds(&self) -> &ThresholdSet { &self.thresholds }
    pub fn mask_padding(&self) -> f64 { self.mask_padding }
    pub fn prefix(&self) -> &str { &self.prefix }
    pub fn class_names(&self) -> &BandNames { &self.class_names }
    pub fn mask_names(&self) -> &BandNames { &self.mask_names }

    /// Class tag applied to shapes and points in `band`.
    pub fn class_name(&self, band: Band) -> String {
        format!("{}{}", self.prefix, self.class_names.name(band))
    }

    /// Id of the mask resource revealing `band`.
    pub fn mask_id(&self, band: Band) -> String {
        format!("{}{}", self.prefix, self.mask_names.name(band))
    }

    /// Mask reference attribute value, e.g. `url(#ct-threshold-mask-above)`.
    pub fn mask_url(&self, band: Band) -> String {
        format!("url(#{})", self.mask_id(band))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thresholds: ThresholdSet::default(),
            mask_padding: DEFAULT_MASK_PADDING,
            prefix: DEFAULT_PREFIX.to_string(),
            class_names: BandNames::default_classes(),
            mask_names: BandNames::default_masks(),
        }
    }
}

/// Builder over [`ThresholdOptions`]; validation happens in [`ConfigBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    options: ThresholdOptions,
}

impl ConfigBuilder {
    pub fn threshold(mut self, value: f64) -> Self {
        self.options.threshold = Some(value);
        self
    }

    pub fn thresholds(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.options.thresholds = Some(values.into_iter().collect());
        self
    }

    pub fn mask_padding(mut self, px: f64) -> Self {
        self.options.mask_padding = Some(px);
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.prefix = Some(prefix.into());
        self
    }

    pub fn class_names(mut self, names: BandNames) -> Self {
        self.options.class_names = Some(names.into());
        self
    }

    pub fn mask_names(mut self, names: BandNames) -> Self {
        self.options.mask_names = Some(names.into());
        self
    }

    pub fn build(self) -> Result<Config> { Config::resolve(self.options) }
}
