//! Configuration for the validation engine

use serde::{Deserialize, Serialize};

/// Engine-wide settings that are not part of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorConfig {
    /// Number of leading data rows sampled for column-type checks (0 = all)
    pub sample_size: usize,

    /// Fraction of matching values required under lenient type strictness (0.0 - 1.0)
    pub lenient_threshold: f64,

    /// Treat whitespace-only strings as empty cells
    pub treat_blank_as_empty: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            sample_size: 0, // All rows
            lenient_threshold: 0.5,
            treat_blank_as_empty: true,
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ValidatorConfigBuilder {
        ValidatorConfigBuilder::default()
    }

    /// Lenient threshold clamped to 0.0 - 1.0. Deserialized configs are not
    /// normalized, so the engine reads the threshold through this.
    pub fn effective_lenient_threshold(&self) -> f64 {
        normalize_threshold(self.lenient_threshold)
    }
}

/// Builder for ValidatorConfig
#[derive(Debug, Default)]
pub struct ValidatorConfigBuilder {
    config: ValidatorConfig,
}

impl ValidatorConfigBuilder {
    /// Set the sample size (0 = all rows)
    pub fn sample_size(mut self, size: usize) -> Self {
        self.config.sample_size = size;
        self
    }

    /// Set the lenient match threshold
    pub fn lenient_threshold(mut self, threshold: f64) -> Self {
        self.config.lenient_threshold = normalize_threshold(threshold);
        self
    }

    pub fn treat_blank_as_empty(mut self, blank_is_empty: bool) -> Self {
        self.config.treat_blank_as_empty = blank_is_empty;
        self
    }

    pub fn build(self) -> ValidatorConfig {
        self.config
    }
}

/// NaN falls back to the default threshold
fn normalize_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        ValidatorConfig::default().lenient_threshold
    } else {
        threshold.clamp(0.0, 1.0)
    }
}
