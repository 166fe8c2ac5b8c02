use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::Theme;
use crate::reduce::{MAX_DISTRIBUTION_POINTS, MAX_TIMESERIES_POINTS};

/// Prefix of every generated file name.
pub const DEFAULT_PRODUCT_PREFIX: &str = "zone-report";

/// Space requested from the storage checker before an export starts (5 MiB).
pub const DEFAULT_STORAGE_ESTIMATE_BYTES: u64 = 5 * 1024 * 1024;

/// Seconds before a still-running export reports the slow-export warning.
pub const DEFAULT_SLOW_WARNING_SECS: u64 = 30;

pub const DEFAULT_CHART_WIDTH: u32 = 500;
pub const DEFAULT_CHART_HEIGHT: u32 = 300;

/// Root configuration, read from `.zone-report.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub charts: ChartsConfig,

    #[serde(default)]
    pub theme: Theme,
}

/// Export pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportConfig {
    /// First component of generated file names.
    #[serde(default = "default_product_prefix")]
    pub product_prefix: String,

    /// Free space required before export, in bytes.
    #[serde(default = "default_storage_estimate_bytes")]
    pub storage_estimate_bytes: u64,

    /// Soft timeout for the slow-export warning.
    #[serde(default = "default_slow_warning_secs")]
    pub slow_warning_secs: u64,
}

impl ExportConfig {
    #[must_use]
    pub const fn slow_warning(&self) -> Duration {
        Duration::from_secs(self.slow_warning_secs)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            product_prefix: default_product_prefix(),
            storage_estimate_bytes: DEFAULT_STORAGE_ESTIMATE_BYTES,
            slow_warning_secs: DEFAULT_SLOW_WARNING_SECS,
        }
    }
}

/// Chart size and data caps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartsConfig {
    #[serde(default = "default_chart_width")]
    pub width: u32,

    #[serde(default = "default_chart_height")]
    pub height: u32,

    /// Top-N cap for pie charts.
    #[serde(default = "default_max_distribution_points")]
    pub max_distribution_points: usize,

    /// Sampling cap for line charts.
    #[serde(default = "default_max_timeseries_points")]
    pub max_timeseries_points: usize,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            max_distribution_points: MAX_DISTRIBUTION_POINTS,
            max_timeseries_points: MAX_TIMESERIES_POINTS,
        }
    }
}

fn default_product_prefix() -> String {
    DEFAULT_PRODUCT_PREFIX.to_string()
}

const fn default_storage_estimate_bytes() -> u64 {
    DEFAULT_STORAGE_ESTIMATE_BYTES
}

const fn default_slow_warning_secs() -> u64 {
    DEFAULT_SLOW_WARNING_SECS
}

const fn default_chart_width() -> u32 {
    DEFAULT_CHART_WIDTH
}

const fn default_chart_height() -> u32 {
    DEFAULT_CHART_HEIGHT
}

const fn default_max_distribution_points() -> usize {
    MAX_DISTRIBUTION_POINTS
}

const fn default_max_timeseries_points() -> usize {
    MAX_TIMESERIES_POINTS
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
