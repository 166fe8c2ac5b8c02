//! Chart data model.

use serde::Serialize;

use crate::reduce::Measured;

/// A single labeled value fed to a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    /// Category name or timestamp label
    pub label: String,
    /// Numeric value
    pub value: f64,
}

/// A point of distribution data (e.g. requests per country).
pub type DistributionPoint = DataPoint;

/// A point of an ordered time series; `label` carries the timestamp.
pub type TimeSeriesPoint = DataPoint;

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl Measured for DataPoint {
    fn measure(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
