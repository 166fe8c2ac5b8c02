//! In-memory report document: header, ordered sections, footer.

use serde::Serialize;

use super::svg::RenderedChart;
use crate::format::UnitKind;
use crate::model::ExportCategory;

/// Report header shown at the top of the first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: String,
    pub zone_name: String,
    pub zone_id: String,
    pub account_tag: Option<String>,
    /// Human-readable reporting period
    pub period: String,
    /// Generation instant, already formatted
    pub generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub text: String,
}

/// A single labeled figure in a metric grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: f64,
    pub unit: UnitKind,
    /// `value` rendered through the formatter
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricGrid {
    pub category: ExportCategory,
    pub title: String,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSection {
    pub category: ExportCategory,
    pub title: String,
    pub chart: RenderedChart,
    /// Set when the data was reduced before charting
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    MetricGrid(MetricGrid),
    Chart(ChartSection),
}

impl Section {
    #[must_use]
    pub const fn category(&self) -> ExportCategory {
        match self {
            Self::MetricGrid(grid) => grid.category,
            Self::Chart(chart) => chart.category,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::MetricGrid(grid) => &grid.title,
            Self::Chart(chart) => &chart.title,
        }
    }
}

/// A fully assembled report, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub header: Header,
    pub sections: Vec<Section>,
    pub footer: Footer,
}

impl Document {
    /// Categories that contributed at least one section, in document order.
    #[must_use]
    pub fn categories(&self) -> Vec<ExportCategory> {
        let mut seen = Vec::new();
        for section in &self.sections {
            let category = section.category();
            if seen.last() != Some(&category) {
                seen.push(category);
            }
        }
        seen
    }

    #[must_use]
    pub fn chart_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| matches!(s, Section::Chart(_)))
            .count()
    }
}
