//! Chart descriptions and rendered chart output.

use serde::Serialize;

use super::builder::SvgBuilder;
use super::data::DataPoint;
use super::element::Text;
use super::style::{Palette, TextAnchor};
use super::{line_chart, pie_chart};
use crate::format::{FormatCache, UnitKind};

/// Default chart width in SVG user units.
pub const DEFAULT_CHART_WIDTH: f64 = 500.0;
/// Default chart height in SVG user units.
pub const DEFAULT_CHART_HEIGHT: f64 = 300.0;

/// Shown in place of geometry when a chart has nothing to draw.
pub const NO_DATA_MESSAGE: &str = "No data available";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Line,
}

impl ChartKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pie => "pie",
            Self::Line => "line",
        }
    }
}

/// Everything needed to render one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub points: Vec<DataPoint>,
    pub title: String,
    pub palette: Palette,
    pub width: f64,
    pub height: f64,
    pub unit: UnitKind,
}

impl ChartSpec {
    #[must_use]
    pub fn new(kind: ChartKind, title: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            kind,
            points,
            title: title.into(),
            palette: Palette::default(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            unit: UnitKind::Count,
        }
    }

    #[must_use]
    pub fn pie(title: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self::new(ChartKind::Pie, title, points)
    }

    #[must_use]
    pub fn line(title: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self::new(ChartKind::Line, title, points)
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub const fn with_unit(mut self, unit: UnitKind) -> Self {
        self.unit = unit;
        self
    }
}

/// One row of a chart's textual legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    /// CSS color of the swatch
    pub color: String,
    /// Formatted value
    pub value: String,
    /// Formatted share of the total, for pie slices
    pub share: Option<String>,
}

/// SVG markup plus its legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedChart {
    pub svg: String,
    pub legend: Vec<LegendEntry>,
}

impl RenderedChart {
    /// True when the chart rendered the no-data placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.legend.is_empty() && self.svg.contains(NO_DATA_MESSAGE)
    }
}

/// Render a chart without caching.
pub fn render_chart(spec: &ChartSpec, formats: &mut FormatCache) -> RenderedChart {
    match spec.kind {
        ChartKind::Pie => pie_chart::render(spec, formats),
        ChartKind::Line => line_chart::render(spec, formats),
    }
}

/// The "No data available" chart used for empty inputs of either kind.
#[must_use]
pub fn placeholder(spec: &ChartSpec) -> RenderedChart {
    let message = Text::new(spec.width / 2.0, spec.height / 2.0, NO_DATA_MESSAGE)
        .with_anchor(TextAnchor::Middle)
        .with_font_size(14.0);

    let svg = SvgBuilder::new(spec.width, spec.height)
        .with_title(&spec.title)
        .push_element(&message)
        .build();

    RenderedChart {
        svg,
        legend: Vec::new(),
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
