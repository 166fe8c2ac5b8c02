//! SVG chart rendering for HTML reports.
//!
//! Charts are hand-computed, self-contained `<svg>` documents:
//! - viewBox-based scaling (renders at any size)
//! - theme colors via the palette and `var(--color-*)` for chrome
//! - `<title>` elements on slices and markers for screen readers and tooltips

mod builder;
mod chart;
mod chart_cache;
mod data;
mod element;
mod format;
mod line_chart;
mod pie_chart;
mod style;

pub use builder::SvgBuilder;
pub use chart::{
    ChartKind, ChartSpec, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, LegendEntry, NO_DATA_MESSAGE,
    RenderedChart, placeholder, render_chart,
};
pub use chart_cache::{ChartCache, cache_key};
pub use data::{DataPoint, DistributionPoint, TimeSeriesPoint};
pub use element::{GridLine, Marker, Polyline, Slice, SvgElement, Text, polar_to_cartesian};
pub use format::html_escape;
pub use line_chart::{GRIDLINE_COUNT, LineLayout};
pub use pie_chart::{START_ANGLE, SliceGeometry, radius as pie_radius, slice_angles};
pub use style::{ChartColor, Palette, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
