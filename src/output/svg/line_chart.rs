//! Line chart geometry and rendering.

use super::builder::SvgBuilder;
use super::chart::{ChartSpec, LegendEntry, RenderedChart, placeholder};
use super::element::{GridLine, Marker, Polyline, Text};
use super::style::{ChartColor, TextAnchor};
use crate::format::FormatCache;

const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 60.0;

/// Number of horizontal gridlines, top and bottom included.
pub const GRIDLINE_COUNT: usize = 6;

/// At most this many horizontal-axis labels are drawn.
const MAX_X_LABELS: usize = 8;

const MARKER_RADIUS: f64 = 3.0;

/// Plot area and value range of a line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub count: usize,
}

impl LineLayout {
    /// Compute the layout for `values` in a `width` x `height` chart.
    ///
    /// The range always includes zero; a flat range is widened by one.
    #[must_use]
    pub fn new(values: &[f64], width: f64, height: f64) -> Self {
        let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let y_min = if min_value.is_finite() {
            min_value.min(0.0)
        } else {
            0.0
        };
        let mut y_max = if max_value.is_finite() { max_value } else { 0.0 };
        if (y_max - y_min).abs() < f64::EPSILON {
            y_max = y_min + 1.0;
        }

        Self {
            left: MARGIN_LEFT,
            right: width - MARGIN_RIGHT,
            top: MARGIN_TOP,
            bottom: height - MARGIN_BOTTOM,
            y_min,
            y_max,
            count: values.len(),
        }
    }

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Horizontal position of point `index`; a lone point is centred.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn x_at(&self, index: usize) -> f64 {
        if self.count <= 1 {
            return self.left + self.plot_width() / 2.0;
        }
        let step = self.plot_width() / (self.count - 1) as f64;
        step.mul_add(index as f64, self.left)
    }

    #[must_use]
    pub fn y_at(&self, value: f64) -> f64 {
        let ratio = (value - self.y_min) / (self.y_max - self.y_min);
        ratio.mul_add(-self.plot_height(), self.bottom)
    }

    /// `(y position, value)` of each gridline, from the top down.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn gridlines(&self) -> Vec<(f64, f64)> {
        let intervals = (GRIDLINE_COUNT - 1) as f64;
        (0..GRIDLINE_COUNT)
            .map(|k| {
                let fraction = k as f64 / intervals;
                let y = fraction.mul_add(self.plot_height(), self.top);
                let value = fraction.mul_add(-(self.y_max - self.y_min), self.y_max);
                (y, value)
            })
            .collect()
    }

    /// Indices of points that get a horizontal-axis label: every `ceil(N/8)`-th.
    #[must_use]
    pub fn label_indices(&self) -> Vec<usize> {
        if self.count == 0 {
            return Vec::new();
        }
        let step = self.count.div_ceil(MAX_X_LABELS);
        (0..self.count).step_by(step).collect()
    }
}

pub(super) fn render(spec: &ChartSpec, formats: &mut FormatCache) -> RenderedChart {
    if spec.points.is_empty() {
        return placeholder(spec);
    }

    let values: Vec<f64> = spec.points.iter().map(|p| p.value).collect();
    let layout = LineLayout::new(&values, spec.width, spec.height);
    let color = spec.palette.color_at(0);
    let grid_color = ChartColor::css_var("border");

    let mut grid = Vec::with_capacity(GRIDLINE_COUNT);
    let mut axis_labels = Vec::new();
    for (y, value) in layout.gridlines() {
        grid.push(GridLine {
            x1: layout.left,
            x2: layout.right,
            y,
            color: grid_color.clone(),
        });
        axis_labels.push(
            Text::new(layout.left - 8.0, y + 3.0, formats.format(value, spec.unit))
                .with_anchor(TextAnchor::End),
        );
    }

    for index in layout.label_indices() {
        axis_labels.push(
            Text::new(
                layout.x_at(index),
                layout.bottom + 20.0,
                spec.points[index].label.clone(),
            )
            .with_anchor(TextAnchor::Middle),
        );
    }

    let positions: Vec<(f64, f64)> = spec
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (layout.x_at(i), layout.y_at(p.value)))
        .collect();

    let markers: Vec<Marker> = spec
        .points
        .iter()
        .zip(&positions)
        .map(|(point, &(x, y))| Marker {
            x,
            y,
            radius: MARKER_RADIUS,
            color: color.clone(),
            label: format!("{}: {}", point.label, formats.format(point.value, spec.unit)),
        })
        .collect();

    let svg = SvgBuilder::new(spec.width, spec.height)
        .with_title(&spec.title)
        .push_all(&grid)
        .push_all(&axis_labels)
        .push_element(&Polyline::new(positions, color.clone()))
        .push_all(&markers)
        .build();

    let peak = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let legend = vec![LegendEntry {
        label: format!("{} (peak)", spec.title),
        color: color.to_css(),
        value: formats.format(peak, spec.unit),
        share: None,
    }];

    RenderedChart { svg, legend }
}

#[cfg(test)]
#[path = "line_chart_tests.rs"]
mod tests;
