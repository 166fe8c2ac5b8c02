//! Pie chart geometry and rendering.
//!
//! Slices run clockwise from 12 o'clock. Angles are in degrees with 0° pointing
//! right and positive angles turning clockwise (SVG's y axis points down).

use super::builder::SvgBuilder;
use super::chart::{ChartSpec, LegendEntry, RenderedChart, placeholder};
use super::element::Slice;
use crate::format::{FormatCache, UnitKind};

/// Angle of the first slice's leading edge.
pub const START_ANGLE: f64 = -90.0;

/// Gap between the pie and the chart edge.
const PIE_PADDING: f64 = 20.0;

/// Angular layout of one input point.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceGeometry {
    pub index: usize,
    pub start_angle: f64,
    pub sweep: f64,
    /// Share of the total in percent
    pub percent: f64,
}

/// Lay out slices for `values`; empty when the total is not positive.
///
/// Negative values count as zero. Every input gets an entry, zero-valued ones
/// with a zero sweep.
#[must_use]
pub fn slice_angles(values: &[f64]) -> Vec<SliceGeometry> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if !total.is_finite() || total <= 0.0 {
        return Vec::new();
    }

    let mut angle = START_ANGLE;
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let share = value.max(0.0) / total;
            let sweep = 360.0 * share;
            let geometry = SliceGeometry {
                index,
                start_angle: angle,
                sweep,
                percent: share * 100.0,
            };
            angle += sweep;
            geometry
        })
        .collect()
}

/// Pie radius for a chart of the given size.
#[must_use]
pub fn radius(width: f64, height: f64) -> f64 {
    (width.min(height) / 2.0 - PIE_PADDING).max(0.0)
}

pub(super) fn render(spec: &ChartSpec, formats: &mut FormatCache) -> RenderedChart {
    let values: Vec<f64> = spec.points.iter().map(|p| p.value).collect();
    let geometry = slice_angles(&values);
    if geometry.is_empty() {
        return placeholder(spec);
    }

    let cx = spec.width / 2.0;
    let cy = spec.height / 2.0;
    let radius = radius(spec.width, spec.height);

    let mut slices = Vec::with_capacity(geometry.len());
    let mut legend = Vec::with_capacity(geometry.len());

    for (slice, point) in geometry.iter().zip(&spec.points) {
        let color = spec.palette.color_at(slice.index);
        let value = formats.format(point.value, spec.unit);
        let share = formats.format(slice.percent, UnitKind::Percent);

        if slice.sweep > 0.0 {
            slices.push(Slice {
                cx,
                cy,
                radius,
                start_angle: slice.start_angle,
                sweep: slice.sweep,
                color: color.clone(),
                label: format!("{}: {value} ({share})", point.label),
            });
        }

        legend.push(LegendEntry {
            label: point.label.clone(),
            color: color.to_css(),
            value,
            share: Some(share),
        });
    }

    let svg = SvgBuilder::new(spec.width, spec.height)
        .with_title(&spec.title)
        .push_all(&slices)
        .build();

    RenderedChart { svg, legend }
}

#[cfg(test)]
#[path = "pie_chart_tests.rs"]
mod tests;
