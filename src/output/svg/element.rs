//! Primitive SVG elements: slices, polylines, markers, gridlines and text.

use std::fmt::Write;

use super::format::{coord, html_escape};
use super::style::{ChartColor, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Sweeps at or beyond this many degrees are drawn as a full circle.
const FULL_CIRCLE_DEGREES: f64 = 360.0 - 1e-9;

/// Color escaped for use as an attribute value.
fn color_attr(color: &ChartColor) -> String {
    html_escape(&color.to_css())
}

/// A point on a circle for an angle in degrees (0° points right, clockwise positive).
#[must_use]
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_degrees: f64) -> (f64, f64) {
    let radians = angle_degrees.to_radians();
    (
        radius.mul_add(radians.cos(), cx),
        radius.mul_add(radians.sin(), cy),
    )
}

/// A filled pie slice.
#[derive(Debug, Clone)]
pub struct Slice {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
    pub color: ChartColor,
    /// Tooltip text (already formatted)
    pub label: String,
}

impl Slice {
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }

    #[must_use]
    pub fn is_full_circle(&self) -> bool {
        self.sweep >= FULL_CIRCLE_DEGREES
    }
}

impl SvgElement for Slice {
    fn render(&self) -> String {
        if self.sweep <= 0.0 {
            return String::new();
        }

        let color = color_attr(&self.color);
        let escaped_label = html_escape(&self.label);

        if self.is_full_circle() {
            return format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{color}">
    <title>{escaped_label}</title>
</circle>"#,
                coord(self.cx),
                coord(self.cy),
                coord(self.radius)
            );
        }

        let (x1, y1) = polar_to_cartesian(self.cx, self.cy, self.radius, self.start_angle);
        let (x2, y2) = polar_to_cartesian(self.cx, self.cy, self.radius, self.end_angle());
        let large_arc = u8::from(self.sweep > 180.0);

        format!(
            r#"<path d="M{},{} L{},{} A{},{} 0 {large_arc},1 {},{} Z" fill="{color}">
    <title>{escaped_label}</title>
</path>"#,
            coord(self.cx),
            coord(self.cy),
            coord(x1),
            coord(y1),
            coord(self.radius),
            coord(self.radius),
            coord(x2),
            coord(y2)
        )
    }
}

/// A polyline connecting chart points in order.
#[derive(Debug, Clone)]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
    pub color: ChartColor,
    pub stroke_width: f64,
}

impl Polyline {
    #[must_use]
    pub const fn new(points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            points,
            color,
            stroke_width: 2.0,
        }
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }
}

impl SvgElement for Polyline {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }

        let mut points = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            if i > 0 {
                points.push(' ');
            }
            let _ = write!(points, "{},{}", coord(*x), coord(*y));
        }

        format!(
            r#"<polyline points="{points}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            color_attr(&self.color),
            self.stroke_width
        )
    }
}

/// A marker circle at a data point.
#[derive(Debug, Clone)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: ChartColor,
    pub label: String,
}

impl SvgElement for Marker {
    fn render(&self) -> String {
        let escaped_label = html_escape(&self.label);
        format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}">
    <title>{escaped_label}</title>
</circle>"#,
            coord(self.x),
            coord(self.y),
            coord(self.radius),
            color_attr(&self.color)
        )
    }
}

/// A horizontal gridline across the plot area.
#[derive(Debug, Clone)]
pub struct GridLine {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
    pub color: ChartColor,
}

impl SvgElement for GridLine {
    fn render(&self) -> String {
        format!(
            r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{}" stroke-width="1" stroke-dasharray="4,4"/>"#,
            coord(self.x1),
            coord(self.x2),
            color_attr(&self.color),
            y = coord(self.y)
        )
    }
}

/// A positioned text label.
#[derive(Debug, Clone)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub color: ChartColor,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            anchor: TextAnchor::Start,
            font_size: 10.0,
            color: ChartColor::css_var("muted"),
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        format!(
            r#"<text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}">{}</text>"#,
            coord(self.x),
            coord(self.y),
            self.anchor,
            color_attr(&self.color),
            self.font_size,
            html_escape(&self.content)
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
