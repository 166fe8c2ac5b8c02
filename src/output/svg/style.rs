//! SVG styling primitives: colors, palettes and text anchoring.

use std::fmt;

use serde::Serialize;

use crate::model::DEFAULT_PALETTE;

/// Color specification supporting CSS variables from the report stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#22c55e")
    Hex(String),
    /// CSS variable reference (e.g., "muted" → "var(--color-muted)")
    CssVar(String),
}

impl ChartColor {
    /// Create a CSS variable color reference.
    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self::CssVar(name.to_string())
    }

    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::CssVar(name) => format!("var(--color-{name})"),
        }
    }
}

/// Ordered chart colors; slice/series `i` uses entry `i % len`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette(Vec<String>);

impl Palette {
    /// Build a palette, falling back to the default colors when `colors` is empty.
    #[must_use]
    pub fn new(colors: Vec<String>) -> Self {
        if colors.is_empty() {
            Self::default()
        } else {
            Self(colors)
        }
    }

    #[must_use]
    pub fn color_at(&self, index: usize) -> ChartColor {
        ChartColor::Hex(self.0[index % self.0.len()].clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_PALETTE.iter().map(ToString::to_string).collect())
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
