//! Configuration semantic validation.
//!
//! Runs after parsing; rejects values that would make charts or file names degenerate.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Config;
use crate::{ReportError, Result};

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("Invalid regex")
});

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error for zero chart sizes or caps, an empty palette, malformed
/// theme colors, or an empty product prefix.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_export_section(config)?;
    validate_charts_section(config)?;
    validate_theme_section(config)?;
    Ok(())
}

fn validate_export_section(config: &Config) -> Result<()> {
    if config.export.product_prefix.trim().is_empty() {
        return Err(ReportError::Config(
            "export.product_prefix must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_charts_section(config: &Config) -> Result<()> {
    let charts = &config.charts;
    for (name, value) in [
        ("width", charts.width as usize),
        ("height", charts.height as usize),
        ("max_distribution_points", charts.max_distribution_points),
        ("max_timeseries_points", charts.max_timeseries_points),
    ] {
        if value == 0 {
            return Err(ReportError::Config(format!(
                "charts.{name} must be greater than 0"
            )));
        }
    }
    Ok(())
}

fn validate_theme_section(config: &Config) -> Result<()> {
    let theme = &config.theme;
    if theme.palette.is_empty() {
        return Err(ReportError::Config(
            "theme.palette must contain at least one color".to_string(),
        ));
    }

    let named = [
        ("primary", &theme.primary),
        ("background", &theme.background),
        ("card", &theme.card),
        ("text", &theme.text),
        ("muted", &theme.muted),
        ("border", &theme.border),
    ];
    for (name, color) in named {
        if !HEX_COLOR.is_match(color) {
            return Err(ReportError::Config(format!(
                "theme.{name} must be a hex color like #1e293b, got '{color}'"
            )));
        }
    }
    for (i, color) in theme.palette.iter().enumerate() {
        if !HEX_COLOR.is_match(color) {
            return Err(ReportError::Config(format!(
                "theme.palette[{i}] must be a hex color like #f38020, got '{color}'"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
