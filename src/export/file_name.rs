//! Artifact file naming.

use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;

static UNSAFE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("Invalid regex"));

/// Used when nothing of the zone name survives sanitization.
pub const FALLBACK_ZONE_NAME: &str = "zone";

/// Replace each run of characters outside `[A-Za-z0-9_-]` with `_`, then trim `_`.
/// Falls back to [`FALLBACK_ZONE_NAME`] when the result is empty.
#[must_use]
pub fn sanitize_zone_name(name: &str) -> String {
    let replaced = UNSAFE_RUN.replace_all(name, "_");
    match replaced.trim_matches('_') {
        "" => FALLBACK_ZONE_NAME.to_string(),
        sanitized => sanitized.to_string(),
    }
}

/// ISO-8601 UTC timestamp with millisecond precision and `:`/`.` replaced by `-`.
#[must_use]
pub fn file_timestamp(instant: DateTime<Utc>) -> String {
    instant
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

/// `{prefix}-{sanitized zone}-{timestamp}.{extension}`
#[must_use]
pub fn export_file_name(
    prefix: &str,
    zone_name: &str,
    instant: DateTime<Utc>,
    extension: &str,
) -> String {
    format!(
        "{prefix}-{}-{}.{extension}",
        sanitize_zone_name(zone_name),
        file_timestamp(instant)
    )
}

#[cfg(test)]
#[path = "file_name_tests.rs"]
mod tests;
