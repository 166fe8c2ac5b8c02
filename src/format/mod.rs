//! Human-readable number formatting with fixed unit ladders.
//!
//! The ladders are part of the report's golden output:
//! - count: plain integer, then K/M/B at powers of 1000 with one decimal
//! - bytes: B/KB/MB/GB/TB at powers of 1024 with two decimals
//! - throughput (Mbps input): Gbps at or above 1000, else Mbps, two decimals
//! - percent: one decimal with a `%` suffix

mod cache;

pub use cache::FormatCache;

use serde::{Deserialize, Serialize};

/// Unit of a numeric quantity, selecting its formatting ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    #[default]
    Count,
    Bytes,
    Throughput,
    Percent,
}

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format `value` using the ladder for `kind`.
#[must_use]
pub fn format_value(value: f64, kind: UnitKind) -> String {
    match kind {
        UnitKind::Count => format_count(value),
        UnitKind::Bytes => format_bytes(value),
        UnitKind::Throughput => format_throughput(value),
        UnitKind::Percent => format!("{value:.1}%"),
    }
}

fn format_count(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

fn format_bytes(value: f64) -> String {
    if value == 0.0 {
        return "0 B".to_string();
    }

    let mut scaled = value.abs();
    let mut unit = 0;
    while scaled >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    let signed = if value < 0.0 { -scaled } else { scaled };
    format!("{signed:.2} {}", BYTE_UNITS[unit])
}

fn format_throughput(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.2} Gbps", value / 1000.0)
    } else {
        format!("{value:.2} Mbps")
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
