//! Per-category mapping from typed records to grids and chart inputs.
//!
//! Each category has one mapping function. Every quantity is read from its
//! single documented field; there is no fallback between field names here.

use chrono::DateTime;
use indexmap::IndexMap;

use super::svg::{ChartKind, DataPoint};
use crate::format::UnitKind;
use crate::model::{
    BotRecord, CategoryRecord, ContentTypeRecord, ExportCategory, FirewallEvent, FirewallRecord,
    GeoRecord, NamedCount, SecurityRecord, StatusCodeRecord, TrafficRecord,
};

/// One figure of a metric grid before formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMetric {
    pub label: &'static str,
    pub value: f64,
    pub unit: UnitKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridPlan {
    pub title: String,
    pub metrics: Vec<GridMetric>,
}

impl GridPlan {
    /// A grid whose figures are all zero carries no information.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.metrics.iter().all(|m| m.value == 0.0)
    }
}

/// Unreduced chart input.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlan {
    pub title: String,
    pub kind: ChartKind,
    pub points: Vec<DataPoint>,
    pub unit: UnitKind,
    /// Plural noun used in truncation notes
    pub noun: &'static str,
}

impl ChartPlan {
    fn pie(title: &str, points: Vec<DataPoint>, unit: UnitKind, noun: &'static str) -> Self {
        Self {
            title: title.to_string(),
            kind: ChartKind::Pie,
            points,
            unit,
            noun,
        }
    }

    fn line(title: &str, points: Vec<DataPoint>, unit: UnitKind) -> Self {
        Self {
            title: title.to_string(),
            kind: ChartKind::Line,
            points,
            unit,
            noun: "data points",
        }
    }

    /// True when there is nothing to draw.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.points.iter().all(|p| p.value == 0.0)
    }
}

/// Everything one category contributes to a report.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPlan {
    pub category: ExportCategory,
    pub grid: Option<GridPlan>,
    pub charts: Vec<ChartPlan>,
}

impl CategoryPlan {
    /// True when neither the grid nor any chart has a non-zero figure.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.grid.as_ref().is_none_or(GridPlan::is_blank)
            && self.charts.iter().all(ChartPlan::is_blank)
    }
}

/// Map a category record into its grid and chart inputs.
#[must_use]
pub fn plan(record: &CategoryRecord) -> CategoryPlan {
    let (grid, charts) = match record {
        CategoryRecord::Traffic(r) => traffic(r),
        CategoryRecord::Security(r) => security(r),
        CategoryRecord::StatusCodes(r) => status_codes(r),
        CategoryRecord::Geo(r) => (None, geo(r)),
        CategoryRecord::Protocol(r) => (
            None,
            vec![ChartPlan::pie(
                "Requests by HTTP Protocol",
                named_points(&r.protocols),
                UnitKind::Count,
                "protocols",
            )],
        ),
        CategoryRecord::Tls(r) => (
            None,
            vec![ChartPlan::pie(
                "Requests by TLS Version",
                named_points(&r.versions),
                UnitKind::Count,
                "TLS versions",
            )],
        ),
        CategoryRecord::ContentType(r) => (None, content_type(r)),
        CategoryRecord::Bot(r) => bot(r),
        CategoryRecord::Firewall(r) => firewall(r),
    };

    CategoryPlan {
        category: record.category(),
        grid,
        charts,
    }
}

#[allow(clippy::cast_precision_loss)]
fn value(n: u64) -> f64 {
    n as f64
}

fn ratio_percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        value(part) / value(whole) * 100.0
    }
}

fn count(label: &'static str, n: u64) -> GridMetric {
    GridMetric {
        label,
        value: value(n),
        unit: UnitKind::Count,
    }
}

fn bytes(label: &'static str, n: u64) -> GridMetric {
    GridMetric {
        label,
        value: value(n),
        unit: UnitKind::Bytes,
    }
}

fn percent(label: &'static str, pct: f64) -> GridMetric {
    GridMetric {
        label,
        value: pct,
        unit: UnitKind::Percent,
    }
}

fn grid(title: &str, metrics: Vec<GridMetric>) -> Option<GridPlan> {
    Some(GridPlan {
        title: title.to_string(),
        metrics,
    })
}

fn named_points(counts: &[NamedCount]) -> Vec<DataPoint> {
    counts
        .iter()
        .map(|c| DataPoint::new(&c.name, value(c.count)))
        .collect()
}

/// Short axis label for an RFC 3339 timestamp; other strings pass through.
#[must_use]
pub fn time_label(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp).map_or_else(
        |_| timestamp.to_string(),
        |t| t.format("%m-%d %H:%M").to_string(),
    )
}

fn traffic(r: &TrafficRecord) -> (Option<GridPlan>, Vec<ChartPlan>) {
    let metrics = vec![
        count("Total Requests", r.requests),
        count("Cached Requests", r.cached_requests),
        percent("Cache Hit Rate", ratio_percent(r.cached_requests, r.requests)),
        bytes("Bandwidth", r.bytes),
        bytes("Cached Bandwidth", r.cached_bytes),
        count("Page Views", r.page_views),
        count("Unique Visitors", r.unique_visitors),
        count("Threats", r.threats),
    ];

    let requests = r
        .timeseries
        .iter()
        .map(|s| DataPoint::new(time_label(&s.timestamp), value(s.requests)))
        .collect();
    let bandwidth = r
        .timeseries
        .iter()
        .map(|s| DataPoint::new(time_label(&s.timestamp), value(s.bytes)))
        .collect();

    (
        grid("Traffic Overview", metrics),
        vec![
            ChartPlan::line("Requests Over Time", requests, UnitKind::Count),
            ChartPlan::line("Bandwidth Over Time", bandwidth, UnitKind::Bytes),
        ],
    )
}

fn security(r: &SecurityRecord) -> (Option<GridPlan>, Vec<ChartPlan>) {
    let metrics = vec![
        count("Threats", r.threats),
        count("Blocked", r.blocked),
        count("Challenged", r.challenged),
        percent("Block Rate", ratio_percent(r.blocked, r.threats)),
    ];

    let over_time = r
        .timeseries
        .iter()
        .map(|s| DataPoint::new(time_label(&s.timestamp), value(s.count)))
        .collect();

    (
        grid("Security Overview", metrics),
        vec![
            ChartPlan::pie(
                "Threat Types",
                named_points(&r.threat_types),
                UnitKind::Count,
                "threat types",
            ),
            ChartPlan::line("Threats Over Time", over_time, UnitKind::Count),
        ],
    )
}

fn status_codes(r: &StatusCodeRecord) -> (Option<GridPlan>, Vec<ChartPlan>) {
    let metrics = vec![
        count("2xx Success", r.class_total(2)),
        count("3xx Redirect", r.class_total(3)),
        count("4xx Client Error", r.class_total(4)),
        count("5xx Server Error", r.class_total(5)),
    ];

    let points = r
        .codes
        .iter()
        .map(|c| DataPoint::new(c.status.to_string(), value(c.count)))
        .collect();

    (
        grid("Response Classes", metrics),
        vec![ChartPlan::pie(
            "Requests by Status Code",
            points,
            UnitKind::Count,
            "status codes",
        )],
    )
}

fn geo(r: &GeoRecord) -> Vec<ChartPlan> {
    let requests = r
        .countries
        .iter()
        .map(|c| DataPoint::new(&c.country, value(c.requests)))
        .collect();
    let threats = r
        .countries
        .iter()
        .map(|c| DataPoint::new(&c.country, value(c.threats)))
        .collect();

    vec![
        ChartPlan::pie("Requests by Country", requests, UnitKind::Count, "countries"),
        ChartPlan::pie("Threats by Country", threats, UnitKind::Count, "countries"),
    ]
}

fn content_type(r: &ContentTypeRecord) -> Vec<ChartPlan> {
    vec![
        ChartPlan::pie(
            "Requests by Content Type",
            named_points(&r.content_types),
            UnitKind::Count,
            "content types",
        ),
        ChartPlan::pie(
            "Bandwidth by Content Type",
            named_points(&r.bytes_by_type),
            UnitKind::Bytes,
            "content types",
        ),
    ]
}

fn bot(r: &BotRecord) -> (Option<GridPlan>, Vec<ChartPlan>) {
    let metrics = vec![
        count("Verified Bots", r.verified_bots),
        count("Likely Automated", r.likely_automated),
        count("Likely Human", r.likely_human),
    ];

    (
        grid("Bot Overview", metrics),
        vec![ChartPlan::pie(
            "Bot Score Distribution",
            named_points(&r.score_buckets),
            UnitKind::Count,
            "score buckets",
        )],
    )
}

fn firewall(r: &FirewallRecord) -> (Option<GridPlan>, Vec<ChartPlan>) {
    let by_action = sum_by(r, |e| e.action.as_str());
    let by_rule = sum_by(r, |e| e.rule.as_str());

    let metrics = vec![
        count("Total Events", r.total_events()),
        count(
            "Distinct Rules",
            by_rule.iter().filter(|p| p.value > 0.0).count() as u64,
        ),
    ];

    (
        grid("Firewall Overview", metrics),
        vec![
            ChartPlan::pie("Events by Action", by_action, UnitKind::Count, "actions"),
            ChartPlan::pie("Events by Rule", by_rule, UnitKind::Count, "rules"),
        ],
    )
}

/// Sum firewall event counts per key, in first-seen order.
fn sum_by<F>(r: &FirewallRecord, key: F) -> Vec<DataPoint>
where
    F: Fn(&FirewallEvent) -> &str,
{
    let mut totals: IndexMap<&str, u64> = IndexMap::new();
    for event in &r.events {
        let total = totals.entry(key(event)).or_default();
        *total = total.saturating_add(event.count);
    }
    totals
        .into_iter()
        .map(|(name, total)| DataPoint::new(name, value(total)))
        .collect()
}

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;
