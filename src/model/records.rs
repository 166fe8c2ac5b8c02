//! Typed per-category analytics records returned by a data source.
//!
//! Every quantity has exactly one documented field name. The serde aliases on
//! [`NamedCount::count`] are a compatibility shim for feeds that still label the
//! value `requests` or `value`; they apply only at deserialization.

use serde::{Deserialize, Serialize};

use super::ExportCategory;

/// A labeled count (protocol name, TLS version, threat type, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCount {
    pub name: String,
    #[serde(alias = "requests", alias = "value")]
    pub count: u64,
}

impl NamedCount {
    #[must_use]
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// A count at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeCount {
    pub timestamp: String,
    pub count: u64,
}

/// One bucket of the traffic time series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficSample {
    pub timestamp: String,
    #[serde(default)]
    pub requests: u64,
    #[serde(default)]
    pub bytes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficRecord {
    #[serde(default)]
    pub requests: u64,
    #[serde(default)]
    pub cached_requests: u64,
    #[serde(default)]
    pub bytes: u64,
    #[serde(default)]
    pub cached_bytes: u64,
    #[serde(default)]
    pub page_views: u64,
    #[serde(default)]
    pub unique_visitors: u64,
    #[serde(default)]
    pub threats: u64,
    #[serde(default)]
    pub timeseries: Vec<TrafficSample>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityRecord {
    #[serde(default)]
    pub threats: u64,
    #[serde(default)]
    pub blocked: u64,
    #[serde(default)]
    pub challenged: u64,
    #[serde(default)]
    pub threat_types: Vec<NamedCount>,
    #[serde(default)]
    pub timeseries: Vec<TimeCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: u16,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCodeRecord {
    #[serde(default)]
    pub codes: Vec<StatusCount>,
}

impl StatusCodeRecord {
    /// Total requests whose status falls in `class * 100 ..= class * 100 + 99`.
    #[must_use]
    pub fn class_total(&self, class: u16) -> u64 {
        self.codes
            .iter()
            .filter(|c| c.status / 100 == class)
            .map(|c| c.count)
            .fold(0, u64::saturating_add)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country: String,
    #[serde(default)]
    pub requests: u64,
    #[serde(default)]
    pub bytes: u64,
    #[serde(default)]
    pub threats: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRecord {
    #[serde(default)]
    pub countries: Vec<CountryCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolRecord {
    #[serde(default)]
    pub protocols: Vec<NamedCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsRecord {
    #[serde(default)]
    pub versions: Vec<NamedCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeRecord {
    /// Requests per content type.
    #[serde(default)]
    pub content_types: Vec<NamedCount>,
    /// Bytes served per content type.
    #[serde(default)]
    pub bytes_by_type: Vec<NamedCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotRecord {
    #[serde(default)]
    pub verified_bots: u64,
    #[serde(default)]
    pub likely_automated: u64,
    #[serde(default)]
    pub likely_human: u64,
    /// Requests per bot-score bucket (e.g. "1-29").
    #[serde(default)]
    pub score_buckets: Vec<NamedCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallEvent {
    pub rule: String,
    pub action: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallRecord {
    #[serde(default)]
    pub events: Vec<FirewallEvent>,
}

impl FirewallRecord {
    #[must_use]
    pub fn total_events(&self) -> u64 {
        self.events
            .iter()
            .map(|e| e.count)
            .fold(0, u64::saturating_add)
    }
}

/// A record for one analytics category, as produced by a data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryRecord {
    Traffic(TrafficRecord),
    Security(SecurityRecord),
    StatusCodes(StatusCodeRecord),
    Geo(GeoRecord),
    Protocol(ProtocolRecord),
    Tls(TlsRecord),
    ContentType(ContentTypeRecord),
    Bot(BotRecord),
    Firewall(FirewallRecord),
}

impl CategoryRecord {
    #[must_use]
    pub const fn category(&self) -> ExportCategory {
        match self {
            Self::Traffic(_) => ExportCategory::Traffic,
            Self::Security(_) => ExportCategory::Security,
            Self::StatusCodes(_) => ExportCategory::StatusCodes,
            Self::Geo(_) => ExportCategory::Geo,
            Self::Protocol(_) => ExportCategory::Protocol,
            Self::Tls(_) => ExportCategory::Tls,
            Self::ContentType(_) => ExportCategory::ContentType,
            Self::Bot(_) => ExportCategory::Bot,
            Self::Firewall(_) => ExportCategory::Firewall,
        }
    }

    /// A record is empty when it would contribute no grid figure and no
    /// chart point to a report.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        crate::output::plan(self).is_blank()
    }
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
