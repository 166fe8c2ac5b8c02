use serde::{Deserialize, Serialize};

use super::records::{
    BotRecord, CategoryRecord, ContentTypeRecord, FirewallRecord, GeoRecord, ProtocolRecord,
    SecurityRecord, StatusCodeRecord, TlsRecord, TrafficRecord,
};
use super::{DOCUMENT_ORDER, ExportCategory};

/// Per-export collection of category records, one optional slot per category.
///
/// Created fresh for every export and dropped once the document is assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic: Option<TrafficRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_codes: Option<StatusCodeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<ProtocolRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentTypeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<BotRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall: Option<FirewallRecord>,
}

impl AnalyticsBundle {
    /// Store a record in the slot matching its category, replacing any previous one.
    pub fn insert(&mut self, record: CategoryRecord) {
        match record {
            CategoryRecord::Traffic(r) => self.traffic = Some(r),
            CategoryRecord::Security(r) => self.security = Some(r),
            CategoryRecord::StatusCodes(r) => self.status_codes = Some(r),
            CategoryRecord::Geo(r) => self.geo = Some(r),
            CategoryRecord::Protocol(r) => self.protocol = Some(r),
            CategoryRecord::Tls(r) => self.tls = Some(r),
            CategoryRecord::ContentType(r) => self.content_type = Some(r),
            CategoryRecord::Bot(r) => self.bot = Some(r),
            CategoryRecord::Firewall(r) => self.firewall = Some(r),
        }
    }

    /// Owned copy of the record stored for `category`, if any.
    #[must_use]
    pub fn record(&self, category: ExportCategory) -> Option<CategoryRecord> {
        match category {
            ExportCategory::Full => None,
            ExportCategory::Traffic => self.traffic.clone().map(CategoryRecord::Traffic),
            ExportCategory::Security => self.security.clone().map(CategoryRecord::Security),
            ExportCategory::StatusCodes => {
                self.status_codes.clone().map(CategoryRecord::StatusCodes)
            }
            ExportCategory::Geo => self.geo.clone().map(CategoryRecord::Geo),
            ExportCategory::Protocol => self.protocol.clone().map(CategoryRecord::Protocol),
            ExportCategory::Tls => self.tls.clone().map(CategoryRecord::Tls),
            ExportCategory::ContentType => {
                self.content_type.clone().map(CategoryRecord::ContentType)
            }
            ExportCategory::Bot => self.bot.clone().map(CategoryRecord::Bot),
            ExportCategory::Firewall => self.firewall.clone().map(CategoryRecord::Firewall),
        }
    }

    /// Whether `category` holds a record that would render something.
    /// Empty and all-zero records count as absent.
    #[must_use]
    pub fn has(&self, category: ExportCategory) -> bool {
        self.record(category).is_some_and(|r| !r.is_empty())
    }

    /// Categories holding data, in document order.
    #[must_use]
    pub fn populated(&self) -> Vec<ExportCategory> {
        DOCUMENT_ORDER
            .into_iter()
            .filter(|category| self.has(*category))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.populated().is_empty()
    }
}

#[cfg(test)]
#[path = "bundle_tests.rs"]
mod tests;
