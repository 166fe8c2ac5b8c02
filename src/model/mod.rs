//! Analytics data model: category selector, typed records, the per-export
//! bundle, themes and export requests.

mod bundle;
mod category;
mod records;
mod request;
mod theme;

pub use bundle::AnalyticsBundle;
pub use category::{DOCUMENT_ORDER, ExportCategory};
pub use records::{
    BotRecord, CategoryRecord, ContentTypeRecord, CountryCount, FirewallEvent, FirewallRecord,
    GeoRecord, NamedCount, ProtocolRecord, SecurityRecord, StatusCodeRecord, StatusCount,
    TimeCount, TlsRecord, TrafficRecord, TrafficSample,
};
pub use request::ReportRequest;
pub use theme::{DEFAULT_PALETTE, Theme};
