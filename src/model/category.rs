//! Export category selector and the fixed document order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category selector for an export request.
///
/// `Full` selects every analytics category; every other variant selects exactly one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ExportCategory {
    #[default]
    Full,
    Traffic,
    Security,
    StatusCodes,
    Geo,
    Protocol,
    Tls,
    ContentType,
    Bot,
    Firewall,
}

/// Analytics categories in the order they appear in a report.
pub const DOCUMENT_ORDER: [ExportCategory; 9] = [
    ExportCategory::Traffic,
    ExportCategory::Security,
    ExportCategory::StatusCodes,
    ExportCategory::Geo,
    ExportCategory::Protocol,
    ExportCategory::Tls,
    ExportCategory::ContentType,
    ExportCategory::Bot,
    ExportCategory::Firewall,
];

impl ExportCategory {
    /// Categories this selector asks the data source for, in document order.
    #[must_use]
    pub fn requested(self) -> Vec<Self> {
        match self {
            Self::Full => DOCUMENT_ORDER.to_vec(),
            single => vec![single],
        }
    }

    /// Selector name as accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Traffic => "traffic",
            Self::Security => "security",
            Self::StatusCodes => "status-codes",
            Self::Geo => "geo",
            Self::Protocol => "protocol",
            Self::Tls => "tls",
            Self::ContentType => "content-type",
            Self::Bot => "bot",
            Self::Firewall => "firewall",
        }
    }

    /// Human-readable heading used in reports and progress messages.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Full => "Full Report",
            Self::Traffic => "Traffic",
            Self::Security => "Security",
            Self::StatusCodes => "Status Codes",
            Self::Geo => "Geography",
            Self::Protocol => "HTTP Protocols",
            Self::Tls => "TLS Versions",
            Self::ContentType => "Content Types",
            Self::Bot => "Bot Management",
            Self::Firewall => "Firewall Events",
        }
    }
}

impl fmt::Display for ExportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExportCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "full" | "all" => Ok(Self::Full),
            "traffic" => Ok(Self::Traffic),
            "security" => Ok(Self::Security),
            "status-codes" | "status" => Ok(Self::StatusCodes),
            "geo" | "geography" => Ok(Self::Geo),
            "protocol" | "protocols" => Ok(Self::Protocol),
            "tls" => Ok(Self::Tls),
            "content-type" | "content-types" => Ok(Self::ContentType),
            "bot" | "bots" => Ok(Self::Bot),
            "firewall" => Ok(Self::Firewall),
            _ => Err(format!("Unknown export category: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
