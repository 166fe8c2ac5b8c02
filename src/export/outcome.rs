//! Export results and the outward error taxonomy.

use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportErrorCode {
    StorageFull,
    NetworkError,
    GenerationFailed,
    InvalidData,
    InvalidTimeRange,
}

impl ExportErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StorageFull => "STORAGE_FULL",
            Self::NetworkError => "NETWORK_ERROR",
            Self::GenerationFailed => "GENERATION_FAILED",
            Self::InvalidData => "INVALID_DATA",
            Self::InvalidTimeRange => "INVALID_TIME_RANGE",
        }
    }
}

impl fmt::Display for ExportErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static SECRET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(bearer\s+|token=|api[_-]?key=)[^\s&;,]+").expect("Invalid regex")
});

static NETWORK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)network|fetch").expect("Invalid regex"));

/// Mask credential fragments such as `Bearer abc` or `token=abc`.
#[must_use]
pub fn redact(text: &str) -> String {
    SECRET_PATTERN
        .replace_all(text, "${1}[REDACTED]")
        .into_owned()
}

/// A classified export failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportError {
    pub code: ExportErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl ExportError {
    /// Build an error. `details` must already be free of credentials.
    #[must_use]
    pub fn new(code: ExportErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Classify an unexpected pipeline failure by its message.
    ///
    /// Messages mentioning network or fetch become `NETWORK_ERROR`, everything
    /// else `GENERATION_FAILED`. The original message is kept, redacted, as details.
    #[must_use]
    pub fn classify(raw_message: &str) -> Self {
        let is_network = NETWORK_PATTERN.is_match(raw_message);
        let (code, message) = if is_network {
            (
                ExportErrorCode::NetworkError,
                "Network error while fetching analytics data",
            )
        } else {
            (ExportErrorCode::GenerationFailed, "Failed to generate report")
        };
        Self::new(code, message).with_details(redact(raw_message))
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {details}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ExportError {}

/// Final result of one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Success { file_name: String, path: PathBuf },
    Failure(ExportError),
}

impl ExportOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub const fn error(&self) -> Option<&ExportError> {
        match self {
            Self::Failure(err) => Some(err),
            Self::Success { .. } => None,
        }
    }

    /// File name and path of a successful export.
    #[must_use]
    pub fn success(&self) -> Option<(&str, &PathBuf)> {
        match self {
            Self::Success { file_name, path } => Some((file_name.as_str(), path)),
            Self::Failure(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
