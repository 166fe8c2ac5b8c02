//! Boundaries between the export pipeline and the outside world.

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::model::{CategoryRecord, ExportCategory};

/// One per-category data request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub category: ExportCategory,
    pub zone_id: String,
    pub account_tag: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Supplies typed analytics records.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch one category; `Ok(None)` when the source has nothing for it.
    ///
    /// # Errors
    /// Any failure of the underlying source. Errors are not retried.
    async fn fetch(&self, request: FetchRequest) -> Result<Option<CategoryRecord>>;
}

/// Reports whether the output location can take a new artifact.
pub trait StorageChecker: Send + Sync {
    fn has_free_space(&self, bytes: u64) -> bool;
}

/// Persists a serialized document.
#[async_trait]
pub trait FileRenderer: Send + Sync {
    /// Extension of produced artifacts, without the dot.
    fn extension(&self) -> &str;

    /// Write `document` under `file_name` and return where it landed.
    ///
    /// # Errors
    /// Returns an error if the artifact cannot be written.
    async fn render(&self, document: &str, file_name: &str) -> Result<PathBuf>;
}

/// A progress notification value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Completion percentage, 0 to 100.
    Percent(u8),
    /// Advisory: the export is taking longer than expected.
    SlowWarning,
}

impl Progress {
    /// Numeric value as delivered to callers; the slow warning is `-1`.
    #[must_use]
    pub fn value(self) -> i16 {
        match self {
            Self::Percent(p) => i16::from(p),
            Self::SlowWarning => -1,
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{p}%"),
            Self::SlowWarning => write!(f, "slow"),
        }
    }
}

/// Receives progress notifications. Fire-and-forget; must not fail.
pub trait ProgressSink: Send + Sync {
    fn report(&self, progress: Progress, message: &str);
}

impl<F> ProgressSink for F
where
    F: Fn(Progress, &str) + Send + Sync,
{
    fn report(&self, progress: Progress, message: &str) {
        self(progress, message);
    }
}

#[cfg(test)]
#[path = "collaborators_tests.rs"]
mod tests;
