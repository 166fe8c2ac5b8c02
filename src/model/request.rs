use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::{ExportCategory, Theme};
use crate::export::ProgressSink;

/// Everything needed to export one report.
#[derive(Clone)]
pub struct ReportRequest {
    pub zone_id: String,
    pub zone_name: String,
    pub account_tag: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub category: ExportCategory,
    /// Overrides the configured theme when set.
    pub theme: Option<Theme>,
    pub progress: Option<Arc<dyn ProgressSink>>,
}

impl ReportRequest {
    #[must_use]
    pub fn new(
        zone_id: impl Into<String>,
        zone_name: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            zone_id: zone_id.into(),
            zone_name: zone_name.into(),
            account_tag: None,
            start,
            end,
            category: ExportCategory::Full,
            theme: None,
            progress: None,
        }
    }

    #[must_use]
    pub const fn with_category(mut self, category: ExportCategory) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_account_tag(mut self, account_tag: impl Into<String>) -> Self {
        self.account_tag = Some(account_tag.into());
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    #[must_use]
    pub fn with_progress(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.progress = Some(sink);
        self
    }
}

impl fmt::Debug for ReportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportRequest")
            .field("zone_id", &self.zone_id)
            .field("zone_name", &self.zone_name)
            .field("account_tag", &self.account_tag)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("category", &self.category)
            .field("theme", &self.theme)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}
