//! The staged export pipeline.
//!
//! Stages run strictly in sequence, each reporting a non-decreasing
//! percentage through the request's [`ProgressSink`]:
//!
//! | stage                | progress  | failure              |
//! |----------------------|-----------|----------------------|
//! | validate time range  | 0         | `INVALID_TIME_RANGE` |
//! | check storage        | 5         | `STORAGE_FULL`       |
//! | aggregate            | 10 to 70  | classified           |
//! | validate sufficiency | 75        | `INVALID_DATA`       |
//! | assemble             | 80        | classified           |
//! | render               | 90        | classified           |
//! | complete             | 100       |                      |

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::collaborators::{
    DataSource, FetchRequest, FileRenderer, Progress, ProgressSink, StorageChecker,
};
use super::file_name::export_file_name;
use super::outcome::{ExportError, ExportErrorCode, ExportOutcome};
use super::watchdog::SlowExportWatchdog;
use crate::config::{Config, ExportConfig};
use crate::error::ReportError;
use crate::model::{AnalyticsBundle, ExportCategory, ReportRequest};
use crate::output::{DocumentAssembler, RenderContext};

const AGGREGATE_START: usize = 10;
const AGGREGATE_SPAN: usize = 60;

/// Source of "now" for validation, file names and the report header.
pub type Clock = fn() -> DateTime<Utc>;

/// Why a stage stopped the pipeline.
enum StageFailure {
    /// A stage rejected the export with a specific code.
    Rejected(ExportError),
    /// Anything else; classified by message at the boundary.
    Unexpected(ReportError),
}

impl From<ReportError> for StageFailure {
    fn from(error: ReportError) -> Self {
        Self::Unexpected(error)
    }
}

impl From<ExportError> for StageFailure {
    fn from(error: ExportError) -> Self {
        Self::Rejected(error)
    }
}

impl StageFailure {
    fn into_export_error(self) -> ExportError {
        match self {
            Self::Rejected(error) => error,
            Self::Unexpected(error) => ExportError::classify(&error.to_string()),
        }
    }
}

/// Forwards percentages to the sink, dropping any that would go backwards.
struct ProgressReporter {
    sink: Option<Arc<dyn ProgressSink>>,
    last: AtomicU8,
}

impl ProgressReporter {
    fn new(sink: Option<Arc<dyn ProgressSink>>) -> Self {
        Self {
            sink,
            last: AtomicU8::new(0),
        }
    }

    fn report(&self, percent: u8, message: &str) {
        let percent = percent.min(100);
        let previous = self.last.fetch_max(percent, Ordering::AcqRel);
        if percent < previous {
            debug!(percent, previous, "Ignoring out-of-order progress");
            return;
        }
        debug!(percent, "{message}");
        if let Some(sink) = &self.sink {
            sink.report(Progress::Percent(percent), message);
        }
    }
}

/// Progress after the `done`-th of `total` category fetches.
#[must_use]
pub fn aggregate_progress(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 70;
    }
    let value = AGGREGATE_START + AGGREGATE_SPAN * done.min(total) / total;
    u8::try_from(value).unwrap_or(70)
}

/// Runs exports against a data source, storage check and file renderer.
pub struct Exporter<D, S, R> {
    source: D,
    storage: S,
    renderer: R,
    settings: ExportConfig,
    assembler: DocumentAssembler,
    clock: Clock,
}

impl<D, S, R> Exporter<D, S, R>
where
    D: DataSource,
    S: StorageChecker,
    R: FileRenderer,
{
    /// Create an exporter with default settings and the system clock.
    #[must_use]
    pub fn new(source: D, storage: S, renderer: R) -> Self {
        Self {
            source,
            storage,
            renderer,
            settings: ExportConfig::default(),
            assembler: DocumentAssembler::default(),
            clock: Utc::now,
        }
    }

    /// Apply export, chart and theme settings from a loaded config.
    #[must_use]
    pub fn with_config(mut self, config: &Config) -> Self {
        self.settings = config.export.clone();
        self.assembler = DocumentAssembler::new(config.charts.clone(), config.theme.clone());
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn data_source(&self) -> &D {
        &self.source
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run one export to completion. Never panics and never returns early
    /// without an outcome; every failure is mapped onto an [`ExportErrorCode`].
    pub async fn export(&self, request: &ReportRequest) -> ExportOutcome {
        info!(
            zone = %request.zone_name,
            category = %request.category,
            "Starting export"
        );

        let reporter = ProgressReporter::new(request.progress.clone());
        let watchdog =
            SlowExportWatchdog::start(self.settings.slow_warning(), request.progress.clone());

        let result = self.run_stages(request, &reporter).await;
        drop(watchdog);

        match result {
            Ok((file_name, path)) => {
                reporter.report(100, "Export complete");
                info!(file = %file_name, path = %path.display(), "Export complete");
                ExportOutcome::Success { file_name, path }
            }
            Err(failure) => {
                let error = failure.into_export_error();
                warn!(code = %error.code, "Export failed: {}", error.message);
                ExportOutcome::Failure(error)
            }
        }
    }

    async fn run_stages(
        &self,
        request: &ReportRequest,
        reporter: &ProgressReporter,
    ) -> Result<(String, PathBuf), StageFailure> {
        reporter.report(0, "Validating time range");
        self.validate_time_range(request)?;

        reporter.report(5, "Checking available storage");
        self.check_storage()?;

        reporter.report(10, "Fetching analytics data");
        let bundle = self.aggregate(request, reporter).await?;

        reporter.report(75, "Validating data");
        validate_sufficiency(request.category, &bundle)?;

        reporter.report(80, "Building report");
        let now = (self.clock)();
        let mut ctx = RenderContext::new();
        let document = self.assembler.assemble(request, &bundle, now, &mut ctx);

        reporter.report(90, "Saving report");
        let file_name = export_file_name(
            &self.settings.product_prefix,
            &request.zone_name,
            now,
            self.renderer.extension(),
        );
        let path = self.renderer.render(&document, &file_name).await?;

        Ok((file_name, path))
    }

    fn validate_time_range(&self, request: &ReportRequest) -> Result<(), ExportError> {
        if request.start > request.end {
            return Err(ExportError::new(
                ExportErrorCode::InvalidTimeRange,
                "Start time must not be after end time",
            )
            .with_details(format!("start {} is after end {}", request.start, request.end)));
        }

        let now = (self.clock)();
        if request.start > now || request.end > now {
            return Err(ExportError::new(
                ExportErrorCode::InvalidTimeRange,
                "Time range must not extend into the future",
            ));
        }
        Ok(())
    }

    fn check_storage(&self) -> Result<(), ExportError> {
        let required = self.settings.storage_estimate_bytes;
        if self.storage.has_free_space(required) {
            return Ok(());
        }
        Err(
            ExportError::new(ExportErrorCode::StorageFull, "Insufficient storage space")
                .with_details(format!("{required} bytes required")),
        )
    }

    async fn aggregate(
        &self,
        request: &ReportRequest,
        reporter: &ProgressReporter,
    ) -> Result<AnalyticsBundle, ReportError> {
        let categories = request.category.requested();
        let total = categories.len();
        let mut bundle = AnalyticsBundle::default();

        for (index, category) in categories.into_iter().enumerate() {
            let fetch = FetchRequest {
                category,
                zone_id: request.zone_id.clone(),
                account_tag: request.account_tag.clone(),
                start: request.start,
                end: request.end,
            };

            match self.source.fetch(fetch).await? {
                Some(record) if record.category() == category => bundle.insert(record),
                Some(record) => warn!(
                    requested = %category,
                    received = %record.category(),
                    "Data source returned a record for the wrong category, ignoring it"
                ),
                None => debug!(category = %category, "No data for category"),
            }

            reporter.report(
                aggregate_progress(index + 1, total),
                &format!("Fetched {} data", category.title()),
            );
        }

        info!(populated = bundle.populated().len(), requested = total, "Aggregation finished");
        Ok(bundle)
    }
}

/// Check the bundle can support a report for `category`.
///
/// # Errors
/// `INVALID_DATA` when the single requested category is absent or empty, or
/// when a full export has neither traffic nor security data.
pub fn validate_sufficiency(
    category: ExportCategory,
    bundle: &AnalyticsBundle,
) -> Result<(), ExportError> {
    match category {
        ExportCategory::Full => {
            if bundle.has(ExportCategory::Traffic) || bundle.has(ExportCategory::Security) {
                Ok(())
            } else {
                Err(
                    ExportError::new(ExportErrorCode::InvalidData, "Insufficient data for report")
                        .with_details("Neither traffic nor security data is available"),
                )
            }
        }
        single if bundle.has(single) => Ok(()),
        single => Err(
            ExportError::new(ExportErrorCode::InvalidData, "Insufficient data for report")
                .with_details(format!(
                    "No {} data available for the selected period",
                    single.title()
                )),
        ),
    }
}

#[cfg(test)]
#[path = "exporter_tests.rs"]
mod tests;
