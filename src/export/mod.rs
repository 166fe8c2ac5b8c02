//! Export orchestration: the staged pipeline, its collaborator traits, the
//! outward error taxonomy and the local collaborators used by the CLI.

mod collaborators;
mod exporter;
mod file_name;
mod local;
mod outcome;
mod watchdog;

pub use collaborators::{
    DataSource, FetchRequest, FileRenderer, Progress, ProgressSink, StorageChecker,
};
pub use exporter::{Clock, Exporter, aggregate_progress, validate_sufficiency};
pub use file_name::{FALLBACK_ZONE_NAME, export_file_name, file_timestamp, sanitize_zone_name};
pub use local::{DiskSpaceChecker, HtmlFileRenderer, JsonFileDataSource};
pub use outcome::{ExportError, ExportErrorCode, ExportOutcome, redact};
pub use watchdog::{SLOW_EXPORT_MESSAGE, SlowExportWatchdog};
