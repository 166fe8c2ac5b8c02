//! Advisory soft timeout for long-running exports.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::warn;

use super::collaborators::{Progress, ProgressSink};

pub const SLOW_EXPORT_MESSAGE: &str = "Export is taking longer than expected";

/// Emits one [`Progress::SlowWarning`] if still alive after the threshold.
///
/// Never touches the pipeline itself. Dropping the guard cancels it, so the
/// warning cannot arrive after the export has finished.
#[derive(Debug)]
pub struct SlowExportWatchdog {
    handle: JoinHandle<()>,
    finished: Arc<AtomicBool>,
}

impl SlowExportWatchdog {
    /// Start the timer. Must be called from within a tokio runtime.
    #[must_use]
    pub fn start(after: Duration, sink: Option<Arc<dyn ProgressSink>>) -> Self {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&finished);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if flag.load(Ordering::Acquire) {
                return;
            }
            warn!(after_secs = after.as_secs(), "{SLOW_EXPORT_MESSAGE}");
            if let Some(sink) = sink {
                sink.report(Progress::SlowWarning, SLOW_EXPORT_MESSAGE);
            }
        });

        Self { handle, finished }
    }
}

impl Drop for SlowExportWatchdog {
    fn drop(&mut self) {
        self.finished.store(true, Ordering::Release);
        self.handle.abort();
    }
}

#[cfg(test)]
#[path = "watchdog_tests.rs"]
mod tests;
