use super::svg::ChartCache;
use crate::format::FormatCache;

/// Memoization state for one document build.
///
/// Each build owns its context and resets it before starting, so concurrent
/// exports never share cached output.
#[derive(Debug, Default)]
pub struct RenderContext {
    pub formats: FormatCache,
    pub charts: ChartCache,
}

impl RenderContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear both caches and their counters.
    pub fn reset(&mut self) {
        self.formats.clear();
        self.charts.clear();
    }
}
