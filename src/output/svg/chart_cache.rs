//! Content-addressed memoization of rendered charts.

use std::collections::HashMap;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::chart::{ChartSpec, RenderedChart, render_chart};
use crate::format::FormatCache;

/// Rendered charts keyed by the SHA-256 of their full input.
///
/// Owned by one document build; identical specs within that build render once.
#[derive(Debug, Default)]
pub struct ChartCache {
    entries: HashMap<String, RenderedChart>,
    hits: u64,
    misses: u64,
}

impl ChartCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `spec`, reusing a previous result for identical input.
    pub fn render(&mut self, spec: &ChartSpec, formats: &mut FormatCache) -> RenderedChart {
        let key = cache_key(spec);
        if let Some(cached) = self.entries.get(&key) {
            self.hits += 1;
            debug!(title = %spec.title, "Chart cache hit");
            return cached.clone();
        }

        self.misses += 1;
        let rendered = render_chart(spec, formats);
        self.entries.insert(key, rendered.clone());
        rendered
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }
}

/// Hex SHA-256 over kind, points, size, title, palette and unit.
///
/// Variable-length fields are length-prefixed so adjacent fields cannot alias.
#[must_use]
pub fn cache_key(spec: &ChartSpec) -> String {
    fn put_str(hasher: &mut Sha256, s: &str) {
        hasher.update((s.len() as u64).to_le_bytes());
        hasher.update(s.as_bytes());
    }

    let mut hasher = Sha256::new();
    put_str(&mut hasher, spec.kind.as_str());
    hasher.update((spec.points.len() as u64).to_le_bytes());
    for point in &spec.points {
        put_str(&mut hasher, &point.label);
        hasher.update(point.value.to_bits().to_le_bytes());
    }
    hasher.update(spec.width.to_bits().to_le_bytes());
    hasher.update(spec.height.to_bits().to_le_bytes());
    put_str(&mut hasher, &spec.title);
    hasher.update((spec.palette.len() as u64).to_le_bytes());
    for index in 0..spec.palette.len() {
        put_str(&mut hasher, &spec.palette.color_at(index).to_css());
    }
    put_str(&mut hasher, &format!("{:?}", spec.unit));
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
#[path = "chart_cache_tests.rs"]
mod tests;
