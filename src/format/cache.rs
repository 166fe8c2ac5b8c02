use std::collections::HashMap;

use super::{UnitKind, format_value};

/// Memoizes formatted values for one document build.
///
/// Keyed by `(kind, value bits)`. Owned by a single build and cleared at its start,
/// so entries never leak between reports.
#[derive(Debug, Default)]
pub struct FormatCache {
    entries: HashMap<(UnitKind, u64), String>,
    hits: u64,
    misses: u64,
}

impl FormatCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Format `value`, reusing a previous result for the same `(kind, value)`.
    pub fn format(&mut self, value: f64, kind: UnitKind) -> String {
        let key = (kind, value.to_bits());
        if let Some(cached) = self.entries.get(&key) {
            self.hits += 1;
            return cached.clone();
        }

        self.misses += 1;
        let formatted = format_value(value, kind);
        self.entries.insert(key, formatted.clone());
        formatted
    }

    /// Drop all entries and reset the counters.
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

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
