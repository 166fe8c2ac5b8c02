//! Deterministic data reduction applied before charting.
//!
//! Two policies bound the size of a chart's input:
//! - top-N by value for distributions (stable: equal values keep input order)
//! - even-interval sampling for time series (`step = ceil(count / cap)`)

use tracing::debug;

/// Maximum slices in a distribution chart.
pub const MAX_DISTRIBUTION_POINTS: usize = 50;

/// Maximum points in a time-series chart.
pub const MAX_TIMESERIES_POINTS: usize = 100;

/// Anything with a numeric magnitude that top-N can rank.
pub trait Measured {
    fn measure(&self) -> f64;
}

/// How a dataset was reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReductionPolicy {
    TopN,
    EvenInterval,
}

/// Output of a reduction.
///
/// `truncated == (original_count > cap)`. For top-N, `data.len() == min(original_count, cap)`;
/// for sampling, `data.len() <= cap`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReductionResult<T> {
    pub data: Vec<T>,
    pub truncated: bool,
    pub original_count: usize,
    pub policy: ReductionPolicy,
}

impl<T> ReductionResult<T> {
    const fn unchanged(data: Vec<T>, original_count: usize, policy: ReductionPolicy) -> Self {
        Self {
            data,
            truncated: false,
            original_count,
            policy,
        }
    }

    /// Sentence describing what was omitted, or `None` when nothing was.
    ///
    /// `noun` names the items being counted, e.g. "countries".
    #[must_use]
    pub fn note(&self, noun: &str) -> Option<String> {
        if !self.truncated {
            return None;
        }

        let shown = self.data.len();
        let total = self.original_count;
        Some(match self.policy {
            ReductionPolicy::TopN => format!("Showing top {shown} of {total} {noun}."),
            ReductionPolicy::EvenInterval => {
                format!("Showing {shown} of {total} {noun}, sampled at even intervals.")
            }
        })
    }
}

/// Keep the `cap` largest items, sorted descending by value.
///
/// Inputs with `len <= cap` are returned untouched (not re-sorted).
#[must_use]
pub fn top_n_by_value<T: Measured>(mut items: Vec<T>, cap: usize) -> ReductionResult<T> {
    let original_count = items.len();
    if original_count <= cap {
        return ReductionResult::unchanged(items, original_count, ReductionPolicy::TopN);
    }

    // `sort_by` is stable, so ties keep their input order.
    items.sort_by(|a, b| b.measure().total_cmp(&a.measure()));
    items.truncate(cap);

    debug!(original_count, kept = cap, "truncated distribution to top-N");
    ReductionResult {
        data: items,
        truncated: true,
        original_count,
        policy: ReductionPolicy::TopN,
    }
}

/// Keep indices `0, step, 2*step, ...` with `step = ceil(len / cap)`.
///
/// Yields at most `cap` points in input order. The final point is not guaranteed
/// to survive.
#[must_use]
pub fn sample_even_interval<T>(items: Vec<T>, cap: usize) -> ReductionResult<T> {
    let original_count = items.len();
    let cap = cap.max(1);
    if original_count <= cap {
        return ReductionResult::unchanged(items, original_count, ReductionPolicy::EvenInterval);
    }

    let step = original_count.div_ceil(cap);
    let data: Vec<T> = items.into_iter().step_by(step).collect();

    debug!(original_count, step, kept = data.len(), "sampled time series");
    ReductionResult {
        data,
        truncated: true,
        original_count,
        policy: ReductionPolicy::EvenInterval,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
