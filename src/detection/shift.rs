//! Exact period detection via shift-and-compare.
//!
//! Scans candidate lags in increasing order and reports the first lag
//! at which the sequence, shifted by that lag, agrees with itself
//! everywhere on the overlapping region. O(N^2) worst case, intended
//! for small-to-moderate sequences; see the spectral detector for an
//! estimate that scales better.

use super::{DetectedPeriod, PeriodDetector, PeriodScan, PeriodSource};
use crate::core::ObservationSeries;
use crate::error::{LagscanError, Result};
use tracing::debug;

/// Build the aligned pair sequence for a lag.
///
/// Pairs `(values[k], values[k - lag])` for `k` in `lag..n`: the
/// overlapping region between the sequence and a copy of itself
/// shifted forward by `lag`. Positions where the shifted copy is
/// undefined are dropped, so the result always has length `n - lag`.
///
/// Returns `IndexOutOfBounds` when `lag >= n` (no overlap remains).
pub fn aligned_pairs(values: &[i64], lag: usize) -> Result<Vec<(i64, i64)>> {
    if values.is_empty() {
        return Err(LagscanError::EmptyData);
    }
    if lag >= values.len() {
        return Err(LagscanError::IndexOutOfBounds {
            index: lag,
            size: values.len(),
        });
    }

    Ok(values
        .iter()
        .skip(lag)
        .zip(values.iter())
        .map(|(&current, &lagged)| (current, lagged))
        .collect())
}

/// Check whether the sequence repeats at a given lag.
///
/// True when every aligned pair is equal, i.e. the tail starting at
/// `lag` matches the head of the same length.
fn matches_at_lag(values: &[i64], lag: usize) -> bool {
    let n = values.len();
    values[lag..] == values[..n - lag]
}

/// Find the smallest lag at which the sequence exactly repeats.
///
/// Candidate lags are tested in increasing order from 1 to `n - 1`;
/// the first match wins. Lag 0 is excluded: it compares the sequence
/// to itself and would trivially always match. Returns `Ok(None)` when
/// no lag in range matches, and `EmptyData` on an empty slice.
pub fn find_period(values: &[i64]) -> Result<Option<usize>> {
    ShiftCompareDetector::default().scan(values)
}

/// Exact shift-and-compare period detector.
///
/// `min_lag` defaults to 1, skipping the trivial self-comparison at
/// lag 0; set it to 0 to recover the literal scan that always matches
/// immediately. `max_lag` optionally caps the scan range.
#[derive(Debug, Clone)]
pub struct ShiftCompareDetector {
    /// Smallest lag to test.
    pub min_lag: usize,
    /// Largest lag to test (inclusive). Defaults to `n - 1`.
    pub max_lag: Option<usize>,
}

impl Default for ShiftCompareDetector {
    fn default() -> Self {
        Self {
            min_lag: 1,
            max_lag: None,
        }
    }
}

impl ShiftCompareDetector {
    /// Create a detector scanning lags in `[min_lag, max_lag]`.
    pub fn new(min_lag: usize, max_lag: usize) -> Self {
        Self {
            min_lag,
            max_lag: Some(max_lag),
        }
    }

    /// Set the smallest lag to test.
    pub fn with_min_lag(mut self, min_lag: usize) -> Self {
        self.min_lag = min_lag;
        self
    }

    /// Set the largest lag to test.
    pub fn with_max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = Some(max_lag);
        self
    }

    /// Scan a raw slice for the smallest repeating lag.
    pub fn scan(&self, values: &[i64]) -> Result<Option<usize>> {
        if values.is_empty() {
            return Err(LagscanError::EmptyData);
        }

        let n = values.len();
        let upper = self.max_lag.map_or(n - 1, |m| m.min(n - 1));
        debug!(n, min_lag = self.min_lag, max_lag = upper, "scanning for repeating lag");

        for lag in self.min_lag..=upper {
            if matches_at_lag(values, lag) {
                debug!(lag, "sequence repeats");
                return Ok(Some(lag));
            }
        }

        Ok(None)
    }
}

impl PeriodDetector for ShiftCompareDetector {
    fn detect(&self, series: &ObservationSeries) -> Result<PeriodScan> {
        let period = self.scan(series.values())?;

        let candidates = period
            .map(|p| {
                vec![DetectedPeriod {
                    period: p,
                    score: 1.0,
                    source: PeriodSource::ShiftCompare,
                }]
            })
            .unwrap_or_default();

        Ok(PeriodScan {
            period,
            candidates,
            method: self.name().to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "shift-compare"
    }
}
