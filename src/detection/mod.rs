//! Period detection for integer observation sequences.
//!
//! This module provides two detectors:
//! - Shift-and-compare: exact scan for the smallest lag at which the
//!   sequence repeats
//! - Spectral: FFT periodogram estimate for long sequences

mod shift;
mod spectral;

pub use shift::{aligned_pairs, find_period, ShiftCompareDetector};
pub use spectral::SpectralPeriodDetector;

use crate::core::ObservationSeries;
use crate::error::Result;

/// Where a period candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodSource {
    /// Exact shift-and-compare scan.
    ShiftCompare,
    /// FFT periodogram peak.
    Spectral,
}

/// A period candidate with a confidence score.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedPeriod {
    /// The candidate period (lag).
    pub period: usize,
    /// Confidence in [0, 1]. The exact scan reports 1.0.
    pub score: f64,
    /// Which detector produced this candidate.
    pub source: PeriodSource,
}

/// Result of a period scan.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodScan {
    /// The detected period, or `None` when no lag in range matched.
    pub period: Option<usize>,
    /// All candidates, sorted by score (highest first).
    pub candidates: Vec<DetectedPeriod>,
    /// Name of the detector that produced this result.
    pub method: String,
}

impl PeriodScan {
    /// Check whether a period was found.
    pub fn found(&self) -> bool {
        self.period.is_some()
    }

    /// Confidence of the primary candidate, or 0.0 if none.
    pub fn confidence(&self) -> f64 {
        self.candidates.first().map(|c| c.score).unwrap_or(0.0)
    }
}

/// A period detection algorithm.
pub trait PeriodDetector {
    /// Scan the series for a repeating period.
    fn detect(&self, series: &ObservationSeries) -> Result<PeriodScan>;

    /// Name of the detection method.
    fn name(&self) -> &'static str;
}

/// Detect the period of a series using the exact shift-and-compare scan
/// with default settings (trivial lag 0 excluded).
pub fn detect_period(series: &ObservationSeries) -> Result<PeriodScan> {
    ShiftCompareDetector::default().detect(series)
}
