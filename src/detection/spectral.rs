//! Frequency-domain period estimation.
//!
//! Computes the periodogram of a series and reports spectral peaks
//! above the noise floor as period candidates. Unlike the exact
//! shift-and-compare scan this is an estimate: candidate periods are
//! quantized to `n / k` for integer frequency indices `k`, and noisy
//! or short inputs can miss or blur the true period. Use it when the
//! O(N^2) exact scan is too slow and an approximate answer suffices.

use super::{DetectedPeriod, PeriodDetector, PeriodScan, PeriodSource};
use crate::core::ObservationSeries;
use crate::error::{LagscanError, Result};
use rustfft::{num_complex::Complex64, FftPlanner};

// Powers below this are treated as numerical noise, so an exactly
// constant series produces no peaks.
const MIN_PEAK_POWER: f64 = 1e-9;

/// FFT periodogram period detector.
///
/// Peaks must exceed `power_threshold` times the noise floor (the
/// median power over the considered period range) to count as
/// candidates. `max_period` defaults to half the series length.
#[derive(Debug, Clone)]
pub struct SpectralPeriodDetector {
    /// Multiplier over the noise floor for peak selection.
    pub power_threshold: f64,
    /// Minimum period to consider.
    pub min_period: usize,
    /// Maximum period to consider. Defaults to `n / 2`.
    pub max_period: Option<usize>,
}

impl Default for SpectralPeriodDetector {
    fn default() -> Self {
        Self {
            power_threshold: 3.0,
            min_period: 2,
            max_period: None,
        }
    }
}

impl SpectralPeriodDetector {
    /// Create a detector considering periods in `[min_period, max_period]`.
    pub fn new(min_period: usize, max_period: usize) -> Self {
        Self {
            power_threshold: 3.0,
            min_period,
            max_period: Some(max_period),
        }
    }

    /// Set the peak-selection threshold.
    pub fn with_power_threshold(mut self, threshold: f64) -> Self {
        self.power_threshold = threshold;
        self
    }

    /// Compute (period, power) pairs for the signal.
    ///
    /// Power is `|X[k]|^2 / n` for frequency index `k`, period is
    /// `n / k`. The DC component is skipped.
    fn periodogram(&self, signal: &[f64]) -> Vec<(usize, f64)> {
        let n = signal.len();

        let mut buffer: Vec<Complex64> =
            signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(n);
        fft.process(&mut buffer);

        let n_f64 = n as f64;
        let mut result = Vec::with_capacity(n / 2);

        // Positive frequencies only; the input is real so the
        // spectrum is symmetric.
        for (k, value) in buffer.iter().enumerate().take(n / 2 + 1).skip(1) {
            let period = n / k;
            if period < 2 {
                break;
            }
            let power = value.norm_sqr() / n_f64;
            result.push((period, power));
        }

        result
    }
}

impl PeriodDetector for SpectralPeriodDetector {
    fn detect(&self, series: &ObservationSeries) -> Result<PeriodScan> {
        let signal = series.to_f64();
        let n = signal.len();
        if n < 4 {
            return Err(LagscanError::InsufficientData { needed: 4, got: n });
        }
        if self.min_period < 2 {
            return Err(LagscanError::InvalidParameter(
                "min_period must be at least 2".to_string(),
            ));
        }

        let max_period = self.max_period.unwrap_or(n / 2).min(n / 2);
        let psd: Vec<(usize, f64)> = self
            .periodogram(&signal)
            .into_iter()
            .filter(|(p, _)| *p >= self.min_period && *p <= max_period)
            .collect();

        if psd.is_empty() {
            return Ok(PeriodScan {
                period: None,
                candidates: Vec::new(),
                method: self.name().to_string(),
            });
        }

        // Noise floor: median power over the considered range.
        let mut powers: Vec<f64> = psd.iter().map(|(_, p)| *p).collect();
        powers.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let noise_floor = if powers.len() % 2 == 0 {
            (powers[powers.len() / 2 - 1] + powers[powers.len() / 2]) / 2.0
        } else {
            powers[powers.len() / 2]
        };

        let peak_threshold = noise_floor * self.power_threshold;
        let total_power: f64 = psd.iter().map(|(_, p)| p).sum();

        let mut candidates: Vec<DetectedPeriod> = psd
            .iter()
            .filter(|(_, power)| *power > peak_threshold && *power > MIN_PEAK_POWER)
            .map(|&(period, power)| DetectedPeriod {
                period,
                score: (power / total_power).clamp(0.0, 1.0),
                source: PeriodSource::Spectral,
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(PeriodScan {
            period: candidates.first().map(|c| c.period),
            candidates,
            method: self.name().to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "spectral"
    }
}
