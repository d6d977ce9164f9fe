//! Integration tests for period detection end-to-end.

use lagscan::core::{MissingPolicy, ObservationSeries};
use lagscan::detection::{
    detect_period, PeriodDetector, ShiftCompareDetector, SpectralPeriodDetector,
};
use lagscan::ingest::{read_column, ColumnSelector, CsvIngestOptions};
use lagscan::LagscanError;
use std::path::Path;

fn fixture_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("observations.csv")
}

#[test]
fn csv_fixture_has_period_seven() {
    let series = read_column(
        fixture_path(),
        &ColumnSelector::Name("height".to_string()),
        &CsvIngestOptions::default(),
    )
    .expect("fixture should load");

    assert_eq!(series.len(), 42);
    assert_eq!(series.name(), Some("height"));

    let scan = detect_period(&series).unwrap();
    assert_eq!(scan.period, Some(7));
    assert_eq!(scan.confidence(), 1.0);
}

#[test]
fn csv_fixture_other_column_has_no_period() {
    // The step column is strictly increasing, so no lag can match.
    let series = read_column(
        fixture_path(),
        &ColumnSelector::Name("step".to_string()),
        &CsvIngestOptions::default(),
    )
    .unwrap();

    let scan = detect_period(&series).unwrap();
    assert_eq!(scan.period, None);
}

#[test]
fn missing_file_is_a_csv_error() {
    let result = read_column(
        Path::new("tests/data/does_not_exist.csv"),
        &ColumnSelector::Index(0),
        &CsvIngestOptions::default(),
    );
    assert!(matches!(result, Err(LagscanError::Csv(_))));
}

#[test]
fn alternating_pair_scenario() {
    let series = ObservationSeries::new(vec![1, 4, 1, 4, 1, 4]).unwrap();
    let scan = detect_period(&series).unwrap();
    assert_eq!(scan.period, Some(2));
}

#[test]
fn constant_sequence_scenario() {
    let series = ObservationSeries::new(vec![5, 5, 5, 5, 5]).unwrap();
    let scan = detect_period(&series).unwrap();
    assert_eq!(scan.period, Some(1));
}

#[test]
fn no_repetition_scenario() {
    let series = ObservationSeries::new(vec![1, 2, 3, 4, 5]).unwrap();
    let scan = detect_period(&series).unwrap();
    assert_eq!(scan.period, None);
    assert!(!scan.found());
}

#[test]
fn detectors_agree_on_exactly_periodic_data() {
    // Long integer sine: the exact scan finds the true period, the
    // spectral estimate should land on the same value.
    let values: Vec<i64> = (0..512)
        .map(|i| (100.0 * (2.0 * std::f64::consts::PI * i as f64 / 16.0).sin()).round() as i64)
        .collect();
    let series = ObservationSeries::new(values).unwrap();

    let exact = ShiftCompareDetector::default().detect(&series).unwrap();
    let spectral = SpectralPeriodDetector::default().detect(&series).unwrap();

    assert_eq!(exact.period, Some(16));
    assert_eq!(spectral.period, Some(16));
}

#[test]
fn drop_policy_recovers_period_from_gappy_input() {
    // Whole repetitions of a block with missing rows dropped in
    // block-sized groups keep the sequence exactly periodic.
    let values = vec![
        Some(1),
        Some(9),
        Some(4),
        None,
        None,
        None,
        Some(1),
        Some(9),
        Some(4),
        Some(1),
        Some(9),
        Some(4),
    ];
    let series = ObservationSeries::from_optional(values, MissingPolicy::Drop).unwrap();
    let scan = detect_period(&series).unwrap();
    assert_eq!(scan.period, Some(3));
}

#[test]
fn scan_results_are_reproducible() {
    let series = ObservationSeries::new(vec![2, 6, 2, 6, 2, 6, 2, 6]).unwrap();
    let first = detect_period(&series).unwrap();
    let second = detect_period(&series).unwrap();
    assert_eq!(first, second);
}
