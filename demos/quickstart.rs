//! Quickstart example demonstrating basic usage of lagscan.
//!
//! Run with: cargo run --example quickstart

use lagscan::core::ObservationSeries;
use lagscan::detection::{detect_period, PeriodDetector, SpectralPeriodDetector};

fn main() {
    // Show the debug line the scan emits in place of an interactive
    // inspection point (RUST_LOG=lagscan=debug).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== lagscan Quickstart ===\n");

    // 1. Build an observation sequence with a repeating block
    let block = [3, 0, 2, 1, 4, 0, 2];
    let values: Vec<i64> = (0..35).map(|i| block[i % block.len()]).collect();
    let series = ObservationSeries::new(values).unwrap().with_name("height");
    println!(
        "Created series {:?} with {} observations",
        series.name().unwrap(),
        series.len()
    );

    // 2. Exact shift-and-compare scan
    println!("\n--- Exact scan ---");
    let scan = detect_period(&series).unwrap();
    match scan.period {
        Some(period) => println!("Detected period: {}", period),
        None => println!("No repeating period within the sequence length"),
    }

    // 3. Spectral estimate on a longer signal
    println!("\n--- Spectral estimate ---");
    let long_values: Vec<i64> = (0..1024)
        .map(|i| (100.0 * (2.0 * std::f64::consts::PI * i as f64 / 16.0).sin()).round() as i64)
        .collect();
    let long_series = ObservationSeries::new(long_values).unwrap();

    let detector = SpectralPeriodDetector::default();
    let estimate = detector.detect(&long_series).unwrap();
    println!(
        "Estimated period: {:?} (confidence {:.2})",
        estimate.period,
        estimate.confidence()
    );
    for candidate in estimate.candidates.iter().take(3) {
        println!("  candidate period {} score {:.3}", candidate.period, candidate.score);
    }
}
