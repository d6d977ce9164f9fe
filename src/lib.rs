//! # lagscan
//!
//! Exact period detection for integer observation sequences.
//!
//! Given an ordered sequence of integers, lagscan finds the smallest
//! positive lag at which the sequence, shifted by that lag, agrees
//! with itself everywhere on the overlapping region. A frequency-domain
//! estimator is included for long sequences where the exact O(N^2)
//! scan is too slow, and a small ingest layer loads a sequence from
//! one column of a delimited file.
//!
//! # Example
//!
//! ```
//! use lagscan::prelude::*;
//!
//! let series = ObservationSeries::new(vec![1, 4, 1, 4, 1, 4]).unwrap();
//! let scan = detect_period(&series).unwrap();
//! assert_eq!(scan.period, Some(2));
//! ```

pub mod core;
pub mod detection;
pub mod error;
pub mod ingest;

pub use error::{LagscanError, Result};

pub mod prelude {
    pub use crate::core::{MissingPolicy, ObservationSeries};
    pub use crate::detection::{
        detect_period, find_period, PeriodDetector, PeriodScan, ShiftCompareDetector,
        SpectralPeriodDetector,
    };
    pub use crate::error::{LagscanError, Result};
    pub use crate::ingest::{read_column, ColumnSelector, CsvIngestOptions};
}
