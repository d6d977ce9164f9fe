//! Core data structures.

mod series;

pub use series::{MissingPolicy, ObservationSeries};
