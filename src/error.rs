//! Error types for the lagscan library.

use thiserror::Error;

/// Result type alias for lagscan operations.
pub type Result<T> = std::result::Result<T, LagscanError>;

/// Errors that can occur while loading or scanning observation sequences.
///
/// A scan that finds no period is not an error; it is reported as a
/// `None` period by the detection APIs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LagscanError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Missing values detected when not allowed.
    #[error("missing values detected in data")]
    MissingValues,

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Index out of bounds.
    #[error("index out of bounds: {index} (size: {size})")]
    IndexOutOfBounds { index: usize, size: usize },

    /// Requested column does not exist in the input.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// A field could not be parsed as an integer.
    #[error("non-integer value at row {row}: {value:?}")]
    NonIntegerValue { row: usize, value: String },

    /// Error from the underlying CSV reader.
    #[error("csv read error: {0}")]
    Csv(String),
}
