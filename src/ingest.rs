//! Loading observation sequences from delimited files.
//!
//! The detection core only needs an ordered sequence of integers; this
//! module pulls one such column out of a CSV-like file. Empty or
//! whitespace-only fields count as missing values and are resolved by
//! the configured [`MissingPolicy`].

use crate::core::{MissingPolicy, ObservationSeries};
use crate::error::{LagscanError, Result};
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Which column to read as the observation sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Zero-based column index.
    Index(usize),
    /// Column header name. Requires headers to be enabled.
    Name(String),
}

/// Options for reading a delimited file.
#[derive(Debug, Clone)]
pub struct CsvIngestOptions {
    /// Delimiter character (default: comma).
    pub delimiter: u8,
    /// Whether the first row is a header row (default: true).
    pub has_headers: bool,
    /// How to handle missing (empty) fields (default: error).
    pub missing: MissingPolicy,
}

impl Default for CsvIngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
            missing: MissingPolicy::Error,
        }
    }
}

impl CsvIngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether the input has a header row.
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Set the missing-value policy.
    pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.missing = policy;
        self
    }
}

/// Read one integer column from a delimited file.
pub fn read_column(
    path: impl AsRef<Path>,
    column: &ColumnSelector,
    options: &CsvIngestOptions,
) -> Result<ObservationSeries> {
    let file = std::fs::File::open(path.as_ref())
        .map_err(|e| LagscanError::Csv(format!("{}: {}", path.as_ref().display(), e)))?;
    read_column_from_reader(file, column, options)
}

/// Read one integer column from any reader of delimited data.
pub fn read_column_from_reader(
    reader: impl Read,
    column: &ColumnSelector,
    options: &CsvIngestOptions,
) -> Result<ObservationSeries> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_headers)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let (index, name) = resolve_column(&mut csv_reader, column, options.has_headers)?;

    let mut values: Vec<Option<i64>> = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| LagscanError::Csv(e.to_string()))?;
        let field = record.get(index).unwrap_or("");

        if field.is_empty() {
            values.push(None);
        } else {
            let value = field
                .parse::<i64>()
                .map_err(|_| LagscanError::NonIntegerValue {
                    row,
                    value: field.to_string(),
                })?;
            values.push(Some(value));
        }
    }

    debug!(rows = values.len(), column = ?column, "loaded observation column");

    let series = ObservationSeries::from_optional(values, options.missing)?;
    Ok(match name {
        Some(n) => series.with_name(n),
        None => series,
    })
}

/// Resolve the selector to a column index and optional header name.
fn resolve_column(
    reader: &mut csv::Reader<impl Read>,
    column: &ColumnSelector,
    has_headers: bool,
) -> Result<(usize, Option<String>)> {
    match column {
        ColumnSelector::Index(index) => {
            let name = if has_headers {
                let headers = reader
                    .headers()
                    .map_err(|e| LagscanError::Csv(e.to_string()))?;
                headers.get(*index).map(|h| h.to_string())
            } else {
                None
            };
            Ok((*index, name))
        }
        ColumnSelector::Name(name) => {
            if !has_headers {
                return Err(LagscanError::InvalidParameter(
                    "column selection by name requires headers".to_string(),
                ));
            }
            let headers = reader
                .headers()
                .map_err(|e| LagscanError::Csv(e.to_string()))?;
            let index = headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LagscanError::ColumnNotFound(name.clone()))?;
            Ok((index, Some(name.clone())))
        }
    }
}
