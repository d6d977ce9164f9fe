//! ObservationSeries data structure for ordered integer observations.

use crate::error::{LagscanError, Result};

/// Policy for handling missing values in nullable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Drop positions with missing values.
    Drop,
    /// Fill missing positions with a specific value.
    Fill(i64),
    /// Return an error if missing values are found.
    Error,
}

/// An ordered sequence of integer observations.
///
/// The sequence is loaded once and read many times: there is no way to
/// mutate the values after construction. A constructed series is always
/// non-empty and contains no missing values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationSeries {
    values: Vec<i64>,
    name: Option<String>,
}

impl ObservationSeries {
    /// Create a series from fully-defined values.
    ///
    /// Returns `EmptyData` when `values` is empty.
    pub fn new(values: Vec<i64>) -> Result<Self> {
        if values.is_empty() {
            return Err(LagscanError::EmptyData);
        }
        Ok(Self { values, name: None })
    }

    /// Create a series from nullable values, resolving missing
    /// positions according to `policy`.
    ///
    /// Returns `MissingValues` under `MissingPolicy::Error` when any
    /// position is undefined, and `EmptyData` when nothing remains
    /// after the policy is applied.
    pub fn from_optional(values: Vec<Option<i64>>, policy: MissingPolicy) -> Result<Self> {
        let resolved: Vec<i64> = match policy {
            MissingPolicy::Error => {
                if values.iter().any(|v| v.is_none()) {
                    return Err(LagscanError::MissingValues);
                }
                values.into_iter().flatten().collect()
            }
            MissingPolicy::Drop => values.into_iter().flatten().collect(),
            MissingPolicy::Fill(fill_value) => values
                .into_iter()
                .map(|v| v.unwrap_or(fill_value))
                .collect(),
        };

        Self::new(resolved)
    }

    /// Attach a name, e.g. the source column header.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get the observation values.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series is empty. Always false for a constructed
    /// series; kept for the conventional len/is_empty pair.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the series name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Convert to floating point for spectral analysis.
    pub fn to_f64(&self) -> Vec<f64> {
        self.values.iter().map(|&v| v as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_constructs_from_values() {
        let series = ObservationSeries::new(vec![1, 4, 1, 4]).unwrap();

        assert_eq!(series.len(), 4);
        assert!(!series.is_empty());
        assert_eq!(series.values(), &[1, 4, 1, 4]);
        assert!(series.name().is_none());
    }

    #[test]
    fn series_rejects_empty_input() {
        let result = ObservationSeries::new(vec![]);
        assert_eq!(result, Err(LagscanError::EmptyData));
    }

    #[test]
    fn series_carries_a_name() {
        let series = ObservationSeries::new(vec![1, 2, 3])
            .unwrap()
            .with_name("heights");
        assert_eq!(series.name(), Some("heights"));
    }

    #[test]
    fn from_optional_error_policy_rejects_missing() {
        let values = vec![Some(1), None, Some(3)];
        let result = ObservationSeries::from_optional(values, MissingPolicy::Error);
        assert_eq!(result, Err(LagscanError::MissingValues));
    }

    #[test]
    fn from_optional_error_policy_accepts_complete_input() {
        let values = vec![Some(1), Some(2), Some(3)];
        let series = ObservationSeries::from_optional(values, MissingPolicy::Error).unwrap();
        assert_eq!(series.values(), &[1, 2, 3]);
    }

    #[test]
    fn from_optional_drop_policy_removes_missing() {
        let values = vec![None, Some(1), None, Some(3), None];
        let series = ObservationSeries::from_optional(values, MissingPolicy::Drop).unwrap();
        assert_eq!(series.values(), &[1, 3]);
    }

    #[test]
    fn from_optional_fill_policy_substitutes_missing() {
        let values = vec![Some(1), None, Some(3)];
        let series = ObservationSeries::from_optional(values, MissingPolicy::Fill(0)).unwrap();
        assert_eq!(series.values(), &[1, 0, 3]);
    }

    #[test]
    fn from_optional_all_missing_is_empty() {
        let values = vec![None, None];
        let result = ObservationSeries::from_optional(values, MissingPolicy::Drop);
        assert_eq!(result, Err(LagscanError::EmptyData));
    }

    #[test]
    fn to_f64_preserves_order_and_values() {
        let series = ObservationSeries::new(vec![-2, 0, 5]).unwrap();
        assert_eq!(series.to_f64(), vec![-2.0, 0.0, 5.0]);
    }
}
