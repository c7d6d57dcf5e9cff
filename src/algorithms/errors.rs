//! Error types for the step engine
//!
//! This module defines [`SortError`], which covers every way a sort request can be
//! rejected. All of them are input or programmer errors: they are reported before
//! the first step is produced and are never retried.

use std::fmt;

/// Errors raised while selecting or starting a sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A value-indexed algorithm was given input it cannot bucket
    InvalidInput {
        algorithm: &'static str,
        reason: InvalidInputReason,
    },

    /// Algorithm name not in the supported set
    UnknownAlgorithm { name: String },

    /// Materialized step history would exceed its memory budget
    SnapshotLimitExceeded { current: usize, limit: usize },
}

/// Why an input array was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInputReason {
    Empty,
    NegativeValue { index: usize, value: i64 },
    TooFewElements { len: usize, min: usize },
    ValueTooLarge { value: i64, limit: i64 },
}

impl SortError {
    pub(crate) fn invalid(algorithm: &'static str, reason: InvalidInputReason) -> Self {
        SortError::InvalidInput { algorithm, reason }
    }

    /// True for precondition failures on the input array
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SortError::InvalidInput { .. })
    }
}

impl fmt::Display for InvalidInputReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputReason::Empty => write!(f, "array is empty"),
            InvalidInputReason::NegativeValue { index, value } => {
                write!(f, "negative value {} at index {}", value, index)
            }
            InvalidInputReason::TooFewElements { len, min } => {
                write!(
                    f,
                    "array has {} element{}, at least {} required",
                    len,
                    if *len == 1 { "" } else { "s" },
                    min
                )
            }
            InvalidInputReason::ValueTooLarge { value, limit } => {
                write!(f, "value {} exceeds the limit of {}", value, limit)
            }
        }
    }
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::InvalidInput { algorithm, reason } => {
                write!(f, "Invalid input for {}: {}", algorithm, reason)
            }
            SortError::UnknownAlgorithm { name } => {
                write!(f, "Sorting algorithm '{}' is not defined", name)
            }
            SortError::SnapshotLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Snapshot memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
        }
    }
}

impl std::error::Error for SortError {}
