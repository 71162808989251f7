#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl GenericError {
    /// Joins many errors with separator
    pub fn join_many(errs: &[GenericError], separator: &str) -> String {
        errs.iter().map(|err| err.0.clone()).collect::<Vec<_>>().join(separator)
    }
}

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

/// An error produced by the differential evolution engine.
#[derive(Clone, Debug, PartialEq)]
pub enum DeError {
    /// Run configuration is invalid: detected before any evaluation starts.
    Configuration(String),

    /// Vector length does not match the amount of constraints.
    DimensionMismatch {
        /// Amount of dimensions defined by constraints.
        expected: usize,
        /// Actual amount of dimensions.
        actual: usize,
    },

    /// Dimension index is out of constraint set range.
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Amount of constraints.
        size: usize,
    },

    /// Objective function failed to evaluate an individual.
    Evaluation {
        /// Index of the individual inside the evaluated batch.
        index: usize,
        /// Error message reported by objective function.
        message: String,
    },
}

/// A type alias for result type with `DeError`.
pub type DeResult<T> = Result<T, DeError>;

impl DeError {
    /// Returns true if error is caused by a wrong configuration.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, DeError::Evaluation { .. })
    }
}

impl Display for DeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DeError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            DeError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            DeError::OutOfRange { index, size } => {
                write!(f, "invalid constraint index: {index}, higher than max number of constraints: {size}")
            }
            DeError::Evaluation { index, message } => {
                write!(f, "objective function error at batch index {index}: {message}")
            }
        }
    }
}

impl std::error::Error for DeError {}

impl From<GenericError> for DeError {
    fn from(value: GenericError) -> Self {
        DeError::Configuration(value.0)
    }
}
