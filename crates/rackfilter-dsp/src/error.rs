//! Error types for filter construction and configuration.
//!
//! Per-sample processing never fails. Only control-rate operations that
//! allocate or reshape a filter return these errors.

use rackfilter_spec::{SpecError, ValidationError};
use thiserror::Error;

/// Result type for filter configuration.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors raised while building or reconfiguring a filter.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Variable-order form requested with order zero.
    #[error("order must be 1 or greater, got {order}")]
    InvalidOrder {
        /// The rejected order.
        order: usize,
    },

    /// Coefficient slice length does not match the filter shape.
    #[error("invalid coefficient length for '{name}': expected {expected}, found {actual}")]
    CoefficientLength {
        /// Coefficient array name.
        name: &'static str,
        /// Expected length.
        expected: usize,
        /// Provided length.
        actual: usize,
    },

    /// Design rejected by validation.
    #[error("invalid design: {}", format_errors(.0))]
    InvalidDesign(Vec<ValidationError>),

    /// Design parse or validation error.
    #[error(transparent)]
    Spec(#[from] SpecError),
}

impl FilterError {
    /// Creates a coefficient length error.
    pub fn length(name: &'static str, expected: usize, actual: usize) -> Self {
        Self::CoefficientLength {
            name,
            expected,
            actual,
        }
    }

    /// Short machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            FilterError::InvalidOrder { .. } => "FILTER_001",
            FilterError::CoefficientLength { .. } => "FILTER_002",
            FilterError::InvalidDesign(_) => "FILTER_003",
            FilterError::Spec(_) => "FILTER_004",
        }
    }
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks a coefficient slice length.
pub(crate) fn check_length(name: &'static str, expected: usize, actual: usize) -> FilterResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(FilterError::length(name, expected, actual))
    }
}
