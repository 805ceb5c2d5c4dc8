//! Error types with diagnostics using miette
//!
//! The engine rejects bad parameter sets up front and never produces partial
//! output; every failure names the offending field.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors that occur while laying out or rendering a plate
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum PlateError {
    #[error("invalid dimension `{field}`: {value} ({reason})")]
    #[diagnostic(
        code(plateview::invalid_dimension),
        help("plate width and height must be positive, finite millimeter values")
    )]
    InvalidDimension {
        field: &'static str,
        value: f64,
        reason: NumericError,
    },

    #[error("`{field}` out of range: {value} (expected {expected})")]
    #[diagnostic(code(plateview::invalid_range))]
    InvalidRange {
        field: &'static str,
        value: String,
        expected: String,
    },
}

impl PlateError {
    pub(crate) fn dimension(field: &'static str, value: f64, reason: NumericError) -> Self {
        PlateError::InvalidDimension { field, value, reason }
    }

    pub(crate) fn range(
        field: &'static str,
        value: impl ToString,
        expected: impl Into<String>,
    ) -> Self {
        PlateError::InvalidRange {
            field,
            value: value.to_string(),
            expected: expected.into(),
        }
    }

    /// Name of the parameter that caused the failure
    pub fn field(&self) -> &'static str {
        match self {
            PlateError::InvalidDimension { field, .. } | PlateError::InvalidRange { field, .. } => {
                field
            }
        }
    }
}
