//! Input validation errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a parameter set is rejected before any calculation runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field was blank or absent
    #[error("Missing required field: {0}")]
    Missing(&'static str),
    /// A field could not be parsed as a finite number
    #[error("Field {field} is not a valid number: {value:?}")]
    NotNumeric { field: String, value: String },
    /// A field parsed but lies outside its allowed range
    #[error("Field {field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// A money amount below zero
    #[error("Field {field} = {value} must not be negative")]
    Negative { field: &'static str, value: Decimal },
    /// A field name that no input maps to
    #[error("Unknown field: {0}")]
    UnknownField(String),
}
