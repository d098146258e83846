//! Record Error Types

use thiserror::Error;

/// Errors during numeric range validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// NaN or infinite value
    #[error("{field} value is not a finite number")]
    NotFinite { field: &'static str },
}

/// Errors while turning form input into a patient record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// Categorical attribute holds a value outside its declared domain
    #[error("Invalid category for {field}: {value:?} (expected one of: {expected})")]
    InvalidCategory {
        field: &'static str,
        value: String,
        expected: String,
    },

    /// Numeric attribute failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
