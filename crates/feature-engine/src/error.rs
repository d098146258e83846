//! Feature Error Types

use thiserror::Error;

/// Errors while assembling or checking a feature vector
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    /// Vector length or column order differs from the classifier schema
    #[error("Feature shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },
}
