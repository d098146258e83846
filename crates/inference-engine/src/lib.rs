//! Tumor Classifier Inference
//!
//! Wraps a loaded classifier behind the [`Scorer`] trait and maps its class
//! output to a [`PredictionLabel`].

mod engine;
mod scorer;

pub use engine::{InferenceResult, PredictionLabel, PredictionService};
pub use scorer::{ConstantScorer, OnnxScorer, Scorer, DEFAULT_DECISION_THRESHOLD};

use feature_engine::FeatureError;
use patient_record::RecordError;
use thiserror::Error;

/// Errors during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model load failed: {0}")]
    ModelLoadError(String),
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },
    #[error("Invalid patient record: {0}")]
    InvalidRecord(#[from] RecordError),
}

impl InferenceError {
    /// Whether the process can keep serving after this error.
    ///
    /// Only a failed model load is fatal.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, InferenceError::ModelLoadError(_))
    }
}

impl From<FeatureError> for InferenceError {
    fn from(err: FeatureError) -> Self {
        match err {
            FeatureError::ShapeMismatch { expected, actual } => {
                InferenceError::ShapeMismatch { expected, actual }
            }
        }
    }
}
