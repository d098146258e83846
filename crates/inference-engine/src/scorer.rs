//! Classifier Scorers

use crate::InferenceError;
use feature_engine::FEATURE_DIMENSION;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tract_onnx::prelude::*;

/// Probability at or above which a float model output counts as malignant
pub const DEFAULT_DECISION_THRESHOLD: f32 = 0.5;

/// A loaded classifier that maps a feature vector to a class (0 or 1)
pub trait Scorer {
    fn score(&self, features: &[f32]) -> Result<u8, InferenceError>;
}

/// Scorer that always returns the same class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantScorer(pub u8);

impl Scorer for ConstantScorer {
    fn score(&self, _features: &[f32]) -> Result<u8, InferenceError> {
        Ok(self.0)
    }
}

/// ONNX classifier executed with tract
pub struct OnnxScorer {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    model_path: PathBuf,
    threshold: f32,
}

impl OnnxScorer {
    /// Load and optimise an ONNX classifier taking a `[1, 29]` f32 input
    pub fn load(path: impl AsRef<Path>, threshold: f32) -> Result<Self, InferenceError> {
        let path = path.as_ref();
        info!("Loading classifier model from {}", path.display());

        if !path.is_file() {
            return Err(InferenceError::ModelLoadError(format!(
                "model file not found: {}",
                path.display()
            )));
        }

        let model = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| model.with_input_fact(0, f32::fact([1, FEATURE_DIMENSION]).into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| InferenceError::ModelLoadError(format!("{}: {}", path.display(), e)))?;

        info!("Model loaded successfully (threshold={})", threshold);
        Ok(Self {
            model,
            model_path: path.to_path_buf(),
            threshold,
        })
    }

    /// Get model path
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Decision threshold applied to probability outputs
    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl Scorer for OnnxScorer {
    fn score(&self, features: &[f32]) -> Result<u8, InferenceError> {
        let input: Tensor = tract_ndarray::Array2::from_shape_vec((1, features.len()), features.to_vec())
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?
            .into();

        let outputs = self
            .model
            .run(tvec!(input.into()))
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| InferenceError::InferenceFailed("model produced no outputs".to_string()))?;

        class_from_output(output, self.threshold)
    }
}

/// Read the class from the first model output.
///
/// Integer outputs are class labels. Float outputs are probabilities: either
/// a single malignant probability or one probability per class, in which case
/// the last column is the malignant one.
fn class_from_output(output: &Tensor, threshold: f32) -> Result<u8, InferenceError> {
    let failed = |e: TractError| InferenceError::InferenceFailed(e.to_string());

    match output.datum_type() {
        DatumType::I64 => {
            let label = output
                .as_slice::<i64>()
                .map_err(failed)?
                .first()
                .copied()
                .ok_or_else(|| InferenceError::InferenceFailed("empty label output".to_string()))?;
            debug!("Model label output: {}", label);
            u8::try_from(label)
                .map_err(|_| InferenceError::InferenceFailed(format!("label {} is not a class", label)))
        }
        DatumType::F32 => {
            let shape = output.shape();
            let row = shape.last().copied().unwrap_or(1);
            let probabilities = output.as_slice::<f32>().map_err(failed)?;
            let malignant = probabilities
                .get(row.saturating_sub(1))
                .copied()
                .ok_or_else(|| InferenceError::InferenceFailed("empty probability output".to_string()))?;
            debug!("Model malignant probability: {:.4}", malignant);
            Ok(u8::from(malignant >= threshold))
        }
        other => Err(InferenceError::InferenceFailed(format!(
            "unsupported model output type {:?}",
            other
        ))),
    }
}
