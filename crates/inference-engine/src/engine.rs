//! Prediction Service

use crate::scorer::Scorer;
use crate::InferenceError;
use feature_engine::{EncodedFeatureVector, FeatureEncoder};
use patient_record::{RawPatientRecord, RecordError, Validator};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Tumor type predicted by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredictionLabel {
    /// Class 0
    Benign,
    /// Class 1
    Malignant,
}

impl PredictionLabel {
    /// Map a classifier class to a label
    pub fn from_class(class: u8) -> Result<Self, InferenceError> {
        match class {
            0 => Ok(PredictionLabel::Benign),
            1 => Ok(PredictionLabel::Malignant),
            other => Err(InferenceError::InferenceFailed(format!(
                "classifier returned unknown class {}",
                other
            ))),
        }
    }

    /// Classifier class of this label
    pub fn class(&self) -> u8 {
        match self {
            PredictionLabel::Benign => 0,
            PredictionLabel::Malignant => 1,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionLabel::Benign => "Benign",
            PredictionLabel::Malignant => "Malignant",
        }
    }
}

impl fmt::Display for PredictionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single prediction
#[derive(Debug, Clone, Serialize)]
pub struct InferenceResult {
    /// The predicted label
    pub label: PredictionLabel,
    /// Scoring latency in milliseconds
    pub latency_ms: f64,
}

/// Encodes records and scores them with an injected classifier
pub struct PredictionService<S> {
    scorer: S,
    encoder: FeatureEncoder,
    validator: Validator,
}

impl<S: Scorer> PredictionService<S> {
    /// Create a service around an already loaded scorer
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            encoder: FeatureEncoder::new(),
            validator: Validator::default(),
        }
    }

    /// Predict the label for an encoded vector
    pub fn predict(&self, vector: &EncodedFeatureVector) -> Result<PredictionLabel, InferenceError> {
        self.predict_detailed(vector).map(|result| result.label)
    }

    /// Predict with timing information.
    ///
    /// The vector shape is checked before the scorer sees it.
    pub fn predict_detailed(
        &self,
        vector: &EncodedFeatureVector,
    ) -> Result<InferenceResult, InferenceError> {
        if let Err(err) = vector.validate_shape() {
            warn!("Rejecting feature vector: {}", err);
            metrics::counter!("tumor_predictions_rejected_total", "reason" => "shape_mismatch")
                .increment(1);
            return Err(err.into());
        }

        let start = std::time::Instant::now();
        let class = self.scorer.score(&vector.as_f32())?;
        let label = PredictionLabel::from_class(class)?;
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        metrics::counter!("tumor_predictions_total", "label" => label.as_str()).increment(1);
        metrics::histogram!("tumor_inference_latency_ms").record(latency_ms);
        debug!("Prediction: {} (class={}, latency={:.3}ms)", label, class, latency_ms);

        Ok(InferenceResult { label, latency_ms })
    }

    /// Predict from an externally produced column set.
    ///
    /// Names must match the schema exactly in count and order; otherwise the
    /// scorer is not called.
    pub fn predict_columns<N: AsRef<str>>(
        &self,
        names: &[N],
        values: Vec<f64>,
    ) -> Result<PredictionLabel, InferenceError> {
        let vector = EncodedFeatureVector::from_ordered(names, values).map_err(|err| {
            warn!("Rejecting column set: {}", err);
            metrics::counter!("tumor_predictions_rejected_total", "reason" => "shape_mismatch")
                .increment(1);
            err
        })?;
        self.predict(&vector)
    }

    /// Validate and encode a record, then predict its label
    pub fn classify(&self, record: &RawPatientRecord) -> Result<PredictionLabel, InferenceError> {
        if let Err(err) = self.validator.validate_record(record).into_result() {
            warn!("Rejecting patient record: {}", err);
            metrics::counter!("tumor_predictions_rejected_total", "reason" => "invalid_record")
                .increment(1);
            return Err(RecordError::from(err).into());
        }

        let vector = self.encoder.encode(record);
        self.predict(&vector)
    }

    /// Get the underlying scorer
    pub fn scorer(&self) -> &S {
        &self.scorer
    }
}
