//! Tumor Classifier Console Front End
//!
//! Reads one patient form per line as JSON, runs encode and predict for each,
//! and renders the predicted tumor type. Rejected submissions are reported
//! and the loop moves on to the next line.

mod config;

pub use crate::config::{AppConfig, CONFIG_PATH_VAR, DEFAULT_CONFIG_FILE, ENV_PREFIX};

use anyhow::Context;
use inference_engine::{InferenceError, PredictionLabel, PredictionService, Scorer};
use patient_record::{PatientForm, RawPatientRecord, RecordError};
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::FmtSubscriber;

/// Advisory printed after every prediction
pub const DISCLAIMER: &str =
    "Note: This prediction is based on the provided data and should be confirmed by a medical professional.";

/// Why a single submission could not be answered
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Malformed submission: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl SubmissionError {
    /// Whether the front end can ask for the next submission
    pub fn is_recoverable(&self) -> bool {
        match self {
            SubmissionError::Inference(err) => err.is_recoverable(),
            SubmissionError::Malformed(_) | SubmissionError::Record(_) => true,
        }
    }
}

/// Counts of handled submissions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeSummary {
    pub predicted: usize,
    pub rejected: usize,
}

/// Initialize logging
pub fn init_logging(config: &AppConfig) -> anyhow::Result<()> {
    let builder = FmtSubscriber::builder()
        .with_max_level(config.level()?)
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    }
    .context("Failed to set tracing subscriber")
}

/// Parse, validate, encode and predict a single JSON submission
pub fn handle_submission<S: Scorer>(
    service: &PredictionService<S>,
    line: &str,
) -> Result<PredictionLabel, SubmissionError> {
    let form: PatientForm = serde_json::from_str(line)?;
    let record = RawPatientRecord::from_form(&form)?;
    Ok(service.classify(&record)?)
}

/// Render a prediction for display
pub fn render_prediction<W: Write>(mut out: W, label: PredictionLabel) -> std::io::Result<()> {
    writeln!(out, "Predicted Tumor Type: {}", label)?;
    writeln!(out, "{}", DISCLAIMER)
}

/// Serve submissions until the input ends
pub fn serve<S, R, W>(
    service: &PredictionService<S>,
    input: R,
    mut output: W,
) -> anyhow::Result<ServeSummary>
where
    S: Scorer,
    R: BufRead,
    W: Write,
{
    let mut summary = ServeSummary::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line.context("Failed to read submission")?;
        if line.trim().is_empty() {
            continue;
        }

        match handle_submission(service, &line) {
            Ok(label) => {
                debug!("Submission {} predicted {}", idx + 1, label);
                render_prediction(&mut output, label)?;
                summary.predicted += 1;
            }
            Err(err) if err.is_recoverable() => {
                warn!("Submission {} rejected: {}", idx + 1, err);
                writeln!(output, "Error: {}", err)?;
                summary.rejected += 1;
            }
            Err(err) => return Err(err).context(format!("Submission {} failed", idx + 1)),
        }
        output.flush()?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inference_engine::ConstantScorer;
    use std::io::Cursor;

    const SCENARIO: &str = r#"{"age": 45, "tumor_size": 3.2, "survival_rate": 75, "tumor_growth_rate": 1.2, "gender": "Male", "radiation_treatment": "Yes", "surgery_performed": "No", "chemotherapy": "Yes", "family_history": "No", "follow_up_required": "Yes", "tumor_location": "Parietal", "tumor_histology": "Meningioma", "tumor_stage": "III", "symptom_1": "Seizures", "symptom_2": "Nausea", "symptom_3": "Vision Issues", "mri_result": "Positive"}"#;

    /// Fails every call as if the model had vanished
    struct UnloadedScorer;

    impl Scorer for UnloadedScorer {
        fn score(&self, _features: &[f32]) -> Result<u8, InferenceError> {
            Err(InferenceError::ModelLoadError("model released".to_string()))
        }
    }

    fn run<S: Scorer>(service: &PredictionService<S>, input: &str) -> (ServeSummary, String) {
        let mut out = Vec::new();
        let summary = serve(service, Cursor::new(input), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_scenario_renders_malignant() {
        let service = PredictionService::new(ConstantScorer(1));
        let (summary, out) = run(&service, SCENARIO);

        assert_eq!(summary, ServeSummary { predicted: 1, rejected: 0 });
        assert_eq!(out, format!("Predicted Tumor Type: Malignant\n{}\n", DISCLAIMER));
    }

    #[test]
    fn test_rejections_do_not_stop_the_loop() {
        let service = PredictionService::new(ConstantScorer(0));
        let input = [
            "{\"tumor_stage\": \"V\"}",
            "",
            "not json",
            "{\"survival_rate\": 140}",
            "{}",
        ]
        .join("\n");

        let (summary, out) = run(&service, &input);
        assert_eq!(summary, ServeSummary { predicted: 1, rejected: 3 });

        let lines: Vec<_> = out.lines().collect();
        assert!(lines[0].starts_with("Error: Invalid category for tumor_stage"));
        assert!(lines[1].starts_with("Error: Malformed submission"));
        assert!(lines[2].contains("survival_rate value 140"));
        assert_eq!(lines[3], "Predicted Tumor Type: Benign");
    }

    #[test]
    fn test_spaceless_symptom_label_accepted() {
        let service = PredictionService::new(ConstantScorer(1));
        let label = handle_submission(&service, r#"{"symptom_1": "VisionIssues"}"#).unwrap();
        assert_eq!(label, PredictionLabel::Malignant);
    }

    #[test]
    fn test_fatal_error_aborts() {
        let service = PredictionService::new(UnloadedScorer);
        let mut out = Vec::new();
        let result = serve(&service, Cursor::new("{}\n{}\n"), &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_handle_submission_errors_are_typed() {
        let service = PredictionService::new(ConstantScorer(1));
        let err = handle_submission(&service, r#"{"gender": "Unknown"}"#).unwrap_err();
        assert!(matches!(
            err,
            SubmissionError::Record(RecordError::InvalidCategory { field: "gender", .. })
        ));
        assert!(err.is_recoverable());
    }
}
