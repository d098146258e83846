//! Brain Tumor Classifier - Main Entry Point

use anyhow::Context;
use classifier_app::{init_logging, serve, AppConfig};
use inference_engine::{OnnxScorer, PredictionService};
use std::io;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config)?;

    info!("=== Tumor Classifier v{} ===", env!("CARGO_PKG_VERSION"));

    // A missing or unreadable model ends the process before any input is read
    let scorer = OnnxScorer::load(&config.model_path, config.decision_threshold)
        .context("Classifier model could not be loaded")?;
    let service = PredictionService::new(scorer);

    info!("Reading patient submissions from stdin, one JSON object per line");
    let summary = serve(&service, io::stdin().lock(), io::stdout().lock())?;
    info!(
        "Finished: {} predicted, {} rejected",
        summary.predicted, summary.rejected
    );

    Ok(())
}
