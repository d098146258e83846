//! Application configuration

use config::{Config, ConfigError, Environment, File};
use inference_engine::DEFAULT_DECISION_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Level;

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "TUMOR_CLASSIFIER";

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_VAR: &str = "TUMOR_CLASSIFIER_CONFIG";

/// Config file read when no other is named
pub const DEFAULT_CONFIG_FILE: &str = "tumor-classifier.toml";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// ONNX classifier artifact
    pub model_path: PathBuf,
    /// Malignant probability threshold for probability outputs
    pub decision_threshold: f32,
    /// Maximum log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/tumor_classifier.onnx"),
            decision_threshold: DEFAULT_DECISION_THRESHOLD,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl AppConfig {
    /// Load defaults, then the config file, then `TUMOR_CLASSIFIER_*` variables
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_with(Path::new(&path), Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from an optional file and an explicit environment source
    pub fn load_with(file: &Path, env: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config: Self = Config::builder()
            .set_default("model_path", defaults.model_path.to_string_lossy().into_owned())?
            .set_default("decision_threshold", defaults.decision_threshold as f64)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_json", defaults.log_json)?
            .add_source(File::from(file).required(false))
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check values the type system cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.decision_threshold) {
            return Err(ConfigError::Message(format!(
                "decision_threshold must be within [0, 1], got {}",
                self.decision_threshold
            )));
        }
        self.level()?;
        Ok(())
    }

    /// Parsed log level
    pub fn level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::Message(format!("unknown log level: {}", self.log_level)))
    }
}
