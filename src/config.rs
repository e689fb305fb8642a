//! Configuration types for dataset generation and analysis.
//!
//! The only required process-wide configuration is the model API credential,
//! read once at startup from the environment. Everything else has sensible
//! defaults and a builder for overrides.

use crate::error::{DataSynthError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the model API credential.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Default cardinality threshold for one-hot encoding.
/// String columns with at most this many distinct values are one-hot
/// encoded; columns above it receive ordinal codes instead.
pub const DEFAULT_CARDINALITY_THRESHOLD: usize = 5;

/// Read the required API credential from the environment.
///
/// # Errors
///
/// Returns [`DataSynthError::MissingApiKey`] if the variable is unset or
/// empty. This is a startup-time fatal condition.
pub fn api_key_from_env() -> Result<String> {
    match std::env::var(API_KEY_ENV_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(DataSynthError::MissingApiKey),
    }
}

/// Configuration for the analysis pipeline and output locations.
///
/// Use [`AppConfig::builder()`] for fluent construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Distinct-value threshold separating one-hot from ordinal encoding.
    /// Default: 5
    pub cardinality_threshold: usize,

    /// Output directory for exported CSV files and reports.
    /// Default: "outputs"
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cardinality_threshold: DEFAULT_CARDINALITY_THRESHOLD,
            output_dir: PathBuf::from("outputs"),
        }
    }
}

impl AppConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for [`AppConfig`].
#[derive(Default)]
pub struct AppConfigBuilder {
    cardinality_threshold: Option<usize>,
    output_dir: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Set the cardinality threshold for one-hot encoding.
    pub fn cardinality_threshold(mut self, threshold: usize) -> Self {
        self.cardinality_threshold = Some(threshold);
        self
    }

    /// Set the output directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Build the configuration, validating all values.
    ///
    /// # Errors
    ///
    /// Returns [`DataSynthError::InvalidConfig`] if the cardinality
    /// threshold is zero.
    pub fn build(self) -> Result<AppConfig> {
        let cardinality_threshold = self
            .cardinality_threshold
            .unwrap_or(DEFAULT_CARDINALITY_THRESHOLD);

        if cardinality_threshold == 0 {
            return Err(DataSynthError::InvalidConfig(
                "cardinality_threshold must be at least 1".to_string(),
            ));
        }

        Ok(AppConfig {
            cardinality_threshold,
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from("outputs")),
        })
    }
}
