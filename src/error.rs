//! Custom error types for dataset generation and CSV analysis.
//!
//! This module provides the error hierarchy for the crate using `thiserror`.
//! Every failure is local to one user action: nothing is retried
//! automatically, and every error path leaves the process ready to accept
//! a fresh invocation.

use thiserror::Error;

/// The main error type for dataset generation and analysis.
#[derive(Error, Debug)]
pub enum DataSynthError {
    /// Required API credential missing at startup. Fatal.
    #[error("OPENAI_API_KEY is missing! Please set it in your environment variables.")]
    MissingApiKey,

    /// Model output lacks the expected title/summary/table structure.
    ///
    /// Raised when the table start cannot be located or the table has no
    /// data rows. Terminal for the current generation attempt; the user
    /// must re-submit the request.
    #[error("AI-generated dataset format is incorrect. Please try again.")]
    MalformedDataset,

    /// Any failure from the model-call collaborator (auth, network, quota).
    ///
    /// The collaborator's message is surfaced verbatim.
    #[error("Model call failed: {0}")]
    ModelCall(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// CSV parsing/serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error (only with the "ai" feature).
    #[cfg(feature = "ai")]
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<DataSynthError>,
    },
}

impl DataSynthError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        DataSynthError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code for display and scripting.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "MISSING_API_KEY",
            Self::MalformedDataset => "MALFORMED_DATASET",
            Self::ModelCall(_) => "MODEL_CALL_FAILED",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Csv(_) => "CSV_ERROR",
            Self::Json(_) => "JSON_ERROR",
            #[cfg(feature = "ai")]
            Self::HttpRequest(_) => "HTTP_REQUEST_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error can be resolved by re-submitting the request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::MalformedDataset | Self::ModelCall(_))
    }
}

/// Result type alias for datasynth operations.
pub type Result<T> = std::result::Result<T, DataSynthError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DataSynthError::Polars(e).with_context(context))
    }
}
