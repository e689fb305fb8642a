//! Dataset generation flow: prompt -> model call -> parse -> normalize.
//!
//! The [`Generator`] owns a [`ModelProvider`] and drives one generation
//! attempt end to end. Failures are terminal for the attempt; the caller
//! re-submits manually.

mod normalizer;
mod parser;
mod prompt;

pub use normalizer::TabularNormalizer;
pub use parser::{DEFAULT_SUMMARY, DEFAULT_TITLE, HEADER_MARKER, MISSING_CELL, ResponseParser};
pub use prompt::GenerationRequest;

use crate::ai::ModelProvider;
use crate::error::{DataSynthError, Result};
use polars::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

/// A dataset extracted from raw model output.
///
/// Every row has exactly the same number of cells as the header row.
/// `None` cells model structurally-missing values; the response parser
/// itself never produces them (it pads with the `"N/A"` text instead),
/// but direct constructors may.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDataset {
    /// Dataset title, or `"Untitled Dataset"` when unextractable.
    pub title: String,
    /// Dataset summary, or `"Summary not available."` when unextractable.
    pub summary: String,
    /// Column names, taken from the first row after the header marker.
    pub headers: Vec<String>,
    /// Data rows, squared to the header width.
    pub rows: Vec<Vec<Option<String>>>,
}

/// A normalized dataset ready for presentation and export.
///
/// Invariants: no all-missing column, no all-missing row, no blank cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDataset {
    pub title: String,
    pub summary: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl From<NormalizedDataset> for ParsedDataset {
    fn from(normalized: NormalizedDataset) -> Self {
        ParsedDataset {
            title: normalized.title,
            summary: normalized.summary,
            headers: normalized.headers,
            rows: normalized
                .rows
                .into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        }
    }
}

impl NormalizedDataset {
    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Convert into a Polars DataFrame of string columns.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let columns: Vec<Column> = self
            .headers
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let values: Vec<&str> = self.rows.iter().map(|row| row[idx].as_str()).collect();
                Series::new(name.as_str().into(), values).into_column()
            })
            .collect();
        Ok(DataFrame::new(columns)?)
    }
}

/// Drives one dataset generation attempt end to end.
pub struct Generator {
    provider: Arc<dyn ModelProvider>,
}

static_assertions::assert_impl_all!(Generator: Send, Sync);

impl Generator {
    /// Create a generator backed by the given model provider.
    pub fn new(provider: Arc<dyn ModelProvider>) -> Self {
        Self { provider }
    }

    /// Generate a dataset from a request.
    ///
    /// # Errors
    ///
    /// Returns [`DataSynthError::ModelCall`] when the provider fails (the
    /// collaborator's message is surfaced verbatim) and
    /// [`DataSynthError::MalformedDataset`] when the response lacks a
    /// usable table. No partial result is produced on failure.
    pub fn generate(&self, request: &GenerationRequest) -> Result<NormalizedDataset> {
        let prompt = request.to_prompt();
        debug!(
            "Requesting {} rows x {} feature columns from {}",
            request.rows(),
            request.feature_columns(),
            self.provider.name()
        );

        let raw = self
            .provider
            .complete(&prompt)
            .map_err(|e| DataSynthError::ModelCall(e.to_string()))?;

        let parsed = ResponseParser::parse(&raw)?;
        let dataset = TabularNormalizer::normalize(parsed);

        info!(
            "Generated dataset '{}' ({} rows x {} columns)",
            dataset.title,
            dataset.height(),
            dataset.width()
        );

        Ok(dataset)
    }
}

// ============================================================================
// Tests
// ============================================================================
