//! Analysis flow for user-supplied CSV files.
//!
//! Independent of the generation flow: ingests a CSV, encodes categorical
//! columns numerically, and computes descriptive statistics for every
//! numeric column.

mod encoder;
mod stats;

pub use stats::ColumnSummary;

use crate::config::AppConfig;
use crate::error::Result;
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, error, info};

/// Outcome of one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// The table with every categorical column numerically encoded.
    pub data: DataFrame,
    /// Per-numeric-column descriptive statistics of the encoded table.
    pub summaries: Vec<ColumnSummary>,
    /// Human-readable description of each encoding applied.
    pub actions: Vec<String>,
}

/// Encodes categorical columns and summarizes an uploaded table.
pub struct AnalysisPipeline {
    cardinality_threshold: usize,
}

impl AnalysisPipeline {
    /// Create a pipeline from the application configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            cardinality_threshold: config.cardinality_threshold,
        }
    }

    /// Create a pipeline with an explicit cardinality threshold.
    pub fn with_threshold(cardinality_threshold: usize) -> Self {
        Self {
            cardinality_threshold,
        }
    }

    /// Run the analysis: encode categoricals, then summarize.
    pub fn analyze(&self, df: DataFrame) -> Result<AnalysisResult> {
        let (data, actions) = encoder::encode_categoricals(&df, self.cardinality_threshold)?;
        let summaries = stats::summarize_numeric_columns(&data)?;

        info!(
            "Analyzed table: {} rows x {} columns, {} columns encoded, {} numeric summaries",
            data.height(),
            data.width(),
            actions.len(),
            summaries.len()
        );

        Ok(AnalysisResult {
            data,
            summaries,
            actions,
        })
    }
}

/// Load a CSV file with multiple fallback strategies.
///
/// Malformed files from ad-hoc exports are common; try standard parsing
/// first, then without quote handling, then after pre-cleaning the raw
/// content.
pub fn load_csv(path: &Path) -> Result<DataFrame> {
    // Strategy 1: standard loading with quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Standard CSV loading failed: {}", e);
        }
    }

    // Strategy 2: without quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("CSV loading without quotes failed: {}", e);
        }
    }

    // Strategy 3: pre-clean content
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cleaned = clean_csv_content(&content);
            let cursor = std::io::Cursor::new(cleaned);

            CsvReadOptions::default()
                .with_infer_schema_length(Some(100))
                .with_has_header(true)
                .into_reader_with_file_handle(cursor)
                .finish()
                .map_err(Into::into)
        }
        Err(e) => {
            error!("Could not read file: {}", e);
            Err(e.into())
        }
    }
}

/// Strip stray quote doubling and blank lines from raw CSV content.
fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Tests
// ============================================================================
