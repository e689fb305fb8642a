//! Prompt templating for dataset generation requests.

use crate::error::{DataSynthError, Result};

/// A validated request to generate a dataset.
///
/// Immutable once constructed; [`GenerationRequest::new`] rejects zero
/// counts so the prompt template always encodes positive integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    rows: usize,
    feature_columns: usize,
    context: String,
}

impl GenerationRequest {
    /// Create a new generation request.
    ///
    /// `feature_columns` excludes the two mandatory columns (`S.No` and
    /// `Target`) that every generated dataset carries.
    ///
    /// # Errors
    ///
    /// Returns [`DataSynthError::InvalidConfig`] if `rows` or
    /// `feature_columns` is zero.
    pub fn new(rows: usize, feature_columns: usize, context: impl Into<String>) -> Result<Self> {
        if rows == 0 {
            return Err(DataSynthError::InvalidConfig(
                "row count must be at least 1".to_string(),
            ));
        }
        if feature_columns == 0 {
            return Err(DataSynthError::InvalidConfig(
                "feature column count must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            rows,
            feature_columns,
            context: context.into(),
        })
    }

    /// Number of data rows requested.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of feature columns requested (excluding `S.No` and `Target`).
    pub fn feature_columns(&self) -> usize {
        self.feature_columns
    }

    /// Free-text description of the dataset to invent.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Render the instruction prompt for the model.
    ///
    /// The template pins down the three-part output shape the response
    /// parser relies on: a `**Title:**` line, a `### Dataset Summary`
    /// block, and a pure-CSV data block whose header starts with `S.No,`.
    pub fn to_prompt(&self) -> String {
        format!(
            "Generate a structured dataset based on the following context:\n\
             {context}\n\n\
             **Dataset Requirements:**\n\
             - **Title:** Provide only the dataset title.\n\
             - **Summary:** Provide a short summary (5-7 lines).\n\
             - **Data Table Format:**\n\
             \x20 - {rows} rows.\n\
             \x20 - {cols} feature columns.\n\
             \x20 - First column: 'S.No' (Serial Number).\n\
             \x20 - Last column: 'Target' (Categorical: 'Presence' or 'Absence').\n\
             - **Output Format:**\n\
             \x20 - Start with \"**Title:** [dataset title]\".\n\
             \x20 - Then \"### Dataset Summary\" followed by a 5-7 line summary.\n\
             \x20 - Then output structured data in **pure CSV format** (comma-separated, no extra text).\n",
            context = self.context,
            rows = self.rows,
            cols = self.feature_columns,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
