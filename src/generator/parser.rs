//! Response parsing: turns raw model output into a validated table.
//!
//! Model output is expected to carry three parts: a `**Title:**` line, a
//! `### Dataset Summary` block, and a CSV payload whose header row starts
//! with `S.No,`. Title and summary extraction is best-effort with safe
//! defaults; only a missing or empty table aborts the attempt.

use crate::error::{DataSynthError, Result};
use crate::generator::ParsedDataset;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Literal substring marking where prose ends and tabular data begins.
pub const HEADER_MARKER: &str = "S.No,";

/// Title used when the `**Title:**` marker cannot be found.
pub const DEFAULT_TITLE: &str = "Untitled Dataset";

/// Summary used when the `### Dataset Summary` block cannot be found.
pub const DEFAULT_SUMMARY: &str = "Summary not available.";

/// Fill value for short or blank table cells.
pub const MISSING_CELL: &str = "N/A";

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*Title:\*\* (.*?)\n").expect("Invalid regex: title marker"));

static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)### Dataset Summary\n(.*?)\n\n").expect("Invalid regex: summary block")
});

/// Parser for raw model responses.
pub struct ResponseParser;

impl ResponseParser {
    /// Parse a raw model response into a [`ParsedDataset`].
    ///
    /// Title and summary fall back to defaults when their markers are
    /// absent; the table is mandatory. Data rows are squared against the
    /// header: longer rows are truncated, shorter rows are right-padded
    /// with `"N/A"`. Rows are never dropped at this stage.
    ///
    /// # Errors
    ///
    /// Returns [`DataSynthError::MalformedDataset`] if the `S.No,` header
    /// marker is absent or the table has no data rows.
    pub fn parse(raw: &str) -> Result<ParsedDataset> {
        let title = TITLE_RE
            .captures(raw)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let summary = SUMMARY_RE
            .captures(raw)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_else(|| DEFAULT_SUMMARY.to_string());

        // Everything before the header marker is title/summary prose and
        // is discarded for table purposes.
        let table_start = raw
            .find(HEADER_MARKER)
            .ok_or(DataSynthError::MalformedDataset)?;

        let records = Self::read_csv_block(&raw[table_start..])?;
        if records.len() < 2 {
            return Err(DataSynthError::MalformedDataset);
        }

        let headers = records[0].clone();
        let num_columns = headers.len();

        let rows: Vec<Vec<Option<String>>> = records
            .into_iter()
            .skip(1)
            .map(|mut row| {
                row.truncate(num_columns);
                while row.len() < num_columns {
                    row.push(MISSING_CELL.to_string());
                }
                row.into_iter().map(Some).collect()
            })
            .collect();

        debug!(
            "Parsed dataset '{}': {} columns, {} rows",
            title,
            num_columns,
            rows.len()
        );

        Ok(ParsedDataset {
            title,
            summary,
            headers,
            rows,
        })
    }

    /// Read the CSV payload into raw records, tolerating ragged rows.
    fn read_csv_block(text: &str) -> Result<Vec<Vec<String>>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record?;
            records.push(record.iter().map(|cell| cell.to_string()).collect());
        }
        Ok(records)
    }
}

// ============================================================================
// Tests
// ============================================================================
