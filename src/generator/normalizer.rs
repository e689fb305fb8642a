//! Tabular normalization: fills blank cells and removes empty rows/columns.

use crate::generator::parser::MISSING_CELL;
use crate::generator::{NormalizedDataset, ParsedDataset};
use tracing::debug;

/// Post-processor for parsed datasets.
///
/// Normalization is a total function: it never fails, and applying it to
/// an already-normalized dataset changes nothing.
pub struct TabularNormalizer;

impl TabularNormalizer {
    /// Normalize a parsed dataset.
    ///
    /// Columns and rows whose every data cell is structurally missing are
    /// dropped; the drop masks are computed before substitution, so cells
    /// that merely hold the text `"N/A"` never count as missing. Remaining
    /// `None` and empty-string cells become `"N/A"`.
    pub fn normalize(parsed: ParsedDataset) -> NormalizedDataset {
        let num_columns = parsed.headers.len();

        // Structural-missing masks, evaluated on the raw cells.
        // Vacuously-empty axes are kept: with no data rows there is no
        // evidence a column is empty.
        let keep_column: Vec<bool> = (0..num_columns)
            .map(|col| {
                parsed.rows.is_empty()
                    || parsed.rows.iter().any(|row| row[col].is_some())
            })
            .collect();

        let keep_row: Vec<bool> = parsed
            .rows
            .iter()
            .map(|row| row.is_empty() || row.iter().any(|cell| cell.is_some()))
            .collect();

        let headers: Vec<String> = parsed
            .headers
            .into_iter()
            .zip(&keep_column)
            .filter(|(_, keep)| **keep)
            .map(|(name, _)| name)
            .collect();

        let rows: Vec<Vec<String>> = parsed
            .rows
            .into_iter()
            .zip(&keep_row)
            .filter(|(_, keep)| **keep)
            .map(|(row, _)| {
                row.into_iter()
                    .zip(&keep_column)
                    .filter(|(_, keep)| **keep)
                    .map(|(cell, _)| Self::fill_cell(cell))
                    .collect()
            })
            .collect();

        debug!(
            "Normalized dataset '{}': {} columns, {} rows",
            parsed.title,
            headers.len(),
            rows.len()
        );

        NormalizedDataset {
            title: parsed.title,
            summary: parsed.summary,
            headers,
            rows,
        }
    }

    /// Substitute a missing or blank cell with the `"N/A"` sentinel.
    fn fill_cell(cell: Option<String>) -> String {
        match cell {
            Some(value) if !value.is_empty() => value,
            _ => MISSING_CELL.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parsed(headers: &[&str], rows: Vec<Vec<Option<&str>>>) -> ParsedDataset {
        ParsedDataset {
            title: "Test".to_string(),
            summary: "Test summary.".to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|c| c.map(str::to_string)).collect())
                .collect(),
        }
    }

    #[test]
    fn test_blank_and_missing_cells_become_na() {
        let input = parsed(
            &["S.No", "City", "Target"],
            vec![
                vec![Some("1"), Some(""), Some("Presence")],
                vec![Some("2"), None, Some("Absence")],
            ],
        );

        let normalized = TabularNormalizer::normalize(input);
        assert_eq!(normalized.rows[0], vec!["1", "N/A", "Presence"]);
        assert_eq!(normalized.rows[1], vec!["2", "N/A", "Absence"]);
    }

    #[test]
    fn test_all_missing_column_dropped() {
        let input = parsed(
            &["S.No", "Ghost", "Target"],
            vec![
                vec![Some("1"), None, Some("Presence")],
                vec![Some("2"), None, Some("Absence")],
            ],
        );

        let normalized = TabularNormalizer::normalize(input);
        assert_eq!(normalized.headers, vec!["S.No", "Target"]);
        assert_eq!(normalized.rows[0], vec!["1", "Presence"]);
    }

    #[test]
    fn test_na_text_column_is_not_dropped() {
        // Only structurally-missing columns are dropped, not columns that
        // happen to be full of "N/A" text.
        let input = parsed(
            &["S.No", "Notes"],
            vec![
                vec![Some("1"), Some("N/A")],
                vec![Some("2"), Some("N/A")],
            ],
        );

        let normalized = TabularNormalizer::normalize(input);
        assert_eq!(normalized.headers, vec!["S.No", "Notes"]);
    }

    #[test]
    fn test_all_missing_row_dropped() {
        let input = parsed(
            &["S.No", "City"],
            vec![
                vec![Some("1"), Some("Oslo")],
                vec![None, None],
                vec![Some("3"), Some("Bergen")],
            ],
        );

        let normalized = TabularNormalizer::normalize(input);
        assert_eq!(normalized.rows.len(), 2);
        assert_eq!(normalized.rows[1], vec!["3", "Bergen"]);
    }

    #[test]
    fn test_no_data_rows_keeps_columns() {
        let input = parsed(&["S.No", "City"], vec![]);
        let normalized = TabularNormalizer::normalize(input);
        assert_eq!(normalized.headers, vec!["S.No", "City"]);
        assert!(normalized.rows.is_empty());
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let input = parsed(
            &["S.No", "Ghost", "City"],
            vec![
                vec![Some("1"), None, Some("")],
                vec![None, None, None],
                vec![Some("3"), None, Some("Bergen")],
            ],
        );

        let once = TabularNormalizer::normalize(input);
        let twice = TabularNormalizer::normalize(ParsedDataset::from(once.clone()));
        assert_eq!(once, twice);
    }
}
