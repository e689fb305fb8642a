//! Query-driven scatter plot axis selection.
//!
//! No natural-language understanding here: the query is whitespace-split
//! into tokens and a column is selected when any token is a substring of
//! its lower-cased name. The first two selected columns, in table order,
//! become the X and Y axes.

use tracing::debug;

/// Axis pair chosen for a scatter plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScatterSpec {
    pub x: String,
    pub y: String,
}

/// Matches free-text queries against column names.
pub struct PlotSelector;

impl PlotSelector {
    /// Select scatter axes for `query` over `columns`.
    ///
    /// Returns `None` when fewer than two columns match; the caller
    /// surfaces that as a non-fatal "could not determine relevant columns"
    /// warning and produces no plot. Ties are not specially resolved:
    /// selection order is table order, and the first two win.
    pub fn select(query: &str, columns: &[String]) -> Option<ScatterSpec> {
        let lowered = query.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        if tokens.is_empty() {
            return None;
        }

        let selected: Vec<&String> = columns
            .iter()
            .filter(|column| {
                let name = column.to_lowercase();
                tokens.iter().any(|token| name.contains(token))
            })
            .collect();

        debug!(
            "Query '{}' matched {} of {} columns",
            query,
            selected.len(),
            columns.len()
        );

        if selected.len() < 2 {
            return None;
        }

        Some(ScatterSpec {
            x: selected[0].clone(),
            y: selected[1].clone(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
