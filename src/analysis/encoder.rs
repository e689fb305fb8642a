//! Categorical encoding for uploaded CSV data.
//!
//! String columns are replaced with numeric representations: one-hot
//! indicator columns below the cardinality threshold, ordinal codes in
//! first-seen order above it.

use crate::error::Result;
use polars::prelude::*;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Replace every string column in `df` with a numeric encoding.
///
/// Columns with at most `cardinality_threshold` distinct values expand
/// into one `{column}_{value}` indicator column (1/0) per distinct value,
/// ordered by first appearance. Higher-cardinality columns keep their name
/// and receive integer codes assigned in first-seen order; null cells stay
/// null. Non-string columns pass through untouched.
///
/// Returns the transformed frame plus a human-readable action per encoded
/// column.
pub(crate) fn encode_categoricals(
    df: &DataFrame,
    cardinality_threshold: usize,
) -> Result<(DataFrame, Vec<String>)> {
    let mut columns: Vec<Column> = Vec::with_capacity(df.width());
    let mut actions = Vec::new();

    for column in df.get_columns() {
        let series = column.as_materialized_series();
        if series.dtype() != &DataType::String {
            columns.push(column.clone());
            continue;
        }

        let name = series.name().to_string();
        let ca = series.str()?;
        let distinct = distinct_in_order(ca);

        if distinct.len() <= cardinality_threshold {
            for value in &distinct {
                let flags: Vec<u32> = ca
                    .into_iter()
                    .map(|cell| u32::from(cell == Some(value.as_str())))
                    .collect();
                let indicator_name = format!("{}_{}", name, value);
                columns.push(Series::new(indicator_name.as_str().into(), flags).into_column());
            }
            debug!(
                "One-hot encoded '{}' into {} indicator columns",
                name,
                distinct.len()
            );
            actions.push(format!(
                "One-hot encoded '{}' ({} distinct values)",
                name,
                distinct.len()
            ));
        } else {
            let codes_by_value: HashMap<&str, u32> = distinct
                .iter()
                .enumerate()
                .map(|(code, value)| (value.as_str(), code as u32))
                .collect();
            let codes: Vec<Option<u32>> = ca
                .into_iter()
                .map(|cell| cell.map(|value| codes_by_value[value]))
                .collect();
            columns.push(Series::new(name.as_str().into(), codes).into_column());
            debug!(
                "Label encoded '{}' with {} ordinal codes",
                name,
                distinct.len()
            );
            actions.push(format!(
                "Label encoded '{}' ({} distinct values)",
                name,
                distinct.len()
            ));
        }
    }

    Ok((DataFrame::new(columns)?, actions))
}

/// Distinct non-null values of a string column, in first-seen row order.
fn distinct_in_order(ca: &StringChunked) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut distinct = Vec::new();
    for value in ca.into_iter().flatten() {
        if seen.insert(value) {
            distinct.push(value.to_string());
        }
    }
    distinct
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_low_cardinality_one_hot() {
        let df = df![
            "Region" => ["North", "South", "East", "North"],
            "Sales" => [10, 20, 30, 40],
        ]
        .unwrap();

        let (encoded, actions) = encode_categoricals(&df, 5).unwrap();

        // 3 distinct values -> 3 indicator columns, plus the numeric column
        assert_eq!(encoded.width(), 4);
        let names: Vec<String> = encoded
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        // Indicator columns in first-seen order
        assert_eq!(
            names,
            vec!["Region_North", "Region_South", "Region_East", "Sales"]
        );

        let north = encoded.column("Region_North").unwrap();
        let values: Vec<u32> = north
            .as_materialized_series()
            .u32()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(values, vec![1, 0, 0, 1]);

        assert_eq!(actions.len(), 1);
        assert!(actions[0].contains("One-hot encoded 'Region'"));
    }

    #[test]
    fn test_high_cardinality_ordinal_codes() {
        let df = df![
            "City" => ["Oslo", "Bergen", "Tromso", "Oslo", "Stavanger", "Trondheim", "Drammen"],
        ]
        .unwrap();

        let (encoded, actions) = encode_categoricals(&df, 5).unwrap();

        // Column keeps its name, values become first-seen integer codes
        assert_eq!(encoded.width(), 1);
        let codes: Vec<u32> = encoded
            .column("City")
            .unwrap()
            .as_materialized_series()
            .u32()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(codes, vec![0, 1, 2, 0, 3, 4, 5]);
        assert!(actions[0].contains("Label encoded 'City'"));
    }

    #[test]
    fn test_numeric_columns_untouched() {
        let df = df![
            "Price" => [9.99, 19.99, 29.99],
        ]
        .unwrap();

        let (encoded, actions) = encode_categoricals(&df, 5).unwrap();
        assert_eq!(encoded.shape(), (3, 1));
        assert!(actions.is_empty());
        assert_eq!(encoded.column("Price").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn test_ordinal_nulls_stay_null() {
        let df = df![
            "City" => [Some("A"), None, Some("B"), Some("C"), Some("D"), Some("E"), Some("F")],
        ]
        .unwrap();

        let (encoded, _) = encode_categoricals(&df, 5).unwrap();
        assert_eq!(
            encoded
                .column("City")
                .unwrap()
                .as_materialized_series()
                .null_count(),
            1
        );
    }

    #[test]
    fn test_one_hot_null_is_all_zeros() {
        let df = df![
            "Region" => [Some("North"), None, Some("South")],
        ]
        .unwrap();

        let (encoded, _) = encode_categoricals(&df, 5).unwrap();
        let north: Vec<u32> = encoded
            .column("Region_North")
            .unwrap()
            .as_materialized_series()
            .u32()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(north, vec![1, 0, 0]);
    }
}
