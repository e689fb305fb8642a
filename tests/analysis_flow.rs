//! Integration tests for the analysis flow: CSV load, categorical
//! encoding, summary statistics, and plot axis selection.

use datasynth::analysis::{AnalysisPipeline, load_csv};
use datasynth::query::PlotSelector;
use std::path::PathBuf;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture(filename: &str) -> polars::prelude::DataFrame {
    load_csv(&fixtures_path().join(filename)).expect("Failed to read fixture CSV")
}

// ============================================================================
// Encoding + Statistics
// ============================================================================

#[test]
fn test_analyze_store_sales_fixture() {
    let df = load_fixture("store_sales.csv");
    assert_eq!(df.shape(), (8, 6));

    let result = AnalysisPipeline::with_threshold(5).analyze(df).unwrap();

    let names: Vec<String> = result
        .data
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();

    // Region (3 distinct <= 5) one-hot expands; City (8 distinct > 5) and
    // Target (2 distinct) stay single columns.
    assert!(names.contains(&"Region_North".to_string()));
    assert!(names.contains(&"Region_South".to_string()));
    assert!(names.contains(&"Region_East".to_string()));
    assert!(!names.contains(&"Region".to_string()));
    assert!(names.contains(&"City".to_string()));
    assert!(names.contains(&"Target_Presence".to_string()));

    // City ordinal codes follow first-seen order
    let city_codes: Vec<u32> = result
        .data
        .column("City")
        .unwrap()
        .as_materialized_series()
        .u32()
        .unwrap()
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(city_codes, vec![0, 1, 2, 3, 4, 5, 6, 7]);

    // Every column in the encoded frame is now numeric and summarized
    assert_eq!(result.summaries.len(), result.data.width());

    let price = result
        .summaries
        .iter()
        .find(|s| s.name == "Price")
        .unwrap();
    assert_eq!(price.count, 8);
    assert!((price.min - 4.25).abs() < 1e-9);
    assert!((price.max - 19.99).abs() < 1e-9);
    assert!((price.mean - 11.21).abs() < 1e-2);
}

#[test]
fn test_analyze_numeric_only_fixture() {
    let df = load_fixture("numeric_only.csv");
    let result = AnalysisPipeline::with_threshold(5).analyze(df).unwrap();

    assert!(result.actions.is_empty());
    assert_eq!(result.summaries.len(), 2);

    let age = result.summaries.iter().find(|s| s.name == "Age").unwrap();
    assert_eq!(age.count, 5);
    assert!((age.mean - 37.0).abs() < 1e-9);
    assert!((age.median - 35.0).abs() < 1e-9);
}

// ============================================================================
// Plot Axis Selection
// ============================================================================

#[test]
fn test_query_selects_axes_from_encoded_table() {
    let df = load_fixture("store_sales.csv");
    let result = AnalysisPipeline::with_threshold(5).analyze(df).unwrap();

    let names: Vec<String> = result
        .data
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();

    let spec = PlotSelector::select("show price vs units", &names).unwrap();
    assert_eq!(spec.x, "Price");
    assert_eq!(spec.y, "Units");

    // The axes must be selectable from the frame
    assert!(result.data.select([spec.x.as_str(), spec.y.as_str()]).is_ok());
}

#[test]
fn test_query_with_single_match_yields_no_plot() {
    let df = load_fixture("numeric_only.csv");
    let result = AnalysisPipeline::with_threshold(5).analyze(df).unwrap();

    let names: Vec<String> = result
        .data
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();

    assert!(PlotSelector::select("income over time", &names).is_none());
}
