//! Integration tests for the generation flow: model response through
//! parsing, normalization, and CSV export.

use datasynth::ai::ModelProvider;
use datasynth::export;
use datasynth::{DataSynthError, GenerationRequest, Generator};
use std::sync::Arc;

// ============================================================================
// Helper Providers
// ============================================================================

struct ScriptedProvider {
    response: &'static str,
}

impl ModelProvider for ScriptedProvider {
    fn complete(&self, _prompt: &str) -> anyhow::Result<String> {
        Ok(self.response.to_string())
    }

    fn name(&self) -> &str {
        "Scripted"
    }

    fn model(&self) -> Option<&str> {
        Some("scripted-model")
    }
}

fn generate(response: &'static str) -> Result<datasynth::NormalizedDataset, DataSynthError> {
    let request = GenerationRequest::new(3, 2, "sales data").unwrap();
    Generator::new(Arc::new(ScriptedProvider { response })).generate(&request)
}

// ============================================================================
// End-to-End Generation
// ============================================================================

#[test]
fn test_full_generation_flow_with_export() {
    let dataset = generate(
        "**Title:** Sales Data\n\
         ### Dataset Summary\n\
         A small sales dataset covering three products.\n\n\
         S.No,Product,Price,Target\n\
         1,Widget,9.99,Presence\n\
         2,Gadget,19.99,Absence\n\
         3,Sprocket,4.25,Presence\n",
    )
    .unwrap();

    assert_eq!(dataset.title, "Sales Data");
    assert_eq!(dataset.summary, "A small sales dataset covering three products.");
    assert_eq!(dataset.height(), 3);
    assert_eq!(dataset.width(), 4);

    let dir = tempfile::tempdir().unwrap();
    let path = export::export_csv(&dataset, dir.path()).unwrap();

    assert_eq!(path.file_name().unwrap(), "Sales_Data.csv");
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "S.No,Product,Price,Target\n\
         1,Widget,9.99,Presence\n\
         2,Gadget,19.99,Absence\n\
         3,Sprocket,4.25,Presence\n"
    );
}

#[test]
fn test_generation_squares_ragged_rows() {
    let dataset = generate(
        "**Title:** Ragged\n\
         S.No,Product,Price,Target\n\
         1,Widget,9.99,Presence,EXTRA\n\
         2,Gadget\n",
    )
    .unwrap();

    // Long row truncated, short row padded; no row dropped
    assert_eq!(dataset.height(), 2);
    assert_eq!(dataset.rows[0], vec!["1", "Widget", "9.99", "Presence"]);
    assert_eq!(dataset.rows[1], vec!["2", "Gadget", "N/A", "N/A"]);
}

#[test]
fn test_generation_with_missing_prose_uses_defaults() {
    let dataset = generate("S.No,Product,Target\n1,Widget,Presence\n").unwrap();

    assert_eq!(dataset.title, "Untitled Dataset");
    assert_eq!(dataset.summary, "Summary not available.");

    let dir = tempfile::tempdir().unwrap();
    let path = export::export_csv(&dataset, dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "Untitled_Dataset.csv");
}

#[test]
fn test_generation_fails_without_table() {
    let err = generate("**Title:** Nothing Here\nJust prose, no CSV.\n").unwrap_err();
    assert!(matches!(err, DataSynthError::MalformedDataset));
    assert_eq!(
        err.to_string(),
        "AI-generated dataset format is incorrect. Please try again."
    );
}

#[test]
fn test_generation_fails_without_data_rows() {
    let err = generate("**Title:** Empty\nS.No,Product,Target\n").unwrap_err();
    assert!(matches!(err, DataSynthError::MalformedDataset));
}

#[test]
fn test_report_written_next_to_csv() {
    let dataset = generate(
        "**Title:** Report Check\nS.No,Product,Target\n1,Widget,Presence\n",
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let report = export::GenerationReport::new(&dataset, Some("scripted-model"));
    let path = report.write_to(dir.path()).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["title"], "Report Check");
    assert_eq!(json["rows"], 1);
    assert_eq!(json["columns"], 3);
    assert_eq!(json["model"], "scripted-model");
}
