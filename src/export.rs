//! CSV export and generation reports.

use crate::error::Result;
use crate::generator::NormalizedDataset;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Derive the download file name from a dataset title.
///
/// Spaces become underscores, with a `.csv` suffix.
pub fn csv_file_name(title: &str) -> String {
    format!("{}.csv", title.replace(' ', "_"))
}

/// Serialize a dataset to RFC-4180-style CSV text.
///
/// Header row first, `\n` line termination, UTF-8. Cells containing
/// commas, quotes, or line breaks are quoted by the writer.
pub fn to_csv_string(dataset: &NormalizedDataset) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(&dataset.headers)?;
    for row in &dataset.rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes).map_err(|e| std::io::Error::other(e.to_string()))?)
}

/// Write a dataset to `<dir>/<title>.csv`, creating the directory if needed.
///
/// Returns the path of the written file.
pub fn export_csv(dataset: &NormalizedDataset, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(csv_file_name(&dataset.title));
    std::fs::write(&path, to_csv_string(dataset)?)?;

    info!("Exported dataset to {}", path.display());
    Ok(path)
}

/// Machine-readable record of one completed generation.
#[derive(Debug, Serialize)]
pub struct GenerationReport {
    pub title: String,
    pub summary: String,
    pub rows: usize,
    pub columns: usize,
    pub model: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl GenerationReport {
    /// Build a report for a generated dataset.
    pub fn new(dataset: &NormalizedDataset, model: Option<&str>) -> Self {
        Self {
            title: dataset.title.clone(),
            summary: dataset.summary.clone(),
            rows: dataset.height(),
            columns: dataset.width(),
            model: model.map(str::to_string),
            generated_at: Utc::now(),
        }
    }

    /// Write the report as pretty JSON next to the exported CSV.
    ///
    /// Returns the path of the written file.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}_report.json", self.title.replace(' ', "_")));
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;

        info!("Report written to {}", path.display());
        Ok(path)
    }
}

// ============================================================================
// Tests
// ============================================================================
