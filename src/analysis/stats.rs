//! Descriptive statistics for numeric columns.

use crate::error::Result;
use polars::prelude::*;
use serde::Serialize;

/// Standard summary statistics for one numeric column.
///
/// Null cells are excluded from every statistic; `count` is the number of
/// non-null values.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Check if a DataType is numeric (integer or float).
#[inline]
pub(crate) fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Compute summary statistics for every numeric column in the frame.
///
/// Columns with no non-null values are skipped.
pub(crate) fn summarize_numeric_columns(df: &DataFrame) -> Result<Vec<ColumnSummary>> {
    let mut summaries = Vec::new();

    for column in df.get_columns() {
        let series = column.as_materialized_series();
        if !is_numeric_dtype(series.dtype()) {
            continue;
        }

        let non_null = series.drop_nulls();
        if non_null.is_empty() {
            continue;
        }

        let floats = non_null.cast(&DataType::Float64)?;
        let ca = floats.f64()?;

        let count = ca.len();
        let mean = ca.mean().unwrap_or(0.0);

        summaries.push(ColumnSummary {
            name: series.name().to_string(),
            count,
            mean,
            std: sample_std(ca, mean),
            min: ca.min().unwrap_or(0.0),
            q1: quantile(ca, 0.25)?,
            median: quantile(ca, 0.5)?,
            q3: quantile(ca, 0.75)?,
            max: ca.max().unwrap_or(0.0),
        });
    }

    Ok(summaries)
}

/// Sample standard deviation (n - 1 denominator).
fn sample_std(ca: &Float64Chunked, mean: f64) -> f64 {
    let n = ca.len() as f64;
    if n <= 1.0 {
        return 0.0;
    }

    let variance: f64 = ca
        .into_iter()
        .filter_map(|v| v.map(|val| (val - mean).powi(2)))
        .sum::<f64>()
        / (n - 1.0);

    variance.sqrt()
}

/// Quantile with linear interpolation.
fn quantile(ca: &Float64Chunked, q: f64) -> Result<f64> {
    Ok(ca.quantile(q, QuantileMethod::Linear)?.unwrap_or(0.0))
}

// ============================================================================
// Tests
// ============================================================================
