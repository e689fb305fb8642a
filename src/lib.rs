//! AI-Powered Dataset Generation and CSV Analysis
//!
//! This library drives two independent flows:
//!
//! - **Generation**: ask a language model to invent a small tabular dataset
//!   from a free-text description, validate and normalize the raw output
//!   into a rectangular table, and export it as CSV.
//! - **Analysis**: ingest an existing CSV, auto-encode categorical columns
//!   (one-hot below a cardinality threshold, ordinal codes above it),
//!   compute descriptive statistics, and select scatter-plot axes from a
//!   keyword-matched natural-language query.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use datasynth::ai::OpenAiProvider;
//! use datasynth::{Generator, GenerationRequest, export};
//! use std::sync::Arc;
//!
//! let provider = Arc::new(OpenAiProvider::new(api_key)?);
//! let request = GenerationRequest::new(5, 3, "Sales data with Date, Product, and Price")?;
//!
//! let dataset = Generator::new(provider).generate(&request)?;
//! export::export_csv(&dataset, Path::new("outputs"))?;
//! ```
//!
//! # AI Providers
//!
//! Model backends are abstracted behind the [`ai::ModelProvider`] trait.
//! [`ai::OpenAiProvider`] is provided behind the `ai` feature flag
//! (enabled by default); the analysis flow works without it.

pub mod ai;
pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod query;

// Re-exports for convenient access
pub use analysis::{AnalysisPipeline, AnalysisResult, ColumnSummary};
pub use config::{API_KEY_ENV_VAR, AppConfig, AppConfigBuilder};
pub use error::{DataSynthError, Result, ResultExt};
pub use generator::{
    GenerationRequest, Generator, NormalizedDataset, ParsedDataset, ResponseParser,
    TabularNormalizer,
};
pub use query::{PlotSelector, ScatterSpec};
