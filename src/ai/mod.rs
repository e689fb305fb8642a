//! AI module for language-model-backed dataset generation.
//!
//! This module provides a trait-based abstraction for model providers,
//! allowing the generation flow to work with any LLM backend.
//!
//! # Feature Flag
//!
//! The concrete provider implementations require the `ai` feature flag
//! (enabled by default). The [`ModelProvider`] trait is always available
//! for custom implementations.
//!
//! ```toml
//! # Disable AI support for a smaller binary (analysis flow only)
//! datasynth = { version = "0.1", default-features = false }
//! ```
//!
//! # Adding a New Provider
//!
//! 1. Create a new file (e.g., `src/ai/anthropic.rs`)
//! 2. Implement the [`ModelProvider`] trait
//! 3. Export the new provider in this module

// Provider trait is always available (for custom implementations)
mod provider;
pub use provider::ModelProvider;

// Concrete providers require the "ai" feature
#[cfg(feature = "ai")]
mod openai;

#[cfg(feature = "ai")]
pub use openai::{OpenAiConfig, OpenAiConfigBuilder, OpenAiProvider};
