//! Model provider trait for abstracting LLM interactions.
//!
//! The generation flow only needs one capability from a backend: turn a
//! single text prompt into a single text completion. Everything else
//! (parsing, validation, normalization) happens on our side.

use anyhow::Result;

/// Trait for model providers that can complete a text prompt.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow usage across threads.
///
/// # Error Handling
///
/// Implementations should return meaningful errors via `anyhow::Result`.
/// The generation flow surfaces the error message to the user verbatim
/// and does not retry.
pub trait ModelProvider: Send + Sync {
    /// Send a prompt to the model and return the raw text completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails (authentication, rate limit,
    /// network fault) or the response contains no completion text.
    fn complete(&self, prompt: &str) -> Result<String>;

    /// Get the provider name for logging and debugging.
    fn name(&self) -> &str;

    /// Get the model identifier used by this provider.
    ///
    /// Returns `None` if the provider doesn't expose model information.
    fn model(&self) -> Option<&str> {
        None
    }
}
