//! Text-generation client for edit suggestions.
//!
//! [`LlmClient`] is the seam the API depends on; [`gemini::GeminiClient`]
//! implements it against the Gemini `generateContent` REST endpoint using
//! [`reqwest`]. Output is returned as raw text and must be validated by the
//! caller.

pub mod config;
pub mod gemini;

use async_trait::async_trait;

pub use config::LlmConfig;
pub use gemini::GeminiClient;

/// Errors from the text-generation collaborator.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A required credential is not configured.
    #[error("Missing configuration: {0} is not set")]
    ConfigMissing(&'static str),

    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("LLM API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider answered but produced no text.
    #[error("LLM returned no text: {0}")]
    EmptyResponse(String),
}

/// Generates text from a prompt.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError>;
}
