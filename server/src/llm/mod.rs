//! LLM — streaming provider adapter for the tutor.
//!
//! DESIGN
//! ======
//! The `LlmClient` enum dispatches to Gemini or Anthropic based on
//! `LLM_PROVIDER`; both stream answers over SSE and surface them as a plain
//! channel of text chunks. Configuration comes from environment variables,
//! and the API key never leaves the server.

pub mod anthropic;
pub mod config;
pub mod gemini;
pub mod sse;
pub mod types;

use config::{LlmConfig, LlmProviderKind};
pub use types::LlmStream;
use types::{ChunkReceiver, LlmError};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete LLM client that dispatches to either Gemini or Anthropic.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: LlmProvider,
    model: String,
}

enum LlmProvider {
    Gemini(gemini::GeminiClient),
    Anthropic(anthropic::AnthropicClient),
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let model = config.model.clone();
        let inner = match config.provider {
            LlmProviderKind::Gemini => {
                LlmProvider::Gemini(gemini::GeminiClient::new(config.api_key, config.timeouts)?)
            }
            LlmProviderKind::Anthropic => {
                LlmProvider::Anthropic(anthropic::AnthropicClient::new(config.api_key, config.timeouts)?)
            }
        };
        Ok(Self { inner, model })
    }

    /// Return the configured model name (e.g. `"gemini-2.5-flash"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmStream for LlmClient {
    async fn stream_chat(
        &self,
        max_tokens: u32,
        system: &str,
        question: &str,
    ) -> Result<ChunkReceiver, LlmError> {
        match &self.inner {
            LlmProvider::Gemini(c) => c.stream(&self.model, max_tokens, system, question).await,
            LlmProvider::Anthropic(c) => c.stream(&self.model, max_tokens, system, question).await,
        }
    }
}
