//! LLM types — provider-neutral streaming trait and errors.
//!
//! Shared by the Gemini and Anthropic clients. The tutor service only ever
//! sees `LlmStream` and a channel of text chunks, so provider wire formats
//! stay confined to their own modules.

use tokio::sync::mpsc;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the LLM provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The LLM provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// A streamed provider event could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The provider stream ended abnormally mid-response.
    #[error("stream interrupted: {0}")]
    StreamInterrupted(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl frames::ErrorCode for LlmError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::MissingApiKey { .. } => "E_MISSING_API_KEY",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::StreamInterrupted(_) => "E_STREAM_INTERRUPTED",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        matches!(
            self,
            Self::ApiRequest(_)
                | Self::StreamInterrupted(_)
                | Self::ApiResponse { status: 429 | 500..=599, .. }
        )
    }
}

// =============================================================================
// STREAMING TRAIT
// =============================================================================

/// Receiver half of a streamed answer: text chunks in arrival order, or the
/// error that ended the stream early. The sender closing the channel after a
/// plain `Ok` chunk sequence marks a clean finish.
pub type ChunkReceiver = mpsc::Receiver<Result<String, LlmError>>;

/// Provider-neutral async trait for streamed LLM chat. Enables mocking in
/// tutor service tests.
#[async_trait::async_trait]
pub trait LlmStream: Send + Sync {
    /// Open a streamed chat request.
    ///
    /// Resolves once the provider has accepted the request; chunks then
    /// arrive on the returned channel.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request is rejected up front (bad key,
    /// non-success status, transport failure). Mid-stream failures arrive as
    /// the final `Err` item on the channel instead.
    async fn stream_chat(
        &self,
        max_tokens: u32,
        system: &str,
        question: &str,
    ) -> Result<ChunkReceiver, LlmError>;
}
