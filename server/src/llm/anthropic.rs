//! Anthropic Messages API streaming client.
//!
//! Thin HTTP wrapper for `/v1/messages` with `"stream": true`. Pure parsing
//! in `parse_event` for testability.

use futures::StreamExt;
use tokio::sync::mpsc;

use super::config::LlmTimeouts;
use super::sse::SseParser;
use super::types::{ChunkReceiver, LlmError};
use std::time::Duration;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const CHANNEL_CAPACITY: usize = 32;

// =============================================================================
// CLIENT
// =============================================================================

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
}

impl AnthropicClient {
    pub fn new(api_key: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key })
    }

    pub async fn stream(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        question: &str,
    ) -> Result<ChunkReceiver, LlmError> {
        let body = ApiRequest {
            model,
            max_tokens,
            system,
            stream: true,
            messages: vec![Message { role: "user", content: question }],
        };

        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiResponse { status, body });
        }

        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        tokio::spawn(pump(response, tx));
        Ok(rx)
    }
}

/// Drain the SSE body, forwarding text deltas until the stream ends or the
/// receiver hangs up.
async fn pump(response: reqwest::Response, tx: mpsc::Sender<Result<String, LlmError>>) {
    let mut parser = SseParser::new();
    let mut body = response.bytes_stream();

    while let Some(chunk) = body.next().await {
        let bytes = match chunk {
            Ok(b) => b,
            Err(e) => {
                let _ = tx.send(Err(LlmError::StreamInterrupted(e.to_string()))).await;
                return;
            }
        };
        for event in parser.push(&bytes) {
            match parse_event(&event.data) {
                Ok(Delta::Text(text)) => {
                    if tx.send(Ok(text)).await.is_err() {
                        return;
                    }
                }
                Ok(Delta::Ignore) => {}
                Err(e) => {
                    let _ = tx.send(Err(e)).await;
                    return;
                }
            }
        }
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    stream: bool,
    messages: Vec<Message<'a>>,
}

#[derive(serde::Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(serde::Deserialize)]
#[serde(tag = "type")]
enum ApiEvent {
    #[serde(rename = "content_block_delta")]
    ContentBlockDelta { delta: DeltaBody },
    #[serde(rename = "error")]
    Error { error: ApiError },
    /// ping, message_start, content_block_start/stop, message_delta/stop.
    #[serde(other)]
    Other,
}

#[derive(serde::Deserialize)]
#[serde(tag = "type")]
enum DeltaBody {
    #[serde(rename = "text_delta")]
    TextDelta { text: String },
    /// thinking/signature deltas never reach the user.
    #[serde(other)]
    Other,
}

#[derive(serde::Deserialize)]
struct ApiError {
    #[serde(rename = "type")]
    kind: String,
    message: String,
}

// =============================================================================
// PARSING
// =============================================================================

/// Result of parsing one streamed event.
#[derive(Debug, PartialEq, Eq)]
enum Delta {
    Text(String),
    Ignore,
}

/// Decode one event payload into a text delta, an ignorable lifecycle
/// marker, or the provider-reported error that ends the stream.
fn parse_event(json: &str) -> Result<Delta, LlmError> {
    let event: ApiEvent = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    match event {
        ApiEvent::ContentBlockDelta { delta: DeltaBody::TextDelta { text } } => Ok(Delta::Text(text)),
        ApiEvent::ContentBlockDelta { delta: DeltaBody::Other } | ApiEvent::Other => Ok(Delta::Ignore),
        ApiEvent::Error { error } => Err(LlmError::StreamInterrupted(format!("{}: {}", error.kind, error.message))),
    }
}

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod tests;
