//! Gemini streaming client.
//!
//! Thin HTTP wrapper for `models/{model}:streamGenerateContent?alt=sse`.
//! Pure parsing in `parse_chunk` for testability; the request itself is the
//! only piece that touches the network.

use futures::StreamExt;
use tokio::sync::mpsc;

use super::config::LlmTimeouts;
use super::sse::SseParser;
use super::types::{ChunkReceiver, LlmError};
use std::time::Duration;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const CHANNEL_CAPACITY: usize = 32;

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
}

impl GeminiClient {
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
        let url = format!("{API_BASE}/models/{model}:streamGenerateContent?alt=sse");
        let body = ApiRequest {
            system_instruction: SystemInstruction { parts: vec![Part { text: system }] },
            contents: vec![Content { role: "user", parts: vec![Part { text: question }] }],
            // Thinking disabled for fast first-chunk latency.
            generation_config: GenerationConfig {
                max_output_tokens: max_tokens,
                thinking_config: ThinkingConfig { thinking_budget: 0 },
            },
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
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
            match parse_chunk(&event.data) {
                Ok(Some(text)) => {
                    if tx.send(Ok(text)).await.is_err() {
                        return;
                    }
                }
                Ok(None) => {}
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
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    system_instruction: SystemInstruction<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(serde::Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(serde::Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(serde::Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    thinking_config: ThinkingConfig,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(serde::Deserialize)]
struct ApiChunk {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ChunkPart>,
}

#[derive(serde::Deserialize)]
struct ChunkPart {
    #[serde(default)]
    text: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract the text delta from one streamed chunk. Returns `None` for chunks
/// with no text payload (usage metadata, finish markers).
fn parse_chunk(json: &str) -> Result<Option<String>, LlmError> {
    let chunk: ApiChunk = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let text: String = chunk
        .candidates
        .first()
        .map(|c| {
            c.content
                .iter()
                .flat_map(|content| &content.parts)
                .filter_map(|p| p.text.as_deref())
                .collect()
        })
        .unwrap_or_default();

    Ok(if text.is_empty() { None } else { Some(text) })
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
