//! Tutor service — streamed LLM pass-through.
//!
//! DESIGN
//! ======
//! Receives a `tutor:ask` frame carrying the active identity and the user's
//! question, builds the math-professor system prompt, and relays provider
//! text chunks as `item` frames in arrival order, closing with `done`.
//!
//! Every provider failure collapses to one fixed apology sentence sent as
//! an ordinary chunk, whether the provider was never configured, rejected
//! the request, or died mid-stream. The browser never sees provider
//! detail; the specifics go to the log.

use std::sync::{Arc, OnceLock};

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::llm::LlmStream;
use crate::llm::types::LlmError;
use frames::{Data, FRAME_IDENTITY, FRAME_QUESTION, Frame, Identity};

const DEFAULT_TUTOR_MAX_TOKENS: u32 = 1024;

/// Fixed user-facing sentence for any provider failure.
pub const APOLOGY: &str =
    "I apologize, but I encountered an error connecting to the mathematical archives (API Error).";

fn tutor_max_tokens() -> u32 {
    static VALUE: OnceLock<u32> = OnceLock::new();
    *VALUE.get_or_init(|| {
        std::env::var("TUTOR_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_TUTOR_MAX_TOKENS)
    })
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("missing or unknown identity on tutor:ask")]
    BadIdentity,
    #[error("empty question on tutor:ask")]
    MissingQuestion,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl frames::ErrorCode for TutorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::LlmNotConfigured => "E_LLM_NOT_CONFIGURED",
            Self::BadIdentity => "E_BAD_IDENTITY",
            Self::MissingQuestion => "E_MISSING_QUESTION",
            Self::Llm(_) => "E_LLM_ERROR",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Llm(e) if e.retryable())
    }
}

// =============================================================================
// REQUEST PARSING
// =============================================================================

/// Extract identity and question from a `tutor:ask` request.
pub fn parse_ask(req: &Frame) -> Result<(Identity, String), TutorError> {
    let identity = req
        .data_str(FRAME_IDENTITY)
        .and_then(Identity::parse)
        .ok_or(TutorError::BadIdentity)?;

    let question = req
        .data_str(FRAME_QUESTION)
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or(TutorError::MissingQuestion)?
        .to_string();

    Ok((identity, question))
}

/// System prompt with the active identity named in context.
pub fn build_system_prompt(identity: Identity) -> String {
    let identity_name = match identity {
        Identity::First => "The First Sophomore's Dream (the integral of x^-x over [0, 1])",
        Identity::Second => "The Second Sophomore's Dream (the integral of x^x over [0, 1])",
    };

    format!(
        "You are a world-class mathematics professor explaining the \"Sophomore's Dream\" identities.\n\
         Current context: {identity_name}.\n\
         \n\
         Rules:\n\
         1. Be concise but intuitive.\n\
         2. Use plain text or standard unicode for math where possible.\n\
         3. If the user asks for a proof, explain the substitution x = exp(-u) clearly.\n\
         4. Keep the tone inspiring and educational.\n\
         5. Structure your response with clear paragraphs."
    )
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Run one `tutor:ask` exchange, sending reply frames to the connection
/// channel. Always terminates the stream with `done` (or a single `error`
/// frame for malformed requests).
pub async fn run_ask(llm: Option<Arc<dyn LlmStream>>, req: Frame, tx: mpsc::Sender<Frame>) {
    let (identity, question) = match parse_ask(&req) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(id = %req.id, error = %e, "tutor: malformed ask");
            let _ = tx.send(req.error_from(&e)).await;
            return;
        }
    };

    info!(id = %req.id, identity = identity.as_str(), question_len = question.len(), "tutor: ask received");

    match stream_answer(llm.as_ref(), identity, &question, &req, &tx).await {
        Ok(chunks) => {
            info!(id = %req.id, chunks, "tutor: answer complete");
            let mut data = Data::new();
            data.insert("chunks".into(), serde_json::json!(chunks));
            let _ = tx.send(req.done_with(data)).await;
        }
        Err(e) => {
            warn!(id = %req.id, error = %e, "tutor: provider failure, sending apology");
            let _ = tx.send(req.item(Data::new()).with_content(APOLOGY)).await;
            let _ = tx.send(req.done()).await;
        }
    }
}

/// Relay provider chunks as `item` frames. Returns the chunk count, or the
/// error that ended the stream early.
async fn stream_answer(
    llm: Option<&Arc<dyn LlmStream>>,
    identity: Identity,
    question: &str,
    req: &Frame,
    tx: &mpsc::Sender<Frame>,
) -> Result<usize, TutorError> {
    let llm = llm.ok_or(TutorError::LlmNotConfigured)?;

    let system = build_system_prompt(identity);
    let mut chunks = llm.stream_chat(tutor_max_tokens(), &system, question).await?;

    let mut count = 0usize;
    while let Some(chunk) = chunks.recv().await {
        let text = chunk?;
        if tx.send(req.item(Data::new()).with_content(text)).await.is_err() {
            // Client hung up; stop relaying.
            break;
        }
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
#[path = "tutor_test.rs"]
mod tests;
