//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the streaming LLM client behind the `LlmStream` trait so tutor
//! tests can substitute a mock. There is no persistence and no
//! cross-connection state: every WebSocket connection owns its own
//! outbound channel and nothing outlives the session.

use std::sync::Arc;

use crate::llm::LlmStream;

#[derive(Clone)]
pub struct AppState {
    /// Streaming LLM client, absent when no provider is configured.
    pub llm: Option<Arc<dyn LlmStream>>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmStream>>) -> Self {
        Self { llm }
    }
}
