use super::*;
use crate::llm::types::ChunkReceiver;
use frames::{FRAME_CODE, Status};
use std::sync::Mutex;

// =============================================================================
// MockLlm
// =============================================================================

/// Scripted LLM: either rejects the request up front, or streams the given
/// chunk results in order.
struct MockLlm {
    script: Mutex<Option<Result<Vec<Result<String, LlmError>>, LlmError>>>,
}

impl MockLlm {
    fn streaming(chunks: Vec<Result<String, LlmError>>) -> Arc<dyn LlmStream> {
        Arc::new(Self { script: Mutex::new(Some(Ok(chunks))) })
    }

    fn rejecting(err: LlmError) -> Arc<dyn LlmStream> {
        Arc::new(Self { script: Mutex::new(Some(Err(err))) })
    }
}

#[async_trait::async_trait]
impl LlmStream for MockLlm {
    async fn stream_chat(
        &self,
        _max_tokens: u32,
        _system: &str,
        _question: &str,
    ) -> Result<ChunkReceiver, LlmError> {
        let script = self.script.lock().unwrap().take().expect("stream_chat called twice");
        let chunks = script?;

        let (tx, rx) = mpsc::channel(8);
        tokio::spawn(async move {
            for chunk in chunks {
                if tx.send(chunk).await.is_err() {
                    return;
                }
            }
        });
        Ok(rx)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn ask_frame(identity: &str, question: &str) -> Frame {
    Frame::request("tutor:ask", Data::new())
        .with_data(FRAME_IDENTITY, identity)
        .with_data(FRAME_QUESTION, question)
}

async fn collect_replies(llm: Option<Arc<dyn LlmStream>>, req: Frame) -> Vec<Frame> {
    let (tx, mut rx) = mpsc::channel(16);
    run_ask(llm, req, tx).await;

    let mut frames = Vec::new();
    while let Some(frame) = rx.recv().await {
        frames.push(frame);
    }
    frames
}

fn item_contents(frames: &[Frame]) -> Vec<&str> {
    frames
        .iter()
        .filter(|f| f.status == Status::Item)
        .filter_map(Frame::content)
        .collect()
}

// =============================================================================
// STREAMING
// =============================================================================

#[tokio::test]
async fn happy_path_relays_chunks_in_order() {
    let llm = MockLlm::streaming(vec![
        Ok("The key idea ".to_string()),
        Ok("is the substitution ".to_string()),
        Ok("x = exp(-u).".to_string()),
    ]);
    let req = ask_frame("first", "Explain the proof simply");
    let req_id = req.id.clone();

    let frames = collect_replies(Some(llm), req).await;

    assert_eq!(frames.len(), 4);
    assert_eq!(
        item_contents(&frames),
        vec!["The key idea ", "is the substitution ", "x = exp(-u)."]
    );
    assert_eq!(frames[3].status, Status::Done);
    assert_eq!(frames[3].data.get("chunks").and_then(serde_json::Value::as_u64), Some(3));
    for frame in &frames {
        assert_eq!(frame.parent_id.as_deref(), Some(req_id.as_str()));
        assert_eq!(frame.syscall, "tutor:ask");
    }
}

#[tokio::test]
async fn rejected_request_sends_apology_then_done() {
    let llm = MockLlm::rejecting(LlmError::ApiResponse { status: 429, body: "rate limited".into() });
    let frames = collect_replies(Some(llm), ask_frame("first", "hello")).await;

    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].status, Status::Item);
    assert_eq!(frames[0].content(), Some(APOLOGY));
    assert_eq!(frames[1].status, Status::Done);
}

#[tokio::test]
async fn mid_stream_failure_appends_apology() {
    let llm = MockLlm::streaming(vec![
        Ok("Partial answer".to_string()),
        Err(LlmError::StreamInterrupted("connection reset".into())),
    ]);
    let frames = collect_replies(Some(llm), ask_frame("second", "why alternating?")).await;

    assert_eq!(item_contents(&frames), vec!["Partial answer", APOLOGY]);
    assert_eq!(frames.last().unwrap().status, Status::Done);
}

#[tokio::test]
async fn missing_llm_sends_apology_then_done() {
    let frames = collect_replies(None, ask_frame("first", "hello")).await;

    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].content(), Some(APOLOGY));
    assert_eq!(frames[1].status, Status::Done);
}

// =============================================================================
// MALFORMED REQUESTS
// =============================================================================

#[tokio::test]
async fn unknown_identity_answers_error_frame() {
    let frames = collect_replies(None, ask_frame("third", "hello")).await;

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].status, Status::Error);
    assert_eq!(frames[0].data_str(FRAME_CODE), Some("E_BAD_IDENTITY"));
}

#[tokio::test]
async fn blank_question_answers_error_frame() {
    let frames = collect_replies(None, ask_frame("first", "   ")).await;

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].status, Status::Error);
    assert_eq!(frames[0].data_str(FRAME_CODE), Some("E_MISSING_QUESTION"));
}

// =============================================================================
// PARSING & PROMPT
// =============================================================================

#[test]
fn parse_ask_trims_question() {
    let (identity, question) = parse_ask(&ask_frame("second", "  why?  ")).unwrap();
    assert_eq!(identity, Identity::Second);
    assert_eq!(question, "why?");
}

#[test]
fn system_prompt_names_active_identity() {
    let first = build_system_prompt(Identity::First);
    assert!(first.contains("x^-x"));
    assert!(first.contains("Sophomore's Dream"));

    let second = build_system_prompt(Identity::Second);
    assert!(second.contains("x^x"));
    assert_ne!(first, second);
}
