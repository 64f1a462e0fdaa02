use super::*;
use crate::services::tutor::APOLOGY;
use frames::{FRAME_IDENTITY, FRAME_MESSAGE, FRAME_QUESTION, Status};
use std::time::Duration;

fn bare_state() -> AppState {
    AppState::new(None)
}

async fn recv_one(rx: &mut mpsc::Receiver<Frame>) -> Frame {
    tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("timed out waiting for frame")
        .expect("channel closed")
}

#[tokio::test]
async fn invalid_json_answers_gateway_error() {
    let (tx, mut rx) = mpsc::channel(8);
    process_inbound_text(&bare_state(), Uuid::new_v4(), &tx, "{not json");

    let frame = recv_one(&mut rx).await;
    assert_eq!(frame.syscall, "gateway:error");
    assert!(frame.data_str(FRAME_MESSAGE).unwrap().contains("invalid json"));
}

#[tokio::test]
async fn unknown_prefix_answers_error_frame() {
    let (tx, mut rx) = mpsc::channel(8);
    let req = Frame::request("quiz:start", Data::new());
    process_inbound_text(&bare_state(), Uuid::new_v4(), &tx, &serde_json::to_string(&req).unwrap());

    let frame = recv_one(&mut rx).await;
    assert_eq!(frame.status, Status::Error);
    assert_eq!(frame.parent_id, Some(req.id));
    assert!(frame.data_str(FRAME_MESSAGE).unwrap().contains("unknown prefix: quiz"));
}

#[tokio::test]
async fn unknown_tutor_syscall_answers_error_frame() {
    let (tx, mut rx) = mpsc::channel(8);
    let req = Frame::request("tutor:reset", Data::new());
    process_inbound_text(&bare_state(), Uuid::new_v4(), &tx, &serde_json::to_string(&req).unwrap());

    let frame = recv_one(&mut rx).await;
    assert_eq!(frame.status, Status::Error);
    assert!(frame.data_str(FRAME_MESSAGE).unwrap().contains("unknown syscall"));
}

#[tokio::test]
async fn tutor_ask_streams_through_connection_channel() {
    // No LLM configured: the spawned service still answers through the
    // channel with the apology chunk and a terminal done.
    let (tx, mut rx) = mpsc::channel(8);
    let req = Frame::request("tutor:ask", Data::new())
        .with_data(FRAME_IDENTITY, "first")
        .with_data(FRAME_QUESTION, "What is the limit of x^x at 0?");
    process_inbound_text(&bare_state(), Uuid::new_v4(), &tx, &serde_json::to_string(&req).unwrap());
    drop(tx);

    let item = recv_one(&mut rx).await;
    assert_eq!(item.status, Status::Item);
    assert_eq!(item.content(), Some(APOLOGY));
    assert_eq!(item.parent_id, Some(req.id.clone()));

    let done = recv_one(&mut rx).await;
    assert_eq!(done.status, Status::Done);
    assert_eq!(done.syscall, "tutor:ask");
}
