//! WebSocket handler — bidirectional frame relay.
//!
//! DESIGN
//! ======
//! On upgrade, generates a client ID and enters a `select!` loop:
//! - Incoming client frames → parse + dispatch by syscall prefix
//! - Reply frames from spawned services → forward to client
//!
//! Tutor asks are spawned onto their own task so streamed `item` frames
//! drain through the per-connection channel while the socket keeps reading.
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade → send `session:connected` with `client_id`
//! 2. Client sends frames → dispatch → service streams replies into the
//!    connection channel
//! 3. Close → channel senders drop → cleanup

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::services;
use crate::state::AppState;
use frames::{Data, Frame};

// =============================================================================
// UPGRADE
// =============================================================================

pub async fn handle_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_ws(socket, state))
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_ws(mut socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();

    // Per-connection channel for reply frames from spawned services.
    let (client_tx, mut client_rx) = mpsc::channel::<Frame>(256);

    let welcome = Frame::request("session:connected", Data::new()).with_data("client_id", client_id.to_string());
    if send_frame(&mut socket, &welcome).await.is_err() {
        return;
    }

    info!(%client_id, "ws: client connected");

    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(msg) = msg else { break };
                let Ok(msg) = msg else { break };
                match msg {
                    Message::Text(text) => {
                        process_inbound_text(&state, client_id, &client_tx, &text);
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            Some(frame) = client_rx.recv() => {
                if send_frame(&mut socket, &frame).await.is_err() {
                    break;
                }
            }
        }
    }

    info!(%client_id, "ws: client disconnected");
}

// =============================================================================
// FRAME DISPATCH
// =============================================================================

/// Parse one inbound text frame and route it by syscall prefix. Kept free of
/// socket concerns so tests can exercise dispatch end-to-end through the
/// connection channel.
fn process_inbound_text(state: &AppState, client_id: Uuid, client_tx: &mpsc::Sender<Frame>, text: &str) {
    let req: Frame = match serde_json::from_str(text) {
        Ok(r) => r,
        Err(e) => {
            warn!(%client_id, error = %e, "ws: invalid inbound frame");
            let err = Frame::request("gateway:error", Data::new()).with_data("message", format!("invalid json: {e}"));
            enqueue(client_tx, err);
            return;
        }
    };

    info!(%client_id, id = %req.id, syscall = %req.syscall, status = ?req.status, "ws: recv frame");

    match req.prefix() {
        "tutor" => match req.syscall.as_str() {
            "tutor:ask" => {
                let llm = state.llm.clone();
                let tx = client_tx.clone();
                tokio::spawn(services::tutor::run_ask(llm, req, tx));
            }
            other => {
                let err = req.error(format!("unknown syscall: {other}"));
                enqueue(client_tx, err);
            }
        },
        prefix => {
            let err = req.error(format!("unknown prefix: {prefix}"));
            enqueue(client_tx, err);
        }
    }
}

/// Queue a frame on the connection channel without awaiting. Dropping on a
/// full channel is fine here: 256 queued frames means the socket is gone.
fn enqueue(client_tx: &mpsc::Sender<Frame>, frame: Frame) {
    let _ = client_tx.try_send(frame);
}

async fn send_frame(socket: &mut WebSocket, frame: &Frame) -> Result<(), axum::Error> {
    let json = serde_json::to_string(frame).unwrap_or_default();
    socket.send(Message::Text(json.into())).await
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;
