//! Tutor frame handlers extracted from `frame_client`.
//!
//! The transition itself is a pure function over `TutorState` so the
//! streaming behavior is testable without a browser or signals.

#[cfg(test)]
#[path = "frame_client_tutor_test.rs"]
mod frame_client_tutor_test;

use crate::net::types::{FRAME_MESSAGE, Frame, FrameStatus};
use crate::state::tutor::TutorState;

/// Shown when the server answers a malformed request with an error frame
/// that carries no message.
const FALLBACK_ERROR_TEXT: &str = "The tutor could not process that request.";

/// Apply one `tutor:ask` reply frame to the chat state.
///
/// - `item` appends the chunk text to the pending model message, in
///   arrival order;
/// - `done` ends the streaming state;
/// - `error` lands the server's message in the pending model message and
///   ends the stream.
///
/// Returns `false` for frames this handler does not own.
pub fn apply_tutor_frame(frame: &Frame, state: &mut TutorState) -> bool {
    if frame.syscall != "tutor:ask" {
        return false;
    }

    match frame.status {
        FrameStatus::Item => {
            if let Some(chunk) = frame.content() {
                state.append_chunk(chunk);
            }
            true
        }
        FrameStatus::Done => {
            state.finish();
            true
        }
        FrameStatus::Error => {
            let message = frame.data_str(FRAME_MESSAGE).unwrap_or(FALLBACK_ERROR_TEXT);
            state.append_chunk(message);
            state.finish();
            true
        }
        FrameStatus::Request => false,
    }
}

/// Signal-updating wrapper used by the frame client dispatch.
#[cfg(feature = "hydrate")]
pub(super) fn handle_tutor_frame(frame: &Frame, tutor: leptos::prelude::RwSignal<TutorState>) -> bool {
    use leptos::prelude::Update;

    let mut consumed = false;
    tutor.update(|t| consumed = apply_tutor_frame(frame, t));
    consumed
}
