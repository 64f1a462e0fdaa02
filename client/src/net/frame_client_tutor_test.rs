use super::*;
use crate::net::types::Data;
use crate::state::tutor::ROLE_MODEL;
use frames::Identity;

fn streaming_state() -> (TutorState, Frame) {
    let mut state = TutorState::default();
    state.reset_for(Identity::First, 0.0);
    state.push_user("why does it converge?", 1.0);
    state.begin_reply(2.0);

    let req = Frame::request("tutor:ask", Data::new());
    (state, req)
}

#[test]
fn items_append_chunks_in_arrival_order() {
    let (mut state, req) = streaming_state();

    assert!(apply_tutor_frame(&req.item(Data::new()).with_content("Because the terms "), &mut state));
    assert!(apply_tutor_frame(&req.item(Data::new()).with_content("shrink like n⁻ⁿ."), &mut state));

    let last = state.messages.last().unwrap();
    assert_eq!(last.role, ROLE_MODEL);
    assert_eq!(last.text, "Because the terms shrink like n⁻ⁿ.");
    assert!(state.streaming);
}

#[test]
fn done_ends_streaming() {
    let (mut state, req) = streaming_state();
    apply_tutor_frame(&req.item(Data::new()).with_content("answer"), &mut state);

    assert!(apply_tutor_frame(&req.done(), &mut state));
    assert!(!state.streaming);
    assert_eq!(state.messages.last().unwrap().text, "answer");
}

#[test]
fn error_lands_message_and_ends_streaming() {
    let (mut state, req) = streaming_state();

    assert!(apply_tutor_frame(&req.error("empty question on tutor:ask"), &mut state));
    assert!(!state.streaming);
    assert_eq!(state.messages.last().unwrap().text, "empty question on tutor:ask");
}

#[test]
fn error_without_message_uses_fallback_text() {
    let (mut state, req) = streaming_state();

    let mut err = req.done();
    err.status = FrameStatus::Error;
    err.data.clear();
    assert!(apply_tutor_frame(&err, &mut state));
    assert_eq!(state.messages.last().unwrap().text, FALLBACK_ERROR_TEXT);
}

#[test]
fn item_without_content_is_ignored() {
    let (mut state, req) = streaming_state();

    assert!(apply_tutor_frame(&req.item(Data::new()), &mut state));
    assert_eq!(state.messages.last().unwrap().text, "");
    assert!(state.streaming);
}

#[test]
fn foreign_syscalls_are_not_consumed() {
    let (mut state, _) = streaming_state();
    let before = state.clone();

    let other = Frame::request("session:connected", Data::new());
    assert!(!apply_tutor_frame(&other, &mut state));
    assert_eq!(state, before);
}

#[test]
fn inbound_request_frames_are_not_consumed() {
    let (mut state, _) = streaming_state();
    let req = Frame::request("tutor:ask", Data::new());
    assert!(!apply_tutor_frame(&req, &mut state));
}
