use super::*;

// =============================================================================
// CONSTRUCTORS
// =============================================================================

#[test]
fn request_sets_fields() {
    let frame = Frame::request("tutor:ask", Data::new());
    assert_eq!(frame.syscall, "tutor:ask");
    assert_eq!(frame.status, Status::Request);
    assert!(frame.parent_id.is_none());
    assert!(frame.from.is_none());
    assert!(frame.ts > 0);
}

#[test]
fn reply_inherits_context() {
    let req = Frame::request("tutor:ask", Data::new());
    let item = req.item(Data::new());

    assert_eq!(item.parent_id, Some(req.id.clone()));
    assert_eq!(item.syscall, "tutor:ask");
    assert_eq!(item.status, Status::Item);
}

#[test]
fn done_with_carries_payload() {
    let req = Frame::request("tutor:ask", Data::new());
    let mut data = Data::new();
    data.insert("chunks".into(), serde_json::json!(7));
    let done = req.done_with(data);

    assert_eq!(done.status, Status::Done);
    assert_eq!(done.data.get("chunks").and_then(serde_json::Value::as_i64), Some(7));
}

#[test]
fn done_is_terminal() {
    assert!(Status::Done.is_terminal());
    assert!(Status::Error.is_terminal());
    assert!(!Status::Request.is_terminal());
    assert!(!Status::Item.is_terminal());
}

// =============================================================================
// ROUTING & ACCESSORS
// =============================================================================

#[test]
fn prefix_extraction() {
    let frame = Frame::request("tutor:ask", Data::new());
    assert_eq!(frame.prefix(), "tutor");

    let frame = Frame::request("noseparator", Data::new());
    assert_eq!(frame.prefix(), "noseparator");
}

#[test]
fn content_round_trip() {
    let req = Frame::request("tutor:ask", Data::new());
    let item = req.item(Data::new()).with_content("a chunk");
    assert_eq!(item.content(), Some("a chunk"));

    let bare = req.item(Data::new());
    assert!(bare.content().is_none());
}

#[test]
fn json_round_trip() {
    let original = Frame::request("tutor:ask", Data::new())
        .with_from("browser")
        .with_data(FRAME_IDENTITY, "second")
        .with_data(FRAME_QUESTION, "why alternating?");

    let json = serde_json::to_string(&original).expect("serialize");
    let restored: Frame = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored.id, original.id);
    assert_eq!(restored.syscall, "tutor:ask");
    assert_eq!(restored.from.as_deref(), Some("browser"));
    assert_eq!(restored.data_str(FRAME_IDENTITY), Some("second"));
    assert_eq!(restored.data_str(FRAME_QUESTION), Some("why alternating?"));
}

#[test]
fn status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Status::Item).unwrap(), "\"item\"");
    assert_eq!(serde_json::from_str::<Status>("\"done\"").unwrap(), Status::Done);
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn error_from_typed() {
    #[derive(Debug, thiserror::Error)]
    #[error("question missing")]
    struct QuestionMissing;

    impl ErrorCode for QuestionMissing {
        fn error_code(&self) -> &'static str {
            "E_QUESTION_MISSING"
        }
    }

    let req = Frame::request("tutor:ask", Data::new());
    let err = req.error_from(&QuestionMissing);

    assert_eq!(err.status, Status::Error);
    assert_eq!(err.data_str(FRAME_CODE), Some("E_QUESTION_MISSING"));
    assert_eq!(err.data_str(FRAME_MESSAGE), Some("question missing"));
    assert_eq!(
        err.data.get(FRAME_RETRYABLE).and_then(serde_json::Value::as_bool),
        Some(false)
    );
}

// =============================================================================
// IDENTITY
// =============================================================================

#[test]
fn identity_wire_encoding() {
    assert_eq!(Identity::First.as_str(), "first");
    assert_eq!(Identity::Second.as_str(), "second");
    assert_eq!(Identity::parse("first"), Some(Identity::First));
    assert_eq!(Identity::parse("second"), Some(Identity::Second));
    assert_eq!(Identity::parse("third"), None);
}

#[test]
fn identity_default_is_first() {
    assert_eq!(Identity::default(), Identity::First);
}

#[test]
fn identity_serde_matches_as_str() {
    for identity in [Identity::First, Identity::Second] {
        let json = serde_json::to_string(&identity).unwrap();
        assert_eq!(json, format!("\"{}\"", identity.as_str()));
        assert_eq!(serde_json::from_str::<Identity>(&json).unwrap(), identity);
    }
}
