use super::*;

fn make_chunk(parts: serde_json::Value) -> String {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": parts, "role": "model" }, "index": 0 }
        ],
        "modelVersion": "gemini-2.5-flash"
    })
    .to_string()
}

#[test]
fn parse_text_chunk() {
    let json = make_chunk(serde_json::json!([{ "text": "Johann Bernoulli " }]));
    let text = parse_chunk(&json).unwrap();
    assert_eq!(text.as_deref(), Some("Johann Bernoulli "));
}

#[test]
fn parse_multi_part_chunk_concatenates() {
    let json = make_chunk(serde_json::json!([{ "text": "x^x " }, { "text": "at zero" }]));
    let text = parse_chunk(&json).unwrap();
    assert_eq!(text.as_deref(), Some("x^x at zero"));
}

#[test]
fn parse_chunk_without_text_is_none() {
    // Final chunk often carries only finish/usage metadata.
    let json = serde_json::json!({
        "candidates": [{ "finishReason": "STOP", "index": 0 }],
        "usageMetadata": { "promptTokenCount": 120, "candidatesTokenCount": 256 }
    })
    .to_string();
    assert_eq!(parse_chunk(&json).unwrap(), None);
}

#[test]
fn parse_chunk_without_candidates_is_none() {
    let json = serde_json::json!({ "usageMetadata": { "promptTokenCount": 12 } }).to_string();
    assert_eq!(parse_chunk(&json).unwrap(), None);
}

#[test]
fn parse_empty_text_is_none() {
    let json = make_chunk(serde_json::json!([{ "text": "" }]));
    assert_eq!(parse_chunk(&json).unwrap(), None);
}

#[test]
fn parse_invalid_json_errors() {
    let result = parse_chunk("not json");
    assert!(matches!(result.unwrap_err(), LlmError::ApiParse(_)));
}

#[test]
fn request_body_uses_camel_case() {
    let body = ApiRequest {
        system_instruction: SystemInstruction { parts: vec![Part { text: "be brief" }] },
        contents: vec![Content { role: "user", parts: vec![Part { text: "why?" }] }],
        generation_config: GenerationConfig {
            max_output_tokens: 512,
            thinking_config: ThinkingConfig { thinking_budget: 0 },
        },
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be brief");
    assert_eq!(json["contents"][0]["role"], "user");
    assert_eq!(json["generationConfig"]["maxOutputTokens"], 512);
    assert_eq!(json["generationConfig"]["thinkingConfig"]["thinkingBudget"], 0);
}
