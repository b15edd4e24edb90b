//! Response parsing tests for the Gemini API.
//!
//! Validates that real-world JSON responses deserialize correctly into our
//! types, covering missing fields, empty candidate lists, and batch
//! embedding payloads.

use serde_json::json;

use crate::client::Model;
use crate::embedding::{BatchEmbedContentsResponse, EmbedContentResponse};
use crate::generation::{GenerateContentRequest, GenerationResponse};

// ── Basic text response ─────────────────────────────────────────────

#[test]
fn parse_simple_text_response() {
    let json = json!({
        "candidates": [{
            "content": {
                "parts": [{"text": "Hello, world!"}],
                "role": "model"
            },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {
            "promptTokenCount": 5,
            "candidatesTokenCount": 4,
            "totalTokenCount": 9
        },
        "modelVersion": "gemini-2.5-flash",
        "responseId": "abc123"
    });

    let resp: GenerationResponse = serde_json::from_value(json).unwrap();
    assert_eq!(resp.text(), "Hello, world!");
    assert_eq!(resp.candidates.len(), 1);
    assert_eq!(resp.candidates[0].finish_reason.as_deref(), Some("STOP"));
    assert_eq!(resp.model_version.as_deref(), Some("gemini-2.5-flash"));
    assert_eq!(resp.response_id.as_deref(), Some("abc123"));

    let usage = resp.usage_metadata.as_ref().unwrap();
    assert_eq!(usage.prompt_token_count, Some(5));
    assert_eq!(usage.candidates_token_count, Some(4));
    assert_eq!(usage.total_token_count, Some(9));
}

// ── Multi-part candidate ────────────────────────────────────────────

#[test]
fn parse_multi_part_candidate_concatenates_text() {
    let json = json!({
        "candidates": [{
            "content": {
                "parts": [{"text": "business"}, {"text": ""}],
                "role": "model"
            }
        }]
    });

    let resp: GenerationResponse = serde_json::from_value(json).unwrap();
    assert_eq!(resp.text(), "business");
}

// ── Empty / degenerate responses ────────────────────────────────────

#[test]
fn parse_response_without_candidates() {
    let resp: GenerationResponse = serde_json::from_value(json!({})).unwrap();
    assert!(resp.candidates.is_empty());
    assert_eq!(resp.text(), "");
}

#[test]
fn parse_candidate_without_content() {
    // Happens when generation stops before producing output.
    let json = json!({
        "candidates": [{"finishReason": "MAX_TOKENS"}]
    });

    let resp: GenerationResponse = serde_json::from_value(json).unwrap();
    assert_eq!(resp.text(), "");
    assert_eq!(resp.candidates[0].finish_reason.as_deref(), Some("MAX_TOKENS"));
}

// ── Embedding responses ─────────────────────────────────────────────

#[test]
fn parse_embed_content_response() {
    let json = json!({
        "embedding": {"values": [0.1, -0.2, 0.3]}
    });

    let resp: EmbedContentResponse = serde_json::from_value(json).unwrap();
    assert_eq!(resp.embedding.values, vec![0.1, -0.2, 0.3]);
}

#[test]
fn parse_batch_embed_contents_response_preserves_order() {
    let json = json!({
        "embeddings": [
            {"values": [1.0, 0.0]},
            {"values": [0.0, 1.0]}
        ]
    });

    let resp: BatchEmbedContentsResponse = serde_json::from_value(json).unwrap();
    assert_eq!(resp.embeddings.len(), 2);
    assert_eq!(resp.embeddings[0].values, vec![1.0, 0.0]);
    assert_eq!(resp.embeddings[1].values, vec![0.0, 1.0]);
}

// ── Request serialization ───────────────────────────────────────────

#[test]
fn generate_request_omits_absent_generation_config() {
    let request = GenerateContentRequest::from_prompt("hi");
    let value = serde_json::to_value(&request).unwrap();

    assert!(value.get("generationConfig").is_none());
    assert_eq!(value["contents"][0]["role"], "user");
    assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
}

// ── Client construction ─────────────────────────────────────────────

#[test]
fn client_rejects_api_key_with_invalid_header_characters() {
    let result = crate::Gemini::new("key\nwith-newline");
    assert!(matches!(result, Err(crate::Error::InvalidApiKey { .. })));
}

#[test]
fn client_accepts_custom_model_name() {
    let client = crate::Gemini::with_model("test-key", "models/gemini-1.5-flash-8b".to_string())
        .unwrap();
    assert_eq!(client.model().as_str(), "models/gemini-1.5-flash-8b");
}

// ── Model names ─────────────────────────────────────────────────────

#[test]
fn model_names_round_trip() {
    assert_eq!(Model::Gemini25Pro.as_str(), "models/gemini-2.5-pro");
    assert_eq!(Model::Gemini25FlashLite.as_str(), "models/gemini-2.5-flash-lite");
    assert_eq!(Model::GeminiEmbedding001.as_str(), "models/gemini-embedding-001");
    assert_eq!(
        Model::from("models/gemini-1.5-pro".to_string()).as_str(),
        "models/gemini-1.5-pro"
    );
    assert_eq!(Model::default().to_string(), "models/gemini-2.5-flash");
}
