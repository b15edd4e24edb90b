//! Request and response types for `embedContent` and `batchEmbedContents`.

use serde::{Deserialize, Serialize};

use crate::generation::Content;

#[derive(Debug, Clone, Serialize)]
pub struct EmbedContentRequest {
    /// Full model name, e.g. `models/gemini-embedding-001`. Required by the
    /// batch endpoint for every entry.
    pub model: String,
    pub content: Content,
}

impl EmbedContentRequest {
    pub fn new(model: &str, text: &str) -> Self {
        Self { model: model.to_string(), content: Content::user(text) }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchEmbedContentsRequest {
    pub requests: Vec<EmbedContentRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentEmbedding {
    pub values: Vec<f32>,
}

#[derive(Debug, Deserialize)]
pub struct EmbedContentResponse {
    pub embedding: ContentEmbedding,
}

#[derive(Debug, Deserialize)]
pub struct BatchEmbedContentsResponse {
    pub embeddings: Vec<ContentEmbedding>,
}
