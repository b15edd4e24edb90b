//! Data types for indexed chunks and search results.

use serde::{Deserialize, Serialize};

/// A bounded-length text window extracted from a source document, with its
/// vector embedding attached at index-build time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// Unique identifier, `{provider}_{doc_type}_{position}`.
    pub id: String,
    /// The text content of the chunk.
    pub text: String,
    /// The embedding vector for this chunk's text.
    pub embedding: Vec<f32>,
}

/// A retrieved [`Chunk`] paired with a relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The retrieved chunk.
    pub chunk: Chunk,
    /// The cosine-similarity score (higher is more relevant).
    pub score: f32,
}
