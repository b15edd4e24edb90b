//! Disk-persisted vector indices with cosine-similarity search.
//!
//! One index exists per (provider, doc-type) pair, built offline by
//! [`build_index`] and loaded read-only at query time by
//! [`load_vectorstore`]. Loading is deliberately uncached: each call
//! re-reads from disk, and callers reuse the returned handle within a
//! single response cycle.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chunk::{Chunk, SearchResult};
use crate::config::RagConfig;
use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};
use crate::ingestion;
use crate::provider::{DocType, Provider};

/// File name of the serialized index inside a vectorstore directory.
pub const INDEX_FILE_NAME: &str = "index.json";

/// A read-only collection of embedded chunks supporting nearest-neighbor
/// search by cosine similarity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VectorIndex {
    /// Name of the embedding model the chunks were embedded with.
    pub embedding_model: String,
    /// Dimensionality of the stored embeddings.
    pub dimensions: usize,
    /// Embedded chunks in original document order.
    pub chunks: Vec<Chunk>,
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

impl VectorIndex {
    /// Number of chunks in the index.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the index holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Return the `top_k` chunks most similar to the query embedding,
    /// most similar first. Ties keep the stored chunk order (the sort is
    /// stable). An empty index yields an empty result.
    pub fn search(&self, embedding: &[f32], top_k: usize) -> Vec<SearchResult> {
        let mut scored: Vec<SearchResult> = self
            .chunks
            .iter()
            .map(|chunk| SearchResult {
                chunk: chunk.clone(),
                score: cosine_similarity(&chunk.embedding, embedding),
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);
        scored
    }

    /// Persist the index into `dir`, creating the directory as needed.
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .map_err(|e| RagError::FileAccess { path: dir.to_path_buf(), source: e })?;

        let path = dir.join(INDEX_FILE_NAME);
        let json = serde_json::to_vec(self)
            .map_err(|e| RagError::Json { path: path.clone(), source: e })?;
        fs::write(&path, json).map_err(|e| RagError::FileAccess { path, source: e })
    }

    /// Load an index from `dir`.
    ///
    /// # Errors
    ///
    /// - [`RagError::IndexNotFound`] if no index file exists there
    /// - [`RagError::Json`] if the file does not deserialize
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(INDEX_FILE_NAME);
        let bytes = fs::read(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RagError::IndexNotFound { path: dir.to_path_buf() }
            } else {
                RagError::FileAccess { path: path.clone(), source: e }
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| RagError::Json { path, source: e })
    }
}

/// Embed the ingested chunks for one (provider, doc-type) pair and persist
/// the resulting index at its fixed location.
pub async fn build_index(
    config: &RagConfig,
    provider: Provider,
    doc_type: DocType,
    embedder: &dyn EmbeddingProvider,
) -> Result<VectorIndex> {
    let texts = ingestion::load_chunks(config, provider, doc_type)?;
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    let embeddings = embedder.embed_batch(&refs).await?;

    let chunks = texts
        .into_iter()
        .zip(embeddings)
        .enumerate()
        .map(|(position, (text, embedding))| Chunk {
            id: format!("{}_{}_{position}", provider.key(), doc_type.key()),
            text,
            embedding,
        })
        .collect::<Vec<_>>();

    let index = VectorIndex {
        embedding_model: embedder.model().to_string(),
        dimensions: embedder.dimensions(),
        chunks,
    };

    let dir = config.vectorstore_path(provider, doc_type);
    index.save(&dir)?;
    info!(%provider, %doc_type, chunk_count = index.len(), "built vector index");

    Ok(index)
}

/// Load the vector index for one (provider, doc-type) pair from its fixed
/// on-disk location, rejecting indices built with a different embedding
/// model than `configured_model`.
pub fn load_vectorstore(
    config: &RagConfig,
    provider: Provider,
    doc_type: DocType,
    configured_model: &str,
) -> Result<VectorIndex> {
    let dir = config.vectorstore_path(provider, doc_type);
    let index = VectorIndex::load(&dir)?;

    if index.embedding_model != configured_model {
        return Err(RagError::ModelMismatch {
            path: dir,
            index_model: index.embedding_model,
            configured_model: configured_model.to_string(),
        });
    }

    debug!(%provider, %doc_type, chunk_count = index.len(), "loaded vector index");
    Ok(index)
}
