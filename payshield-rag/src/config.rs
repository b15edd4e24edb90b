//! Configuration for the advisor pipeline.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RagError, Result};
use crate::provider::{DocType, Provider};

/// Default maximum chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;
/// Default overlap between consecutive chunks in characters.
pub const DEFAULT_CHUNK_OVERLAP: usize = 100;
/// Default number of chunks retrieved per index.
pub const DEFAULT_TOP_K: usize = 5;

/// Configuration parameters for the advisor pipeline.
///
/// The `data_root` anchors the on-disk layout: source PDFs live under
/// `raw_docs/`, ingested chunk files under `processed_chunks/`, and vector
/// indices under `embeddings/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RagConfig {
    /// Root directory for source documents, chunk files, and indices.
    pub data_root: PathBuf,
    /// Maximum chunk size in characters.
    pub chunk_size: usize,
    /// Number of overlapping characters between consecutive chunks.
    pub chunk_overlap: usize,
    /// Number of top results to return from each vector search.
    pub top_k: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("data"),
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl RagConfig {
    /// Create a new builder for constructing a [`RagConfig`].
    pub fn builder() -> RagConfigBuilder {
        RagConfigBuilder::default()
    }

    /// Directory holding the source PDFs.
    pub fn raw_docs_dir(&self) -> PathBuf {
        self.data_root.join("raw_docs")
    }

    /// Chunk file written by ingestion for one (provider, doc-type) pair.
    pub fn chunks_path(&self, provider: Provider, doc_type: DocType) -> PathBuf {
        self.data_root
            .join("processed_chunks")
            .join(provider.key())
            .join(format!("{}_chunks.json", doc_type.key()))
    }

    /// Vectorstore directory for one (provider, doc-type) pair.
    pub fn vectorstore_path(&self, provider: Provider, doc_type: DocType) -> PathBuf {
        self.data_root
            .join("embeddings")
            .join(format!("{}_{}_vectorstore", provider.key(), doc_type.key()))
    }
}

/// Builder for constructing a validated [`RagConfig`].
#[derive(Debug, Clone, Default)]
pub struct RagConfigBuilder {
    config: RagConfig,
}

impl RagConfigBuilder {
    /// Set the data root directory.
    pub fn data_root(mut self, root: impl AsRef<Path>) -> Self {
        self.config.data_root = root.as_ref().to_path_buf();
        self
    }

    /// Set the maximum chunk size in characters.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Set the overlap between consecutive chunks in characters.
    pub fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.config.chunk_overlap = overlap;
        self
    }

    /// Set the number of top results to return from each vector search.
    pub fn top_k(mut self, k: usize) -> Self {
        self.config.top_k = k;
        self
    }

    /// Build the [`RagConfig`], validating that parameters are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Config`] if:
    /// - `chunk_size == 0`
    /// - `chunk_overlap >= chunk_size`
    /// - `top_k == 0`
    pub fn build(self) -> Result<RagConfig> {
        if self.config.chunk_size == 0 {
            return Err(RagError::Config("chunk_size must be greater than zero".to_string()));
        }
        if self.config.chunk_overlap >= self.config.chunk_size {
            return Err(RagError::Config(format!(
                "chunk_overlap ({}) must be less than chunk_size ({})",
                self.config.chunk_overlap, self.config.chunk_size
            )));
        }
        if self.config.top_k == 0 {
            return Err(RagError::Config("top_k must be greater than zero".to_string()));
        }
        Ok(self.config)
    }
}
