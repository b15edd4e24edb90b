//! Error types for the `payshield-rag` crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the advisor pipeline.
#[derive(Debug, Error)]
pub enum RagError {
    /// A source or data file could not be read or written.
    #[error("failed to access {path:?}: {source}")]
    FileAccess {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// Text extraction from a source document failed.
    #[error("failed to extract text from {path:?}: {message}")]
    Extraction {
        /// The source document.
        path: PathBuf,
        /// A description of the failure.
        message: String,
    },

    /// A chunk or index file held malformed JSON.
    #[error("invalid JSON in {path:?}: {source}")]
    Json {
        /// The file that failed to (de)serialize.
        path: PathBuf,
        /// The underlying serde failure.
        source: serde_json::Error,
    },

    /// No vector index exists at the expected location.
    #[error("no vector index at {path:?} (run `payshield index` first)")]
    IndexNotFound {
        /// The vectorstore directory that was probed.
        path: PathBuf,
    },

    /// An index was built with a different embedding model than the one
    /// configured for querying.
    #[error(
        "index at {path:?} was built with embedding model '{index_model}', \
         but the loader is configured with '{configured_model}'"
    )]
    ModelMismatch {
        path: PathBuf,
        index_model: String,
        configured_model: String,
    },

    /// An error occurred during embedding generation.
    #[error("embedding error ({provider}): {message}")]
    Embedding {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// A generative-model call failed.
    #[error("LLM error ({model}): {message}")]
    Llm {
        /// The model that produced the error.
        model: String,
        /// A description of the failure.
        message: String,
    },

    /// A configuration validation error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A convenience result type for advisor operations.
pub type Result<T> = std::result::Result<T, RagError>;
