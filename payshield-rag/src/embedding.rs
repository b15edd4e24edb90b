//! Embedding provider trait and the Gemini-backed implementation.

use async_trait::async_trait;
use tracing::{debug, error};

use payshield_gemini::{Gemini, Model};

use crate::error::{RagError, Result};

/// A provider that generates vector embeddings from text input.
///
/// The default [`embed_batch`](EmbeddingProvider::embed_batch)
/// implementation calls [`embed`](EmbeddingProvider::embed) sequentially;
/// backends that support native batching should override it.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding vector for a single text input.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embedding vectors for a batch of text inputs, preserving
    /// input order.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }

    /// Return the dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Stable model name recorded in built indices; indices built with a
    /// different model are rejected at load time.
    fn model(&self) -> &str;
}

/// An [`EmbeddingProvider`] backed by the Gemini embedding API.
///
/// # Example
///
/// ```rust,ignore
/// use payshield_rag::embedding::GeminiEmbeddingProvider;
///
/// let provider = GeminiEmbeddingProvider::new("your-api-key")?;
/// let embedding = provider.embed("hello world").await?;
/// ```
pub struct GeminiEmbeddingProvider {
    client: Gemini,
    dimensions: usize,
}

impl GeminiEmbeddingProvider {
    /// Default embedding dimensions for `gemini-embedding-001`.
    const DEFAULT_DIMENSIONS: usize = 3072;

    /// Create a new provider using the given API key and the
    /// `gemini-embedding-001` model.
    pub fn new(api_key: impl AsRef<str>) -> Result<Self> {
        let client = Gemini::with_model(api_key, Model::GeminiEmbedding001).map_err(|e| {
            RagError::Embedding {
                provider: "Gemini".into(),
                message: format!("failed to create Gemini client: {e}"),
            }
        })?;

        Ok(Self { client, dimensions: Self::DEFAULT_DIMENSIONS })
    }

    /// Create a new provider from an existing [`Gemini`] client bound to an
    /// embedding model.
    pub fn from_client(client: Gemini) -> Self {
        Self { client, dimensions: Self::DEFAULT_DIMENSIONS }
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        debug!(provider = "Gemini", text_len = text.len(), "embedding single text");

        self.client.embed_content(text).await.map_err(|e| {
            error!(provider = "Gemini", error = %e, "embedding request failed");
            RagError::Embedding { provider: "Gemini".into(), message: format!("{e}") }
        })
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(provider = "Gemini", batch_size = texts.len(), "embedding batch");

        self.client.batch_embed_contents(texts).await.map_err(|e| {
            error!(provider = "Gemini", error = %e, "batch embedding request failed");
            RagError::Embedding { provider: "Gemini".into(), message: format!("{e}") }
        })
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model(&self) -> &str {
        self.client.model().as_str()
    }
}
