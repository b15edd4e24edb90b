//! The advisor pipeline orchestrator.
//!
//! [`Advisor`] composes an [`EmbeddingProvider`] and two [`LlmProvider`]s
//! (a lightweight classifier and a larger synthesizer) over the on-disk
//! vector indices, and drives the retrieve-and-answer flow for a user turn.
//!
//! # Example
//!
//! ```rust,ignore
//! use payshield_rag::{Advisor, RagConfig};
//!
//! let advisor = Advisor::builder()
//!     .config(RagConfig::default())
//!     .embedder(Arc::new(embedder))
//!     .classifier(Arc::new(flash_lite))
//!     .synthesizer(Arc::new(pro))
//!     .build()?;
//!
//! let stage = advisor.detect_stage(&query, &transcript).await?;
//! let answer = advisor.rag_answer(&query, selected, &transcript, stage).await?;
//! ```

use std::sync::Arc;

use tracing::{info, warn};

use crate::chunk::SearchResult;
use crate::config::RagConfig;
use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};
use crate::index::{self, VectorIndex};
use crate::llm::LlmProvider;
use crate::prompt;
use crate::provider::{DocType, Provider};
use crate::stage::{self, Stage};

/// Returned for technical questions asked before a provider is selected.
/// The only user-facing guard in the pipeline; no retrieval or model call
/// happens on this path.
pub const SELECT_PROVIDER_GUIDANCE: &str =
    "Please select a payment provider first to proceed with technical integration questions.";

/// The advisor pipeline orchestrator.
///
/// Construct one via [`Advisor::builder()`]. All operations are sequential
/// within a turn; indices are re-read from disk per call and the handle is
/// reused only inside one turn.
pub struct Advisor {
    config: RagConfig,
    embedder: Arc<dyn EmbeddingProvider>,
    classifier: Arc<dyn LlmProvider>,
    synthesizer: Arc<dyn LlmProvider>,
}

impl Advisor {
    /// Create a new [`AdvisorBuilder`].
    pub fn builder() -> AdvisorBuilder {
        AdvisorBuilder::default()
    }

    /// Return a reference to the pipeline configuration.
    pub fn config(&self) -> &RagConfig {
        &self.config
    }

    /// Return a reference to the embedding provider.
    pub fn embedder(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.embedder
    }

    /// Load the vector index for one (provider, doc-type) pair.
    pub fn load_vectorstore(&self, provider: Provider, doc_type: DocType) -> Result<VectorIndex> {
        index::load_vectorstore(&self.config, provider, doc_type, self.embedder.model())
    }

    /// Embed the query and return its `top_k` nearest chunks from `index`,
    /// most similar first.
    pub async fn retrieve_context(
        &self,
        query: &str,
        index: &VectorIndex,
    ) -> Result<Vec<SearchResult>> {
        let embedding = self.embedder.embed(query).await?;
        Ok(index.search(&embedding, self.config.top_k))
    }

    /// Classify the current query into a [`Stage`].
    pub async fn detect_stage(&self, query: &str, recent_transcript: &str) -> Result<Stage> {
        stage::detect_stage(self.classifier.as_ref(), query, recent_transcript).await
    }

    /// Build the synthesis prompt from retrieved context and forward it to
    /// the synthesis model, returning its raw text response verbatim.
    pub async fn synthesize(
        &self,
        context: &[SearchResult],
        query: &str,
        recent_transcript: &str,
    ) -> Result<String> {
        let context_text = prompt::build_context(context);
        let prompt = prompt::answer_prompt(&context_text, query, recent_transcript);
        self.synthesizer.generate(&prompt).await
    }

    /// Answer a user turn according to its classified stage.
    ///
    /// - `Business`: retrieve from both providers' business indices, merged
    ///   Stripe-then-Adyen.
    /// - `Technical`: requires a selected provider; without one, returns
    ///   [`SELECT_PROVIDER_GUIDANCE`] and performs no retrieval or model
    ///   call. Otherwise retrieves from that provider's technical index.
    /// - `Ambiguous`: retrieve from all four indices, merged in the fixed
    ///   order business-stripe, business-adyen, technical-stripe,
    ///   technical-adyen.
    pub async fn rag_answer(
        &self,
        query: &str,
        selected_provider: Option<Provider>,
        recent_transcript: &str,
        stage: Stage,
    ) -> Result<String> {
        match stage {
            Stage::Business => {
                info!(stage = %stage, "answering from business indices");

                let mut merged = Vec::new();
                for provider in Provider::ALL {
                    let index = self.load_vectorstore(provider, DocType::Business)?;
                    merged.extend(self.retrieve_context(query, &index).await?);
                }

                self.synthesize(&merged, query, recent_transcript).await
            }
            Stage::Technical => {
                let Some(provider) = selected_provider else {
                    warn!("technical query before provider selection");
                    return Ok(SELECT_PROVIDER_GUIDANCE.to_string());
                };
                info!(stage = %stage, %provider, "answering from technical index");

                let index = self.load_vectorstore(provider, DocType::Technical)?;
                let context = self.retrieve_context(query, &index).await?;

                self.synthesize(&context, query, recent_transcript).await
            }
            Stage::Ambiguous => {
                info!(stage = %stage, "answering from all indices");

                let mut merged = Vec::new();
                for doc_type in DocType::ALL {
                    for provider in Provider::ALL {
                        let index = self.load_vectorstore(provider, doc_type)?;
                        merged.extend(self.retrieve_context(query, &index).await?);
                    }
                }

                self.synthesize(&merged, query, recent_transcript).await
            }
        }
    }
}

/// Builder for constructing an [`Advisor`].
///
/// All fields are required except `config`, which defaults.
#[derive(Default)]
pub struct AdvisorBuilder {
    config: Option<RagConfig>,
    embedder: Option<Arc<dyn EmbeddingProvider>>,
    classifier: Option<Arc<dyn LlmProvider>>,
    synthesizer: Option<Arc<dyn LlmProvider>>,
}

impl AdvisorBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: RagConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the embedding provider.
    pub fn embedder(mut self, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    /// Set the lightweight classification model.
    pub fn classifier(mut self, classifier: Arc<dyn LlmProvider>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Set the synthesis model.
    pub fn synthesizer(mut self, synthesizer: Arc<dyn LlmProvider>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    /// Build the [`Advisor`], validating that all required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Config`] if a required provider is missing.
    pub fn build(self) -> Result<Advisor> {
        let embedder = self
            .embedder
            .ok_or_else(|| RagError::Config("embedder is required".to_string()))?;
        let classifier = self
            .classifier
            .ok_or_else(|| RagError::Config("classifier is required".to_string()))?;
        let synthesizer = self
            .synthesizer
            .ok_or_else(|| RagError::Config("synthesizer is required".to_string()))?;

        Ok(Advisor {
            config: self.config.unwrap_or_default(),
            embedder,
            classifier,
            synthesizer,
        })
    }
}
