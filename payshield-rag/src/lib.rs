//! # payshield-rag
//!
//! Retrieval-augmented answer pipeline for the payshield payment-API
//! advisor. Covers the full flow from offline ingestion to per-turn
//! answering:
//!
//! - [`ingestion`] — PDF → overlapping text chunks, persisted as JSON
//! - [`index`] — chunk embedding, disk-persisted vector indices,
//!   cosine-similarity search
//! - [`stage`] — classifying a user turn as business / technical /
//!   ambiguous via a lightweight model call
//! - [`pipeline`] — the [`Advisor`] orchestrator tying classification,
//!   retrieval, and synthesis together
//! - [`provider`] — the static Stripe/Adyen knowledge table and the
//!   keyword recommender
//! - [`session`] — per-session conversation history and provider selection
//!
//! External model calls go through the [`embedding::EmbeddingProvider`]
//! and [`llm::LlmProvider`] traits; Gemini-backed implementations are
//! provided, and tests substitute deterministic fakes.

pub mod chunk;
pub mod chunking;
pub mod config;
pub mod embedding;
pub mod error;
pub mod index;
pub mod ingestion;
pub mod llm;
pub mod pipeline;
pub mod prompt;
pub mod provider;
pub mod session;
pub mod stage;

pub use chunk::{Chunk, SearchResult};
pub use chunking::{Chunker, RecursiveChunker};
pub use config::RagConfig;
pub use embedding::{EmbeddingProvider, GeminiEmbeddingProvider};
pub use error::{RagError, Result};
pub use index::VectorIndex;
pub use llm::{GeminiLlm, LlmProvider};
pub use pipeline::{Advisor, SELECT_PROVIDER_GUIDANCE};
pub use provider::{DocType, Provider, ProviderInfo, format_recommendations, recommend_providers};
pub use session::{Role, Session, Turn};
pub use stage::Stage;
