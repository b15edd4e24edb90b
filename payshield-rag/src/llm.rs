//! Generative-model provider trait and the Gemini-backed implementation.

use async_trait::async_trait;
use tracing::{debug, error};

use payshield_gemini::{Gemini, Model};

use crate::error::{RagError, Result};

/// A text-in, text-out generative model.
///
/// Both the stage classifier and the answer synthesizer consume this trait,
/// typically bound to different models (a lightweight one for
/// classification, a larger one for synthesis).
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a prompt and return the model's raw text response verbatim.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Model identifier for logs and error messages.
    fn model(&self) -> &str;
}

/// An [`LlmProvider`] backed by the Gemini `generateContent` API.
pub struct GeminiLlm {
    client: Gemini,
}

impl GeminiLlm {
    /// Create a provider for a specific Gemini model.
    pub fn new<M: Into<Model>>(api_key: impl AsRef<str>, model: M) -> Result<Self> {
        let client = Gemini::with_model(api_key, model).map_err(|e| RagError::Llm {
            model: "Gemini".into(),
            message: format!("failed to create Gemini client: {e}"),
        })?;

        Ok(Self { client })
    }

    /// Create a provider from an existing [`Gemini`] client.
    pub fn from_client(client: Gemini) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LlmProvider for GeminiLlm {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(model = %self.client.model(), prompt_len = prompt.len(), "generating content");

        let response = self.client.generate_content(prompt).await.map_err(|e| {
            error!(model = %self.client.model(), error = %e, "generation request failed");
            RagError::Llm { model: self.client.model().to_string(), message: format!("{e}") }
        })?;

        // No validation of the model output; callers decide what malformed
        // or empty text means for their operation.
        Ok(response.text())
    }

    fn model(&self) -> &str {
        self.client.model().as_str()
    }
}
