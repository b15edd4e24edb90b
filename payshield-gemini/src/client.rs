use std::fmt::{self, Formatter};
use std::sync::LazyLock;

use reqwest::{
    Client, ClientBuilder, Response,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use url::Url;

use crate::embedding::{
    BatchEmbedContentsRequest, BatchEmbedContentsResponse, EmbedContentRequest,
    EmbedContentResponse,
};
use crate::error::{
    BadResponseSnafu, ConstructUrlSnafu, DecodeResponseSnafu, Error, InvalidApiKeySnafu,
    PerformRequestSnafu,
};
use crate::generation::{GenerateContentRequest, GenerationConfig, GenerationResponse};

static DEFAULT_BASE_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://generativelanguage.googleapis.com/v1beta/")
        .expect("unreachable error: failed to parse default base URL")
});

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Model {
    #[default]
    #[serde(rename = "models/gemini-2.5-flash")]
    Gemini25Flash,
    #[serde(rename = "models/gemini-2.5-flash-lite")]
    Gemini25FlashLite,
    #[serde(rename = "models/gemini-2.5-pro")]
    Gemini25Pro,
    #[serde(rename = "models/gemini-embedding-001")]
    GeminiEmbedding001,
    #[serde(untagged)]
    Custom(String),
}

impl Model {
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini25Flash => "models/gemini-2.5-flash",
            Model::Gemini25FlashLite => "models/gemini-2.5-flash-lite",
            Model::Gemini25Pro => "models/gemini-2.5-pro",
            Model::GeminiEmbedding001 => "models/gemini-embedding-001",
            Model::Custom(model) => model,
        }
    }
}

impl From<String> for Model {
    fn from(model: String) -> Self {
        Self::Custom(model)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client for the Gemini API, bound to a single model.
///
/// Cloning is cheap; the underlying `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct Gemini {
    http_client: Client,
    model: Model,
    base_url: Url,
    generation_config: Option<GenerationConfig>,
}

impl Gemini {
    /// Create a client for the default model.
    pub fn new(api_key: impl AsRef<str>) -> Result<Self, Error> {
        Self::with_model(api_key, Model::default())
    }

    /// Create a client for a specific model.
    pub fn with_model<M: Into<Model>>(api_key: impl AsRef<str>, model: M) -> Result<Self, Error> {
        let headers = HeaderMap::from_iter([(
            HeaderName::from_static("x-goog-api-key"),
            HeaderValue::from_str(api_key.as_ref()).context(InvalidApiKeySnafu)?,
        )]);

        let http_client = ClientBuilder::new()
            .default_headers(headers)
            .build()
            .expect("all parameters must be valid");

        Ok(Self {
            http_client,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.clone(),
            generation_config: None,
        })
    }

    /// Set a generation config applied to every `generateContent` request.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }

    /// The model this client is bound to.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// URL for an action on this client's model, e.g. `generateContent`.
    fn action_url(&self, action: &str) -> Result<Url, Error> {
        let suffix = format!("{}:{action}", self.model.as_str());
        self.base_url.join(&suffix).context(ConstructUrlSnafu { suffix })
    }

    /// Check the response status code and return an error if it is not successful.
    async fn check_response(response: Response) -> Result<Response, Error> {
        let status = response.status();
        if !status.is_success() {
            let description = response.text().await.ok();
            BadResponseSnafu { code: status.as_u16(), description }.fail()
        } else {
            Ok(response)
        }
    }

    /// Generate content from a single user prompt.
    #[tracing::instrument(skip_all, fields(model = %self.model))]
    pub async fn generate_content(&self, prompt: &str) -> Result<GenerationResponse, Error> {
        let mut request = GenerateContentRequest::from_prompt(prompt);
        request.generation_config = self.generation_config.clone();

        let url = self.action_url("generateContent")?;
        let response = self
            .http_client
            .post(url.clone())
            .json(&request)
            .send()
            .await
            .context(PerformRequestSnafu { url })?;
        let response = Self::check_response(response).await?;
        response.json().await.context(DecodeResponseSnafu)
    }

    /// Embed a single text, returning the raw embedding vector.
    #[tracing::instrument(skip_all, fields(model = %self.model, text_len = text.len()))]
    pub async fn embed_content(&self, text: &str) -> Result<Vec<f32>, Error> {
        let request = EmbedContentRequest::new(self.model.as_str(), text);

        let url = self.action_url("embedContent")?;
        let response = self
            .http_client
            .post(url.clone())
            .json(&request)
            .send()
            .await
            .context(PerformRequestSnafu { url })?;
        let response = Self::check_response(response).await?;
        let parsed: EmbedContentResponse = response.json().await.context(DecodeResponseSnafu)?;
        Ok(parsed.embedding.values)
    }

    /// Embed a batch of texts in one request, preserving input order.
    #[tracing::instrument(skip_all, fields(model = %self.model, batch_size = texts.len()))]
    pub async fn batch_embed_contents(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, Error> {
        let request = BatchEmbedContentsRequest {
            requests: texts
                .iter()
                .map(|text| EmbedContentRequest::new(self.model.as_str(), text))
                .collect(),
        };

        let url = self.action_url("batchEmbedContents")?;
        let response = self
            .http_client
            .post(url.clone())
            .json(&request)
            .send()
            .await
            .context(PerformRequestSnafu { url })?;
        let response = Self::check_response(response).await?;
        let parsed: BatchEmbedContentsResponse =
            response.json().await.context(DecodeResponseSnafu)?;
        Ok(parsed.embeddings.into_iter().map(|e| e.values).collect())
    }
}
