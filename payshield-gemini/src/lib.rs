//! Minimal client for the Gemini generative-language API.
//!
//! Supports the two request families payshield needs: text generation
//! (`generateContent`) and embeddings (`embedContent` /
//! `batchEmbedContents`), authenticated with an API key sent in the
//! `x-goog-api-key` header.
//!
//! # Example
//!
//! ```rust,no_run
//! use payshield_gemini::{Gemini, Model};
//!
//! # async fn example() -> Result<(), payshield_gemini::Error> {
//! let client = Gemini::with_model("api-key", Model::Gemini25FlashLite)?;
//! let response = client.generate_content("Say hello.").await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
pub mod embedding;
pub mod generation;

#[cfg(test)]
mod response_parsing_tests;

pub use client::{Gemini, Model};
pub use error::Error;
pub use generation::{GenerationConfig, GenerationResponse};
