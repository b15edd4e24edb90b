//! `payshield` — payment-API advisor CLI.
//!
//! Subcommands cover the offline preparation steps (`ingest`, `index`) and
//! the interactive advisor (`chat`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use payshield_rag::{GeminiEmbeddingProvider, RagConfig, index, ingestion};

mod chat;

#[derive(Parser)]
#[command(
    name = "payshield",
    version,
    about = "Payment-API advisor: compare Stripe and Adyen, then ask questions grounded in their documentation"
)]
struct Cli {
    /// Root directory for source PDFs, chunk files, and vector indices.
    #[arg(long, default_value = "data", global = true)]
    data_root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive advisor chat.
    Chat,
    /// Extract and chunk the source PDFs listed in the ingestion manifest.
    Ingest,
    /// Embed ingested chunks and build the per-provider vector indices.
    Index,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = RagConfig::builder().data_root(&cli.data_root).build()?;

    match cli.command {
        Commands::Chat => chat::run(config).await,
        Commands::Ingest => run_ingest(&config),
        Commands::Index => run_index(&config).await,
    }
}

/// API key for the Gemini endpoints, from the environment.
pub(crate) fn api_key() -> Result<String> {
    std::env::var("GEMINI_API_KEY")
        .or_else(|_| std::env::var("GOOGLE_API_KEY"))
        .context("GEMINI_API_KEY (or GOOGLE_API_KEY) must be set")
}

fn run_ingest(config: &RagConfig) -> Result<()> {
    let failures = ingestion::ingest_manifest(config);
    if failures.is_empty() {
        println!("Ingested all {} manifest documents.", ingestion::MANIFEST.len());
        return Ok(());
    }

    for (provider, doc_type, error) in &failures {
        eprintln!("{provider}/{doc_type}: {error}");
    }
    anyhow::bail!(
        "{} of {} documents failed to ingest",
        failures.len(),
        ingestion::MANIFEST.len()
    )
}

async fn run_index(config: &RagConfig) -> Result<()> {
    let embedder = GeminiEmbeddingProvider::new(api_key()?)?;

    for (provider, doc_type, _) in ingestion::MANIFEST {
        let built = index::build_index(config, provider, doc_type, &embedder).await?;
        println!("{provider}/{doc_type}: indexed {} chunks", built.len());
    }

    Ok(())
}
