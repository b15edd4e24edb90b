//! Offline PDF-to-chunk ingestion.
//!
//! Extracts text from source PDFs, splits it with the recursive chunker,
//! and persists the ordered chunk texts as one JSON array of strings per
//! (provider, doc-type) pair. Runs entirely offline; no network calls.

use std::fs;
use std::path::Path;

use tracing::{debug, error, info};

use crate::chunking::{Chunker, RecursiveChunker};
use crate::config::RagConfig;
use crate::error::{RagError, Result};
use crate::provider::{DocType, Provider};

/// The fixed set of source documents, `(provider, doc_type, filename)`.
/// Filenames are resolved against the configured `raw_docs/` directory.
pub const MANIFEST: [(Provider, DocType, &str); 4] = [
    (Provider::Stripe, DocType::Business, "stripe_business_info.pdf"),
    (Provider::Stripe, DocType::Technical, "stripe_technical_docs.pdf"),
    (Provider::Adyen, DocType::Business, "adyen_business_info.pdf"),
    (Provider::Adyen, DocType::Technical, "adyen_technical_docs.pdf"),
];

/// Extract all text from a PDF, per-page text concatenated in page order.
pub fn extract_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .map_err(|e| RagError::FileAccess { path: path.to_path_buf(), source: e })?;

    let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| RagError::Extraction {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    // Page count is informational only; extraction already walks pages in order.
    let page_count = lopdf::Document::load_mem(&bytes)
        .map(|doc| doc.get_pages().len())
        .unwrap_or(0);
    debug!(path = %path.display(), page_count, chars = text.len(), "extracted text");

    Ok(text)
}

/// Process one source document: extract, chunk, persist.
///
/// The chunk file is only written after extraction and splitting succeed,
/// so a failure leaves no partial output for this document. Returns the
/// number of chunks written.
pub fn process_document(
    config: &RagConfig,
    provider: Provider,
    doc_type: DocType,
    source_file: &str,
) -> Result<usize> {
    let pdf_path = config.raw_docs_dir().join(source_file);
    let text = extract_text(&pdf_path)?;

    let chunker = RecursiveChunker::new(config.chunk_size, config.chunk_overlap);
    let chunks = chunker.chunk(&text);

    save_chunks(&chunks, &config.chunks_path(provider, doc_type))?;
    info!(%provider, %doc_type, chunk_count = chunks.len(), "processed document");

    Ok(chunks.len())
}

/// Run the full ingestion manifest.
///
/// A failure on one document does not halt the batch and does not roll
/// back previously completed documents. Returns the failures, if any.
pub fn ingest_manifest(config: &RagConfig) -> Vec<(Provider, DocType, RagError)> {
    let mut failures = Vec::new();

    for (provider, doc_type, source_file) in MANIFEST {
        match process_document(config, provider, doc_type, source_file) {
            Ok(chunk_count) => {
                debug!(%provider, %doc_type, chunk_count, "manifest entry done");
            }
            Err(e) => {
                error!(%provider, %doc_type, source_file, error = %e, "ingestion failed");
                failures.push((provider, doc_type, e));
            }
        }
    }

    failures
}

/// Write the ordered chunk texts as a JSON array of strings, creating
/// intermediate directories as needed.
fn save_chunks(chunks: &[String], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| RagError::FileAccess { path: parent.to_path_buf(), source: e })?;
    }

    let json = serde_json::to_vec_pretty(chunks)
        .map_err(|e| RagError::Json { path: path.to_path_buf(), source: e })?;
    fs::write(path, json).map_err(|e| RagError::FileAccess { path: path.to_path_buf(), source: e })
}

/// Read the chunk file for one (provider, doc-type) pair back into memory.
pub fn load_chunks(
    config: &RagConfig,
    provider: Provider,
    doc_type: DocType,
) -> Result<Vec<String>> {
    let path = config.chunks_path(provider, doc_type);
    let bytes =
        fs::read(&path).map_err(|e| RagError::FileAccess { path: path.clone(), source: e })?;
    serde_json::from_slice(&bytes).map_err(|e| RagError::Json { path, source: e })
}
