//! Recursive character-based text chunking.
//!
//! The [`RecursiveChunker`] splits hierarchically by paragraphs, sentences,
//! then words, falling back to fixed character windows with overlap for
//! text that carries no separators at all.

/// A strategy for splitting extracted document text into chunks.
///
/// Returns an empty `Vec` for empty input. Sizes and overlap are counted
/// in characters, not bytes, so multi-byte text never splits mid-character.
pub trait Chunker: Send + Sync {
    /// Split text into ordered chunks.
    fn chunk(&self, text: &str) -> Vec<String>;
}

/// Splits text hierarchically: paragraphs → sentences → words → characters.
///
/// First splits by paragraph separators (`\n\n`). If a paragraph exceeds
/// `chunk_size`, splits by sentence boundaries (`. `, `! `, `? `), then by
/// word boundaries. A segment with no separators left is cut into fixed
/// character windows sharing `chunk_overlap` trailing/leading characters.
///
/// # Example
///
/// ```rust,ignore
/// use payshield_rag::chunking::{Chunker, RecursiveChunker};
///
/// let chunker = RecursiveChunker::new(1000, 100);
/// let chunks = chunker.chunk(&extracted_text);
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl RecursiveChunker {
    /// Create a new `RecursiveChunker`.
    ///
    /// # Arguments
    ///
    /// * `chunk_size` — maximum number of characters per chunk
    /// * `chunk_overlap` — number of overlapping characters between
    ///   consecutive character-window chunks
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self { chunk_size, chunk_overlap }
    }
}

/// Separator hierarchy, coarsest first.
const SEPARATORS: [&str; 5] = ["\n\n", ". ", "! ", "? ", " "];

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split text by a separator, then merge segments into chunks that respect
/// `chunk_size`. A segment that alone exceeds `chunk_size` is split further
/// using the next-level separator.
fn split_and_merge(
    text: &str,
    chunk_size: usize,
    chunk_overlap: usize,
    separators: &[&str],
) -> Vec<String> {
    if char_len(text) <= chunk_size || separators.is_empty() {
        return split_by_size(text, chunk_size, chunk_overlap);
    }

    let separator = separators[0];
    let remaining_separators = &separators[1..];

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for segment in split_keeping_separator(text, separator) {
        let segment_len = char_len(segment);
        if current.is_empty() {
            current.push_str(segment);
            current_len = segment_len;
        } else if current_len + segment_len <= chunk_size {
            current.push_str(segment);
            current_len += segment_len;
        } else {
            flush_chunk(&mut chunks, current, chunk_size, chunk_overlap, remaining_separators);
            current = segment.to_string();
            current_len = segment_len;
        }
    }

    if !current.is_empty() {
        flush_chunk(&mut chunks, current, chunk_size, chunk_overlap, remaining_separators);
    }

    chunks
}

/// Push a completed chunk, recursing with finer separators if it is still
/// over size.
fn flush_chunk(
    chunks: &mut Vec<String>,
    current: String,
    chunk_size: usize,
    chunk_overlap: usize,
    remaining_separators: &[&str],
) {
    if char_len(&current) > chunk_size {
        chunks.extend(split_and_merge(&current, chunk_size, chunk_overlap, remaining_separators));
    } else {
        chunks.push(current);
    }
}

/// Split text at a separator while keeping the separator attached to the
/// preceding segment, so that concatenating segments reconstructs the input.
fn split_keeping_separator<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    let mut result = Vec::new();
    let mut start = 0;

    while let Some(pos) = text[start..].find(separator) {
        let end = start + pos + separator.len();
        result.push(&text[start..end]);
        start = end;
    }

    if start < text.len() {
        result.push(&text[start..]);
    }

    result
}

/// Fixed character windows with overlap; the last resort for separator-free
/// text.
fn split_by_size(text: &str, chunk_size: usize, chunk_overlap: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;

    loop {
        let end = (start + chunk_size).min(chars.len());
        chunks.push(chars[start..end].iter().collect());
        if end == chars.len() {
            break;
        }
        let step = chunk_size.saturating_sub(chunk_overlap);
        if step == 0 {
            break;
        }
        start += step;
    }

    chunks
}

impl Chunker for RecursiveChunker {
    fn chunk(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        split_and_merge(text, self.chunk_size, self.chunk_overlap, &SEPARATORS)
    }
}
