//! Property tests for the recursive chunker.

use payshield_rag::chunking::{Chunker, RecursiveChunker};
use proptest::prelude::*;

/// Generate paragraphs of short lowercase words separated by blank lines.
fn arb_wordy_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        proptest::collection::vec("[a-z]{1,12}", 1..40).prop_map(|words| words.join(" ")),
        1..8,
    )
    .prop_map(|paragraphs| paragraphs.join("\n\n"))
}

proptest! {
    /// *For any* input text, every produced chunk stays within the
    /// configured maximum size; the character-window fallback hard-caps
    /// even separator-free runs.
    #[test]
    fn chunks_never_exceed_the_configured_size(
        text in arb_wordy_text(),
        chunk_size in 20usize..200,
    ) {
        let chunker = RecursiveChunker::new(chunk_size, chunk_size / 10);
        for chunk in chunker.chunk(&text) {
            prop_assert!(
                chunk.chars().count() <= chunk_size,
                "chunk of {} chars exceeds size {}",
                chunk.chars().count(),
                chunk_size,
            );
        }
    }

    /// *For any* text whose words fit the chunk size, no overlapping
    /// window split is needed and concatenating the chunks reconstructs
    /// the original text exactly.
    #[test]
    fn chunks_of_wordy_text_reconstruct_the_original(
        text in arb_wordy_text(),
        chunk_size in 20usize..200,
    ) {
        let chunker = RecursiveChunker::new(chunk_size, chunk_size / 10);
        let chunks = chunker.chunk(&text);
        prop_assert_eq!(chunks.concat(), text);
    }

    /// Every chunk is a contiguous substring of the input — the splitter
    /// never invents or reorders text.
    #[test]
    fn every_chunk_is_a_substring_of_the_input(
        text in arb_wordy_text(),
        chunk_size in 20usize..200,
    ) {
        let chunker = RecursiveChunker::new(chunk_size, 5);
        for chunk in chunker.chunk(&text) {
            prop_assert!(text.contains(&chunk));
        }
    }
}

#[test]
fn empty_input_yields_no_chunks() {
    let chunker = RecursiveChunker::new(100, 10);
    assert!(chunker.chunk("").is_empty());
}

#[test]
fn short_input_yields_a_single_chunk() {
    let chunker = RecursiveChunker::new(100, 10);
    assert_eq!(chunker.chunk("short text"), vec!["short text".to_string()]);
}

#[test]
fn separator_free_text_splits_into_overlapping_windows() {
    let text: String = "abcdefghij".repeat(25);
    let (size, overlap) = (100, 20);
    let chunker = RecursiveChunker::new(size, overlap);

    let chunks = chunker.chunk(&text);
    assert!(chunks.len() > 1);
    assert!(chunks.iter().all(|c| c.chars().count() <= size));

    // Consecutive windows share exactly `overlap` characters.
    for pair in chunks.windows(2) {
        let prev_len = pair[0].chars().count();
        let prev_tail: String = pair[0].chars().skip(prev_len - overlap).collect();
        assert!(pair[1].starts_with(&prev_tail));
    }

    // Stripping the overlap from every chunk after the first reconstructs
    // the input.
    let mut rebuilt = chunks[0].clone();
    for chunk in &chunks[1..] {
        rebuilt.extend(chunk.chars().skip(overlap));
    }
    assert_eq!(rebuilt, text);
}

#[test]
fn multibyte_text_splits_on_character_boundaries() {
    let text: String = "é".repeat(250);
    let chunker = RecursiveChunker::new(100, 20);

    // Would panic on a byte-slicing implementation; sizes are in characters.
    let chunks = chunker.chunk(&text);
    assert!(chunks.iter().all(|c| c.chars().count() <= 100));
    assert!(chunks.iter().all(|c| c.chars().all(|ch| ch == 'é')));
}

#[test]
fn oversized_paragraph_falls_back_to_sentence_splits() {
    let sentence = "this sentence has a few words. ";
    let paragraph = sentence.repeat(10); // ~320 chars, one paragraph
    let chunker = RecursiveChunker::new(100, 10);

    let chunks = chunker.chunk(&paragraph);
    assert!(chunks.len() > 1);
    assert!(chunks.iter().all(|c| c.chars().count() <= 100));
    assert_eq!(chunks.concat(), paragraph);
}
