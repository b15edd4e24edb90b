//! Prompt templates for classification and answer synthesis.

use crate::chunk::SearchResult;

/// Concatenate retrieved chunk texts, paragraph-separated, into a single
/// context block. No deduplication, no reranking; merge order is the
/// caller's retrieval order.
pub fn build_context(results: &[SearchResult]) -> String {
    results.iter().map(|r| r.chunk.text.as_str()).collect::<Vec<_>>().join("\n\n")
}

/// The fixed instructional template for answer synthesis.
pub fn answer_prompt(context: &str, query: &str, recent_transcript: &str) -> String {
    format!(
        r#"You are a highly skilled technical assistant specializing in payment-API integrations for Stripe and Adyen.

Use the extracted documentation context below to answer the user's question.

Context:
{context}

Recent conversation:
{recent_transcript}

Question:
{query}

Rules:
- When the user asks about implementation, always respond with complete, runnable code inside fenced ```language blocks.
- Prefer Python if no language is specified; if the user asks for Node.js, Java, or another language, respond in that language.
- If the answer is not in the context, you may answer from your own knowledge, but stay within the scope of Stripe and Adyen; if the question is unrelated to payment-API integration, politely ask the user to keep questions on topic.
- If the question is missing a detail required to answer it (for example, which payment provider is meant) and neither the conversation nor the context supplies it, politely ask the user to specify the missing detail instead of guessing.

Now write the best answer:"#
    )
}

/// The fixed classification template for stage detection.
pub fn stage_prompt(query: &str, recent_transcript: &str) -> String {
    format!(
        r#"Decide whether the user's query is BUSINESS LEVEL (choosing a payment provider, comparing options, pricing, general setup) or TECHNICAL LEVEL (asking for integration code, API endpoints, programming languages).

Give your answer strictly as one of these three words:
- "business"
- "technical"
- "ambiguous"

CONVERSATION HISTORY (most recent messages):
{recent_transcript}

CURRENT USER QUERY:
{query}

Your final classification (one word only):"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::Chunk;

    fn result(text: &str) -> SearchResult {
        SearchResult {
            chunk: Chunk { id: "t_0".into(), text: text.into(), embedding: Vec::new() },
            score: 1.0,
        }
    }

    #[test]
    fn context_joins_chunks_paragraph_separated() {
        let results = vec![result("first"), result("second")];
        assert_eq!(build_context(&results), "first\n\nsecond");
    }

    #[test]
    fn context_of_no_results_is_empty() {
        assert_eq!(build_context(&[]), "");
    }

    #[test]
    fn answer_prompt_embeds_context_query_and_history() {
        let prompt = answer_prompt("CONTEXT BLOCK", "my question", "user: earlier");
        assert!(prompt.contains("CONTEXT BLOCK"));
        assert!(prompt.contains("my question"));
        assert!(prompt.contains("user: earlier"));
    }

    #[test]
    fn stage_prompt_lists_all_three_labels() {
        let prompt = stage_prompt("q", "history");
        for label in ["business", "technical", "ambiguous"] {
            assert!(prompt.contains(label));
        }
    }
}
