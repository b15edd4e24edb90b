//! Query stage classification.
//!
//! A lightweight model call decides whether the user is still choosing a
//! provider (business), already integrating (technical), or unclear
//! (ambiguous). This is a best-effort heuristic: any response outside the
//! expected label set is coerced to [`Stage::Ambiguous`].

use std::fmt::{self, Formatter};

use tracing::debug;

use crate::error::Result;
use crate::llm::LlmProvider;
use crate::prompt;

/// The classified intent category of a user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Choosing a provider, comparing options, pricing, general setup.
    Business,
    /// Integration code, API endpoints, programming languages.
    Technical,
    /// Unclear intent; the fallback for anything unrecognized.
    #[default]
    Ambiguous,
}

impl Stage {
    /// Map a raw classifier response (trimmed, lowercased) onto a stage.
    ///
    /// Anything other than exactly `business` or `technical` — empty,
    /// malformed, multi-word — becomes [`Stage::Ambiguous`].
    pub fn from_response(raw: &str) -> Stage {
        match raw.trim().to_lowercase().as_str() {
            "business" => Stage::Business,
            "technical" => Stage::Technical,
            _ => Stage::Ambiguous,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Business => "business",
            Stage::Technical => "technical",
            Stage::Ambiguous => "ambiguous",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the current query given the trailing conversation transcript.
///
/// A transport failure of the classification call propagates to the caller;
/// there is no retry.
pub async fn detect_stage(
    llm: &dyn LlmProvider,
    query: &str,
    recent_transcript: &str,
) -> Result<Stage> {
    let prompt = prompt::stage_prompt(query, recent_transcript);
    let raw = llm.generate(&prompt).await?;

    let stage = Stage::from_response(&raw);
    debug!(%stage, raw = raw.trim(), "classified query stage");
    Ok(stage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_labels_map_to_their_stages() {
        assert_eq!(Stage::from_response("business"), Stage::Business);
        assert_eq!(Stage::from_response("technical"), Stage::Technical);
        assert_eq!(Stage::from_response("ambiguous"), Stage::Ambiguous);
    }

    #[test]
    fn labels_are_trimmed_and_lowercased() {
        assert_eq!(Stage::from_response("  Business\n"), Stage::Business);
        assert_eq!(Stage::from_response("TECHNICAL"), Stage::Technical);
    }

    #[test]
    fn anything_else_coerces_to_ambiguous() {
        assert_eq!(Stage::from_response(""), Stage::Ambiguous);
        assert_eq!(Stage::from_response("businesses"), Stage::Ambiguous);
        assert_eq!(Stage::from_response("it's technical"), Stage::Ambiguous);
        assert_eq!(Stage::from_response("\"business\""), Stage::Ambiguous);
        assert_eq!(Stage::from_response("unknown"), Stage::Ambiguous);
    }

    #[test]
    fn default_stage_is_ambiguous() {
        assert_eq!(Stage::default(), Stage::Ambiguous);
    }
}
