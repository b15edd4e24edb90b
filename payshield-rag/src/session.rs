//! Per-session conversation state.
//!
//! Each conversational surface owns one [`Session`] and passes it into the
//! pipeline operations; there is no shared process-wide state. The surface
//! is responsible for the lifecycle (create on connect, clear on reset,
//! drop on disconnect).

use std::fmt::{self, Formatter};

use crate::provider::Provider;

/// Number of trailing transcript characters handed to the classifier and
/// synthesizer as conversational context.
pub const TRANSCRIPT_WINDOW: usize = 500;

/// The author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Assistant => f.write_str("assistant"),
        }
    }
}

/// A single turn of conversation.
#[derive(Debug, Clone)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

/// Conversation history plus the user's provider selection.
///
/// History is append-only within a session; [`Session::reset`] clears both
/// the history and the selection. The provider can be set at most once
/// between resets.
#[derive(Debug, Clone, Default)]
pub struct Session {
    history: Vec<Turn>,
    selected_provider: Option<Provider>,
}

impl Session {
    /// Create a fresh session with no history and no provider selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The full conversation history, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// The provider the user committed to, if any.
    pub fn selected_provider(&self) -> Option<Provider> {
        self.selected_provider
    }

    /// Record the user's provider choice.
    ///
    /// Returns `false` without changing anything if a provider was already
    /// selected this session; the selection only reopens after a reset.
    pub fn select_provider(&mut self, provider: Provider) -> bool {
        if self.selected_provider.is_some() {
            return false;
        }
        self.selected_provider = Some(provider);
        true
    }

    /// Append a user turn.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.history.push(Turn { role: Role::User, text: text.into() });
    }

    /// Append an assistant turn.
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.history.push(Turn { role: Role::Assistant, text: text.into() });
    }

    /// Clear history and provider selection.
    pub fn reset(&mut self) {
        self.history.clear();
        self.selected_provider = None;
    }

    /// The last [`TRANSCRIPT_WINDOW`] characters of the flattened
    /// `role: text` transcript, for use as conversational context.
    pub fn recent_transcript(&self) -> String {
        let flattened = self
            .history
            .iter()
            .map(|turn| format!("{}: {}", turn.role, turn.text))
            .collect::<Vec<_>>()
            .join("\n");

        let total = flattened.chars().count();
        if total <= TRANSCRIPT_WINDOW {
            flattened
        } else {
            flattened.chars().skip(total - TRANSCRIPT_WINDOW).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_flattens_roles_in_order() {
        let mut session = Session::new();
        session.push_user("hello");
        session.push_assistant("hi there");

        assert_eq!(session.recent_transcript(), "user: hello\nassistant: hi there");
    }

    #[test]
    fn transcript_keeps_only_the_trailing_window() {
        let mut session = Session::new();
        session.push_user("x".repeat(TRANSCRIPT_WINDOW));
        session.push_assistant("tail");

        let transcript = session.recent_transcript();
        assert_eq!(transcript.chars().count(), TRANSCRIPT_WINDOW);
        assert!(transcript.ends_with("assistant: tail"));
    }

    #[test]
    fn transcript_truncation_respects_multibyte_characters() {
        let mut session = Session::new();
        session.push_user("é".repeat(TRANSCRIPT_WINDOW + 50));

        let transcript = session.recent_transcript();
        assert_eq!(transcript.chars().count(), TRANSCRIPT_WINDOW);
    }

    #[test]
    fn provider_selection_is_set_once_until_reset() {
        let mut session = Session::new();
        assert!(session.select_provider(Provider::Stripe));
        assert!(!session.select_provider(Provider::Adyen));
        assert_eq!(session.selected_provider(), Some(Provider::Stripe));

        session.reset();
        assert_eq!(session.selected_provider(), None);
        assert!(session.history().is_empty());
        assert!(session.select_provider(Provider::Adyen));
    }
}
