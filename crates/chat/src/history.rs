//! Per-session conversation history.
//!
//! The history exists so the service can rewrite follow-up questions
//! ("Wie hoch ist er?") into standalone ones. It is owned by exactly one
//! session — never shared across sessions, never mutated in place.

use lugpt_retrieval::Turn;
use serde::{Deserialize, Serialize};

/// Append-only log of question/answer turns, oldest first.
///
/// No deduplication and no size cap: the log grows for the life of the
/// session. Turns are only added after a fully successful round-trip, so a
/// failed turn leaves no trace here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationState {
    turns: Vec<Turn>,
}

impl ConversationState {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed turn to the end of the log.
    pub fn append(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.turns.push(Turn::new(question, answer));
    }

    /// The full history, oldest first, for the retrieval call.
    pub fn as_history(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of completed turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether no turn has completed yet.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_grows_by_one() {
        let mut state = ConversationState::new();
        assert!(state.is_empty());

        state.append("Frage 1", "Antwort 1");
        assert_eq!(state.len(), 1);

        state.append("Frage 2", "Antwort 2");
        assert_eq!(state.len(), 2);

        let last = state.as_history().last().unwrap();
        assert_eq!(last, &Turn::new("Frage 2", "Antwort 2"));
    }

    #[test]
    fn test_append_preserves_prior_turns() {
        let mut state = ConversationState::new();
        state.append("Frage 1", "Antwort 1");

        let before: Vec<Turn> = state.as_history().to_vec();
        state.append("Frage 2", "Antwort 2");

        assert_eq!(&state.as_history()[..1], before.as_slice());
    }

    #[test]
    fn test_as_history_idempotent() {
        let mut state = ConversationState::new();
        state.append("Frage", "Antwort");

        let first: Vec<Turn> = state.as_history().to_vec();
        let second: Vec<Turn> = state.as_history().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut state = ConversationState::new();
        state.append("Frage", "Antwort");
        state.append("Frage", "Antwort");
        assert_eq!(state.len(), 2);
    }
}
