//! Wire types for the retrieval service boundary.
//!
//! These types define what crosses the process boundary: the conversation
//! turns sent with each question, and the combined payload coming back.

use serde::{Deserialize, Serialize};

/// One question/answer exchange in a conversation.
///
/// Immutable once created; the history only ever grows by appending new
/// turns, so a turn is never edited after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The user's question, as submitted
    pub question: String,

    /// The clean answer text (without the sources block)
    pub answer: String,
}

impl Turn {
    /// Create a new turn.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Raw result of one retrieval/generation round-trip.
///
/// The service condenses the question, runs the vector search, and
/// synthesizes an answer with inline citations. All of that comes back as a
/// single text payload in the form:
///
/// ```text
/// <answer text>SOURCES:
/// - <source1>
/// - <source2>
/// ```
///
/// where each source is a transformed file path (separators encoded as
/// `__`, extension `.txt`). Splitting this payload is the formatter's job,
/// not the client's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResult {
    /// Combined answer-plus-sources text, exactly as the service emitted it
    pub answer: String,
}

impl RetrievalResult {
    /// Wrap a raw service payload.
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}
