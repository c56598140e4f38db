//! Chat session orchestration.
//!
//! A session ties one retrieval client to one conversation history and runs
//! turns strictly in sequence: submit, parse, then commit to the history.
//! A turn either fully succeeds or leaves no trace — there is no partial
//! success and no automatic retry.

use crate::format::{split_answer, FormattedAnswer};
use crate::history::ConversationState;
use lugpt_core::AppResult;
use lugpt_retrieval::RetrievalClient;
use std::sync::Arc;

/// One conversational session against the retrieval service.
///
/// Sessions are strictly sequential (`ask` takes `&mut self`); concurrent
/// users each own an independent session with an independent history.
pub struct ChatSession {
    client: Arc<dyn RetrievalClient>,
    history: ConversationState,
}

impl ChatSession {
    /// Start a fresh session with an empty history.
    pub fn new(client: Arc<dyn RetrievalClient>) -> Self {
        Self {
            client,
            history: ConversationState::new(),
        }
    }

    /// Run one turn: ask, parse, and record.
    ///
    /// The question and the full history go to the service; the combined
    /// payload is split into answer and source URLs; only then is the turn
    /// appended. Service failures and malformed payloads propagate to the
    /// caller with the history unchanged.
    pub async fn ask(&mut self, question: &str) -> AppResult<FormattedAnswer> {
        tracing::info!("Submitting question ({} prior turns)", self.history.len());

        let result = self
            .client
            .answer(question, self.history.as_history())
            .await?;

        let formatted = split_answer(&result.answer)?;

        // Commit point: the history only sees fully successful turns, and
        // it records the clean answer, not the raw payload.
        self.history.append(question, formatted.answer.clone());

        tracing::debug!(
            "Turn recorded ({} sources, history length {})",
            formatted.sources.len(),
            self.history.len()
        );

        Ok(formatted)
    }

    /// The conversation so far.
    pub fn history(&self) -> &ConversationState {
        &self.history
    }
}
