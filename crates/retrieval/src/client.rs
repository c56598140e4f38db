//! Retrieval client abstraction.
//!
//! This module defines the trait every retrieval provider implements. The
//! service behind it is a black box: query condensation, vector similarity
//! search, and multi-document answer synthesis all happen remotely; the
//! client only ships the question plus the chat history and hands back the
//! combined payload.

use crate::types::{RetrievalResult, Turn};
use lugpt_core::AppResult;

/// Trait for retrieval/generation providers.
///
/// Implementations must be cheap to share (`Arc<dyn RetrievalClient>`) and
/// must map every transport-level failure to `AppError::Service` — callers
/// decide how a failed turn is surfaced, but they never retry.
#[async_trait::async_trait]
pub trait RetrievalClient: Send + Sync {
    /// Get the provider name (e.g., "http", "mock").
    fn provider_name(&self) -> &str;

    /// Answer a question given the conversation so far.
    ///
    /// # Arguments
    /// * `question` - The raw follow-up question from the user
    /// * `history` - Prior turns, oldest first, used by the service to
    ///   rewrite the question into a standalone one
    ///
    /// # Returns
    /// The combined answer-plus-sources payload.
    async fn answer(&self, question: &str, history: &[Turn]) -> AppResult<RetrievalResult>;
}
