//! Mock retrieval provider with scripted responses.

use crate::client::RetrievalClient;
use crate::types::{RetrievalResult, Turn};
use lugpt_core::{AppError, AppResult};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock provider for testing and development.
///
/// Hands out pre-loaded payloads in FIFO order, recording every question it
/// was asked. An exhausted queue yields a `Service` error, which doubles as
/// a stand-in for an unreachable service in failure-path tests.
#[derive(Debug, Default)]
pub struct MockRetrievalClient {
    responses: Mutex<VecDeque<AppResult<RetrievalResult>>>,
    questions: Mutex<Vec<String>>,
}

impl MockRetrievalClient {
    /// Create an empty mock; every call will fail until responses are queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful payload.
    pub fn push_answer(&self, payload: impl Into<String>) {
        self.responses
            .lock()
            .expect("mock responses lock poisoned")
            .push_back(Ok(RetrievalResult::new(payload)));
    }

    /// Queue a failure.
    pub fn push_error(&self, err: AppError) {
        self.responses
            .lock()
            .expect("mock responses lock poisoned")
            .push_back(Err(err));
    }

    /// Questions received so far, in call order.
    pub fn questions(&self) -> Vec<String> {
        self.questions
            .lock()
            .expect("mock questions lock poisoned")
            .clone()
    }
}

#[async_trait::async_trait]
impl RetrievalClient for MockRetrievalClient {
    fn provider_name(&self) -> &str {
        "mock"
    }

    async fn answer(&self, question: &str, _history: &[Turn]) -> AppResult<RetrievalResult> {
        self.questions
            .lock()
            .expect("mock questions lock poisoned")
            .push(question.to_string());

        self.responses
            .lock()
            .expect("mock responses lock poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Err(AppError::Service(
                    "Mock provider has no queued response".to_string(),
                ))
            })
    }
}
