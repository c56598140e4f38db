//! HTTP retrieval provider.
//!
//! Talks to the hosted retrieval/generation service over JSON. The service
//! owns the vector store and the language model; this provider only frames
//! the request, enforces a deadline, and maps failures to `AppError`.

use crate::client::RetrievalClient;
use crate::condense::render_condense_prompt;
use crate::types::{RetrievalResult, Turn};
use lugpt_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Service API request format.
#[derive(Debug, Serialize)]
struct AnswerRequest<'a> {
    question: &'a str,
    /// Prior turns as `[question, answer]` pairs, oldest first
    chat_history: Vec<(&'a str, &'a str)>,
    /// Rendered standalone-question rewrite prompt
    condense_prompt: String,
    /// Vector store collection to search
    collection: &'a str,
}

/// Service API response format.
#[derive(Debug, Deserialize)]
struct AnswerResponse {
    answer: String,
}

/// HTTP client for the retrieval/generation service.
pub struct HttpRetrievalClient {
    /// Base URL of the service
    endpoint: String,

    /// Collection the service should search
    collection: String,

    /// Optional bearer token
    api_key: Option<String>,

    /// HTTP client with a hard request deadline
    client: reqwest::Client,
}

impl HttpRetrievalClient {
    /// Create a new HTTP client.
    ///
    /// Every request carries a hard timeout; a hung service call fails the
    /// turn instead of blocking the session indefinitely.
    pub fn new(
        endpoint: impl Into<String>,
        collection: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Service(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            collection: collection.into(),
            api_key,
            client,
        })
    }

    /// Build the wire request for a question and its history.
    fn to_answer_request<'a>(
        &'a self,
        question: &'a str,
        history: &'a [Turn],
    ) -> AppResult<AnswerRequest<'a>> {
        let chat_history = history
            .iter()
            .map(|turn| (turn.question.as_str(), turn.answer.as_str()))
            .collect();

        Ok(AnswerRequest {
            question,
            chat_history,
            condense_prompt: render_condense_prompt(history, question)?,
            collection: &self.collection,
        })
    }
}

#[async_trait::async_trait]
impl RetrievalClient for HttpRetrievalClient {
    fn provider_name(&self) -> &str {
        "http"
    }

    async fn answer(&self, question: &str, history: &[Turn]) -> AppResult<RetrievalResult> {
        tracing::info!("Sending answer request to retrieval service");
        tracing::debug!(
            "Question: {} ({} prior turns)",
            question,
            history.len()
        );

        let request = self.to_answer_request(question, history)?;
        let url = format!("{}/api/answer", self.endpoint);

        let mut builder = self.client.post(&url).json(&request);
        if let Some(ref key) = self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Service(format!("Retrieval service timed out: {}", e))
            } else {
                AppError::Service(format!("Failed to reach retrieval service: {}", e))
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Service(format!(
                "Retrieval service error ({}): {}",
                status, error_text
            )));
        }

        let answer_response: AnswerResponse = response
            .json()
            .await
            .map_err(|e| AppError::Service(format!("Failed to parse service response: {}", e)))?;

        tracing::info!("Received answer payload from retrieval service");
        tracing::debug!("Payload: {} bytes", answer_response.answer.len());

        Ok(RetrievalResult::new(answer_response.answer))
    }
}
