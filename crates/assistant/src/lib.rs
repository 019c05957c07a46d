//! Legal assistant collaborator.
//!
//! Clients can open a conversation with a built-in bot account. When a
//! message lands in such a conversation, the handler asks the assistant
//! service for an answer and stores it as the bot's reply. The service
//! lives behind [`LegalAssistant`] so the chat handlers can run against a
//! canned implementation in tests.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("Assistant request failed: {0}")]
    Request(String),

    #[error("Assistant rejected the request ({status})")]
    Rejected { status: u16 },

    #[error("Malformed assistant response: {0}")]
    MalformedResponse(String),
}

/// The assistant, as seen by the chat handlers.
#[async_trait]
pub trait LegalAssistant: Send + Sync {
    /// Answer a single user query. No conversation history is sent; each
    /// turn stands alone.
    async fn answer(&self, query: &str) -> Result<String, AssistantError>;
}

/// HTTP client for the assistant service.
///
/// The service exposes a single endpoint taking `{"query": ...}` and
/// returning `{"answer": ...}`.
pub struct HttpAssistant {
    http: reqwest::Client,
    url: String,
}

#[derive(Deserialize)]
struct AnswerResponse {
    answer: String,
}

impl HttpAssistant {
    pub fn new(url: String, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self { http, url }
    }
}

#[async_trait]
impl LegalAssistant for HttpAssistant {
    async fn answer(&self, query: &str) -> Result<String, AssistantError> {
        let response = self
            .http
            .post(&self.url)
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|e| AssistantError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "assistant rejected query");
            return Err(AssistantError::Rejected {
                status: status.as_u16(),
            });
        }

        let body: AnswerResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::MalformedResponse(e.to_string()))?;

        Ok(body.answer)
    }
}
