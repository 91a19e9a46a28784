//! Text summarization over Groq chat completions.
//!
//! Turns `(text, style)` into one completion request and hands back the
//! model's reply untouched.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::client::GroqClient;
use crate::errors::GroqError;
use crate::observability::redact_secrets;
use crate::types::chat::{ChatRequest, FinishReason, Message};

/// Sampling temperature used for every summary.
pub const SUMMARY_TEMPERATURE: f32 = 0.3;

/// Upper bound on generated tokens per summary.
pub const SUMMARY_MAX_TOKENS: u32 = 500;

/// Instruction prefixed to the text for [`SummaryStyle::Concise`].
pub const CONCISE_INSTRUCTION: &str = "Provide a concise summary of the following text:";

/// Instruction prefixed to the text for [`SummaryStyle::Bullets`].
pub const BULLETS_INSTRUCTION: &str = "Summarize the following text as bullet points:";

/// Summary layout requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    /// A short paragraph.
    #[default]
    Concise,
    /// A bullet-point list.
    Bullets,
}

impl SummaryStyle {
    /// Resolves a request label. Only `"bullets"` selects the bullet
    /// template; every other label, known or not, means concise.
    pub fn from_label(label: &str) -> Self {
        match label {
            "bullets" => SummaryStyle::Bullets,
            _ => SummaryStyle::Concise,
        }
    }

    /// Returns the instruction line for this style.
    pub fn instruction(self) -> &'static str {
        match self {
            SummaryStyle::Concise => CONCISE_INSTRUCTION,
            SummaryStyle::Bullets => BULLETS_INSTRUCTION,
        }
    }

    /// Returns the canonical label.
    pub fn as_str(self) -> &'static str {
        match self {
            SummaryStyle::Concise => "concise",
            SummaryStyle::Bullets => "bullets",
        }
    }
}

impl From<&str> for SummaryStyle {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl std::fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the user prompt sent to the model.
pub fn build_prompt(text: &str, style: SummaryStyle) -> String {
    format!("{}\n\n{}", style.instruction(), text)
}

/// Error returned by a summarizer.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The completion call failed for any reason.
    #[error("Error calling Groq API: {0}")]
    Completion(#[from] GroqError),
}

/// Something that can summarize text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarizes `text` in the given style.
    async fn summarize(&self, text: &str, style: SummaryStyle) -> Result<String, SummarizeError>;
}

/// Summarizer backed by a Groq chat completion per call.
#[derive(Debug)]
pub struct GroqSummarizer {
    client: GroqClient,
}

impl GroqSummarizer {
    /// Creates a summarizer over an existing client.
    pub fn new(client: GroqClient) -> Self {
        Self { client }
    }

    /// Returns the model every summary is requested from.
    pub fn model(&self) -> &str {
        &self.client.config().model
    }

    /// Builds the completion request for `text` in `style`.
    pub fn completion_request(&self, text: &str, style: SummaryStyle) -> ChatRequest {
        ChatRequest::new(self.model(), vec![Message::user(build_prompt(text, style))])
            .temperature(SUMMARY_TEMPERATURE)
            .max_tokens(SUMMARY_MAX_TOKENS)
    }

    async fn complete(&self, text: &str, style: SummaryStyle) -> Result<String, GroqError> {
        let response = self
            .client
            .chat()
            .create(self.completion_request(text, style))
            .await?;

        if response.finish_reason() == Some(FinishReason::Length) {
            tracing::warn!(
                max_tokens = SUMMARY_MAX_TOKENS,
                "summary truncated at the token limit"
            );
        }

        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "completion usage"
            );
        }

        response
            .content()
            .map(str::to_owned)
            .ok_or_else(|| GroqError::EmptyResponse {
                message: format!("completion {} carried no message content", response.id),
            })
    }
}

#[async_trait]
impl Summarizer for GroqSummarizer {
    #[instrument(
        skip(self, text),
        fields(model = %self.model(), style = %style, text_chars = text.chars().count())
    )]
    async fn summarize(&self, text: &str, style: SummaryStyle) -> Result<String, SummarizeError> {
        match self.complete(text, style).await {
            Ok(summary) => Ok(summary),
            Err(err) => {
                tracing::warn!(
                    status = ?err.status_code(),
                    error = %redact_secrets(&err.to_string()),
                    "summarization failed"
                );
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GroqConfig;
    use crate::mocks::{fixtures, MockTransport};
    use crate::transport::HttpTransport;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use test_case::test_case;

    fn summarizer(transport: Arc<MockTransport>) -> GroqSummarizer {
        let config = GroqConfig::builder().api_key("gsk_unit_test").build().unwrap();
        let client = GroqClient::builder()
            .config(config)
            .transport(transport as Arc<dyn HttpTransport>)
            .build()
            .unwrap();
        GroqSummarizer::new(client)
    }

    fn sent_body(transport: &MockTransport) -> serde_json::Value {
        let request = transport.last_request().unwrap();
        serde_json::from_slice(request.body.as_deref().unwrap()).unwrap()
    }

    #[test_case("bullets", SummaryStyle::Bullets ; "bullets label")]
    #[test_case("concise", SummaryStyle::Concise ; "concise label")]
    #[test_case("", SummaryStyle::Concise ; "empty label")]
    #[test_case("Bullets", SummaryStyle::Concise ; "case sensitive")]
    #[test_case("haiku", SummaryStyle::Concise ; "unknown label")]
    fn test_style_from_label(label: &str, expected: SummaryStyle) {
        assert_eq!(SummaryStyle::from_label(label), expected);
    }

    #[test]
    fn test_build_prompt_templates() {
        assert_eq!(
            build_prompt("Some text", SummaryStyle::Concise),
            "Provide a concise summary of the following text:\n\nSome text"
        );
        assert_eq!(
            build_prompt("Some text", SummaryStyle::Bullets),
            "Summarize the following text as bullet points:\n\nSome text"
        );
    }

    #[tokio::test]
    async fn test_summarize_sends_fixed_parameters() {
        let transport = Arc::new(MockTransport::new());
        transport.queue_json(&fixtures::chat_response_json("A summary."));

        let summary = summarizer(Arc::clone(&transport))
            .summarize("The quick brown fox.", SummaryStyle::Bullets)
            .await
            .unwrap();
        assert_eq!(summary, "A summary.");

        let body = sent_body(&transport);
        assert_eq!(body["model"], "llama-3.3-70b-versatile");
        assert_eq!(body["max_tokens"], 500);
        assert!((body["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(
            body["messages"][0]["content"],
            "Summarize the following text as bullet points:\n\nThe quick brown fox."
        );
    }

    #[tokio::test]
    async fn test_summary_is_returned_verbatim() {
        let transport = Arc::new(MockTransport::new());
        transport.queue_json(&fixtures::chat_response_json("\n  - one\n  - two  \n"));

        let summary = summarizer(transport)
            .summarize("text", SummaryStyle::Concise)
            .await
            .unwrap();
        assert_eq!(summary, "\n  - one\n  - two  \n");
    }

    #[tokio::test]
    async fn test_failure_is_wrapped_with_prefix() {
        let transport = Arc::new(MockTransport::new());
        transport.queue_error(401, "Invalid API Key");

        let err = summarizer(transport)
            .summarize("text", SummaryStyle::Concise)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Error calling Groq API: Authentication failed: Invalid API Key"
        );
    }

    #[tokio::test]
    async fn test_truncated_summary_is_still_returned() {
        let mut body = fixtures::chat_response_json("The first half of a long");
        body["choices"][0]["finish_reason"] = serde_json::json!("length");
        let transport = Arc::new(MockTransport::new());
        transport.queue_json(&body);

        let summary = summarizer(Arc::clone(&transport))
            .summarize("text", SummaryStyle::Concise)
            .await
            .unwrap();

        assert_eq!(summary, "The first half of a long");
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_content_is_an_error() {
        let transport = Arc::new(MockTransport::new());
        transport.queue_json(&serde_json::json!({
            "id": "chatcmpl-empty",
            "model": "llama-3.3-70b-versatile",
            "choices": []
        }));

        let err = summarizer(transport)
            .summarize("text", SummaryStyle::Concise)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SummarizeError::Completion(GroqError::EmptyResponse { .. })
        ));
        assert!(err.to_string().contains("chatcmpl-empty"));
    }
}
