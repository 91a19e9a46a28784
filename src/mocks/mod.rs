//! Mock implementations for testing.
//!
//! Provides a recording transport, a fixed-key auth provider and a scripted
//! summarizer so the client and the HTTP layer can be exercised without
//! reaching the Groq API.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::auth::AuthProvider;
use crate::errors::GroqError;
use crate::summarizer::{SummarizeError, Summarizer, SummaryStyle};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Mock HTTP transport for testing.
pub struct MockTransport {
    responses: Mutex<Vec<MockResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// A recorded request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request path.
    pub path: String,
    /// Request body.
    pub body: Option<Vec<u8>>,
    /// Request headers.
    pub headers: HashMap<String, String>,
}

/// A mock response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl MockResponse {
    /// Creates a successful JSON response.
    pub fn json<T: serde::Serialize>(value: &T) -> Self {
        let body = serde_json::to_vec(value).unwrap_or_default();
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        Self {
            status: 200,
            headers,
            body,
        }
    }

    /// Creates a Groq-style JSON error response.
    pub fn error(status: u16, message: &str) -> Self {
        let error = serde_json::json!({
            "error": {
                "message": message,
                "type": "invalid_request_error"
            }
        });

        Self {
            status,
            ..Self::json(&error)
        }
    }

    /// Creates a response with an arbitrary body and no headers.
    pub fn raw(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    /// Adds a header.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }
}

impl MockTransport {
    /// Creates a new mock transport.
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queues a response.
    pub fn queue(&self, response: MockResponse) {
        lock(&self.responses).push(response);
    }

    /// Queues a JSON response.
    pub fn queue_json<T: serde::Serialize>(&self, value: &T) {
        self.queue(MockResponse::json(value));
    }

    /// Queues an error response.
    pub fn queue_error(&self, status: u16, message: &str) {
        self.queue(MockResponse::error(status, message));
    }

    /// Gets all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Gets the last recorded request.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Returns the number of requests made.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(RecordedRequest {
            path: request.path,
            body: request.body,
            headers: request.headers,
        });

        let response = {
            let mut responses = lock(&self.responses);
            if responses.is_empty() {
                None
            } else {
                Some(responses.remove(0))
            }
        };

        match response {
            Some(response) => Ok(HttpResponse {
                status: response.status,
                headers: response.headers,
                body: response.body,
            }),
            None => Err(TransportError::Connection {
                message: "No mock response configured".to_string(),
            }),
        }
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("request_count", &self.request_count())
            .finish()
    }
}

/// Mock auth provider for testing.
#[derive(Debug)]
pub struct MockAuth {
    api_key: String,
}

impl Default for MockAuth {
    fn default() -> Self {
        Self {
            api_key: "gsk_mock_test_key".to_string(),
        }
    }
}

impl AuthProvider for MockAuth {
    fn apply_auth(&self, headers: &mut HashMap<String, String>) {
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        );
    }

    fn validate(&self) -> Result<(), GroqError> {
        Ok(())
    }
}

/// Scripted summarizer that records every call.
#[derive(Debug)]
pub struct MockSummarizer {
    reply: Result<String, String>,
    calls: Mutex<Vec<(String, SummaryStyle)>>,
}

impl MockSummarizer {
    /// Always answers with `summary`.
    pub fn replying(summary: impl Into<String>) -> Self {
        Self {
            reply: Ok(summary.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always fails with a network error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns the `(text, style)` pairs received so far.
    pub fn calls(&self) -> Vec<(String, SummaryStyle)> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, text: &str, style: SummaryStyle) -> Result<String, SummarizeError> {
        lock(&self.calls).push((text.to_string(), style));

        match &self.reply {
            Ok(summary) => Ok(summary.clone()),
            Err(message) => Err(GroqError::Network {
                message: message.clone(),
            }
            .into()),
        }
    }
}

/// Test fixtures for common response types.
pub mod fixtures {
    /// Creates a chat completion body whose first choice carries `content`.
    pub fn chat_response_json(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-mock",
            "object": "chat.completion",
            "created": 1699999999,
            "model": "llama-3.3-70b-versatile",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": content
                },
                "finish_reason": "stop"
            }],
            "usage": {
                "prompt_tokens": 10,
                "completion_tokens": 5,
                "total_tokens": 15
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport_queue_and_record() {
        let transport = MockTransport::new();
        transport.queue_json(&serde_json::json!({"test": "value"}));

        let response = transport.send(HttpRequest::post("path1")).await.unwrap();

        assert_eq!(response.status, 200);
        assert!(String::from_utf8_lossy(&response.body).contains("value"));
        assert_eq!(transport.requests()[0].path, "path1");
    }

    #[tokio::test]
    async fn test_mock_transport_without_response_fails() {
        let transport = MockTransport::new();
        let result = transport.send(HttpRequest::post("chat/completions")).await;
        assert!(matches!(result, Err(TransportError::Connection { .. })));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_summarizer_records_calls() {
        let summarizer = MockSummarizer::failing("boom");
        let err = summarizer
            .summarize("hello", SummaryStyle::Bullets)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Error calling Groq API: Network error: boom");
        assert_eq!(
            summarizer.calls(),
            vec![("hello".to_string(), SummaryStyle::Bullets)]
        );
    }
}
