//! Chat completions service.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::auth::AuthProvider;
use crate::errors::{ApiErrorResponse, GroqError};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::types::chat::{ChatRequest, ChatResponse};

const COMPLETIONS_PATH: &str = "chat/completions";

/// Chat completions service.
///
/// Issues exactly one request per call. Failures are mapped to [`GroqError`]
/// and returned; nothing is retried.
pub struct ChatService {
    transport: Arc<dyn HttpTransport>,
    auth: Arc<dyn AuthProvider>,
}

impl ChatService {
    /// Creates a new chat service.
    pub fn new(transport: Arc<dyn HttpTransport>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { transport, auth }
    }

    /// Creates a chat completion.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn create(&self, request: ChatRequest) -> Result<ChatResponse, GroqError> {
        self.auth.validate()?;
        request.validate()?;

        let http_request = self.build_request(&request)?;
        let response = self.transport.send(http_request).await?;

        self.parse_response(response)
    }

    /// Builds an HTTP request from a chat request.
    fn build_request(&self, request: &ChatRequest) -> Result<HttpRequest, GroqError> {
        let body = serde_json::to_vec(request)?;

        let mut http_request = HttpRequest::post(COMPLETIONS_PATH)
            .with_header("Content-Type", "application/json")
            .with_body(body);
        self.auth.apply_auth(&mut http_request.headers);

        Ok(http_request)
    }

    /// Parses the HTTP response.
    fn parse_response(&self, response: HttpResponse) -> Result<ChatResponse, GroqError> {
        if !response.is_success() {
            return Err(self.parse_error_response(&response));
        }

        response.json().map_err(|e| GroqError::Serialization {
            message: format!("Failed to parse response: {}", e),
        })
    }

    /// Parses an error response.
    fn parse_error_response(&self, response: &HttpResponse) -> GroqError {
        let request_id = response.headers.get("x-request-id").cloned();

        match serde_json::from_slice::<ApiErrorResponse>(&response.body) {
            Ok(error_body) => {
                self.map_error(response.status, error_body, request_id, &response.headers)
            }
            Err(_) => self.parse_error_status(response.status, &response.headers),
        }
    }

    /// Maps an API error body to the internal error type.
    fn map_error(
        &self,
        status: u16,
        error: ApiErrorResponse,
        request_id: Option<String>,
        headers: &HashMap<String, String>,
    ) -> GroqError {
        let code = error
            .error
            .code
            .as_deref()
            .or(error.error.error_type.as_deref())
            .unwrap_or("");

        match (status, code) {
            (401, _) | (_, "invalid_api_key") => GroqError::Authentication {
                message: error.error.message,
                api_key_hint: None,
            },
            (403, _) => GroqError::Authorization {
                message: error.error.message,
            },
            (404, _) | (_, "model_not_found") => GroqError::Model {
                message: error.error.message,
                model: error.error.param.unwrap_or_default(),
            },
            (429, _) => GroqError::RateLimit {
                message: error.error.message,
                retry_after: retry_after(headers),
            },
            (400, _) => GroqError::Validation {
                message: error.error.message,
                param: error.error.param,
            },
            _ => GroqError::Server {
                message: error.error.message,
                status_code: status,
                request_id,
            },
        }
    }

    /// Parses error from status code only.
    fn parse_error_status(&self, status: u16, headers: &HashMap<String, String>) -> GroqError {
        let request_id = headers.get("x-request-id").cloned();

        match status {
            401 => GroqError::authentication("Invalid API key"),
            403 => GroqError::Authorization {
                message: "Forbidden".to_string(),
            },
            404 => GroqError::Model {
                message: "Resource not found".to_string(),
                model: String::new(),
            },
            429 => GroqError::RateLimit {
                message: "Rate limit exceeded".to_string(),
                retry_after: retry_after(headers),
            },
            500..=599 => GroqError::Server {
                message: format!("Server error: {}", status),
                status_code: status,
                request_id,
            },
            _ => GroqError::Server {
                message: format!("Unexpected status: {}", status),
                status_code: status,
                request_id,
            },
        }
    }
}

fn retry_after(headers: &HashMap<String, String>) -> Option<Duration> {
    headers
        .get("retry-after")
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

impl std::fmt::Debug for ChatService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatService").finish()
    }
}
