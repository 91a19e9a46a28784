//! Error responses of the HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::summarizer::SummarizeError;

/// An error answered to the caller as `{"detail": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input failed validation (400).
    #[error("{0}")]
    InvalidInput(String),

    /// Body could not be decoded into the request model (422).
    #[error("{0}")]
    Unprocessable(String),

    /// The body could not be read; carries the rejection's own status.
    #[error("{detail}")]
    Body {
        /// Status chosen by the body extractor.
        status: StatusCode,
        /// Rejection text.
        detail: String,
    },

    /// No route matched (404).
    #[error("Not Found")]
    NotFound,

    /// The route exists but not for this method (405).
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// The summarizer failed (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Body { status, .. } => *status,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SummarizeError> for ApiError {
    fn from(err: SummarizeError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GroqError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_input_response() {
        let response = ApiError::InvalidInput("Text cannot be empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Text cannot be empty"})
        );
    }

    #[tokio::test]
    async fn test_summarize_error_becomes_internal() {
        let err: ApiError = SummarizeError::from(GroqError::server(503, "overloaded")).into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Error calling Groq API: Server error (HTTP 503): overloaded"})
        );
    }

    #[test]
    fn test_status_table() {
        assert_eq!(
            ApiError::Unprocessable(String::new()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[tokio::test]
    async fn test_body_error_keeps_extractor_status() {
        let response = ApiError::Body {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            detail: "length limit exceeded".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "length limit exceeded"})
        );
    }

    #[tokio::test]
    async fn test_method_not_allowed_response() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Method Not Allowed"})
        );
    }
}
