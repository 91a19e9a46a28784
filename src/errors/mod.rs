//! Error types for the Groq completion call.
//!
//! Covers every way the single outbound chat completion can fail: bad
//! configuration, rejected credentials, provider-side errors, transport
//! failures and malformed payloads.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for Groq operations.
pub type GroqResult<T> = Result<T, GroqError>;

/// Error type for the Groq chat completion client.
#[derive(Debug, Error)]
pub enum GroqError {
    /// Configuration error (invalid base URL, port, etc.)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// Authentication error (invalid or missing API key).
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Error message from the API.
        message: String,
        /// Hint about the API key (last 4 chars).
        api_key_hint: Option<String>,
    },

    /// Authorization error (insufficient permissions).
    #[error("Authorization failed: {message}")]
    Authorization {
        /// Error message describing the authorization issue.
        message: String,
    },

    /// Validation error (the provider rejected the request).
    #[error("Validation error: {message}")]
    Validation {
        /// Error message describing the validation issue.
        message: String,
        /// The parameter that caused the error.
        param: Option<String>,
    },

    /// Model error (model not found or unavailable).
    #[error("Model error: {message}")]
    Model {
        /// Error message.
        message: String,
        /// The model ID that caused the error.
        model: String,
    },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        /// Error message.
        message: String,
        /// Duration the provider asked us to wait.
        retry_after: Option<Duration>,
    },

    /// Server error (5xx or unexpected status codes).
    #[error("Server error (HTTP {status_code}): {message}")]
    Server {
        /// Error message.
        message: String,
        /// HTTP status code.
        status_code: u16,
        /// Request ID for debugging.
        request_id: Option<String>,
    },

    /// Network/connection error.
    #[error("Network error: {message}")]
    Network {
        /// Error message.
        message: String,
    },

    /// Timeout error.
    #[error("Request timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message.
        message: String,
    },

    /// The completion carried no choice or no message content.
    #[error("Empty response: {message}")]
    EmptyResponse {
        /// Error message.
        message: String,
    },
}

impl GroqError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        GroqError::Configuration {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        GroqError::Authentication {
            message: message.into(),
            api_key_hint: None,
        }
    }

    /// Creates a server error.
    pub fn server(status_code: u16, message: impl Into<String>) -> Self {
        GroqError::Server {
            message: message.into(),
            status_code,
            request_id: None,
        }
    }

    /// Returns the HTTP status reported by the provider, when there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GroqError::Authentication { .. } => Some(401),
            GroqError::Authorization { .. } => Some(403),
            GroqError::Model { .. } => Some(404),
            GroqError::RateLimit { .. } => Some(429),
            GroqError::Server { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// API error response from Groq.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// The error details.
    pub error: ApiErrorDetail,
}

/// Detailed API error information.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorDetail {
    /// The error type.
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    /// The error message.
    pub message: String,
    /// The parameter that caused the error.
    pub param: Option<String>,
    /// The error code.
    pub code: Option<String>,
}

impl From<serde_json::Error> for GroqError {
    fn from(err: serde_json::Error) -> Self {
        GroqError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for GroqError {
    fn from(err: url::ParseError) -> Self {
        GroqError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}

impl From<crate::transport::TransportError> for GroqError {
    fn from(err: crate::transport::TransportError) -> Self {
        use crate::transport::TransportError;

        match err {
            TransportError::Timeout { .. } => GroqError::Timeout {
                message: err.to_string(),
            },
            TransportError::Connection { .. } | TransportError::InvalidResponse { .. } => {
                GroqError::Network {
                    message: err.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportError;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(GroqError::authentication("bad key").status_code(), Some(401));
        assert_eq!(GroqError::server(503, "down").status_code(), Some(503));
        assert_eq!(
            GroqError::Network {
                message: "refused".to_string()
            }
            .status_code(),
            None
        );
    }

    #[test]
    fn test_display_includes_message() {
        let err = GroqError::RateLimit {
            message: "slow down".to_string(),
            retry_after: Some(Duration::from_secs(2)),
        };
        assert_eq!(err.to_string(), "Rate limit exceeded: slow down");
    }

    #[test]
    fn test_transport_timeout_maps_to_timeout() {
        let err: GroqError = TransportError::Timeout {
            timeout: Duration::from_secs(5),
        }
        .into();
        assert!(matches!(err, GroqError::Timeout { .. }));
    }

    #[test]
    fn test_transport_connection_maps_to_network() {
        let err: GroqError = TransportError::Connection {
            message: "connection refused".to_string(),
        }
        .into();

        if let GroqError::Network { message } = err {
            assert!(message.contains("connection refused"));
        } else {
            panic!("Expected Network error");
        }
    }

    #[test]
    fn test_api_error_body_parses() {
        let body = r#"{"error": {"message": "Invalid API Key", "type": "invalid_request_error", "code": "invalid_api_key"}}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "Invalid API Key");
        assert_eq!(parsed.error.code.as_deref(), Some("invalid_api_key"));
        assert!(parsed.error.param.is_none());
    }
}
