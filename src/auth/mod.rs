//! Authentication for outbound Groq requests.
//!
//! Bearer-token authentication over a securely held API key.

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;

use crate::errors::GroqError;

/// Authentication provider trait.
///
/// Implementations attach credentials to outbound request headers.
pub trait AuthProvider: Send + Sync {
    /// Apply authentication to request headers.
    fn apply_auth(&self, headers: &mut HashMap<String, String>);

    /// Validate the credentials before a request is sent.
    fn validate(&self) -> Result<(), GroqError>;
}

/// API key authentication provider.
///
/// Uses Bearer token authentication with the Groq API key.
pub struct ApiKeyAuth {
    api_key: SecretString,
}

impl ApiKeyAuth {
    /// Creates a new API key authentication provider.
    pub fn new(api_key: SecretString) -> Self {
        Self { api_key }
    }

    /// Gets a hint of the API key for debugging (last 4 characters).
    pub fn key_hint(&self) -> String {
        key_hint(self.api_key.expose_secret())
    }
}

/// Returns `...` followed by the last four characters of `key`, or `****`
/// when the key is too short to hint at safely.
pub(crate) fn key_hint(key: &str) -> String {
    let count = key.chars().count();
    if count > 4 {
        let tail: String = key.chars().skip(count - 4).collect();
        format!("...{}", tail)
    } else {
        "****".to_string()
    }
}

impl AuthProvider for ApiKeyAuth {
    fn apply_auth(&self, headers: &mut HashMap<String, String>) {
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key.expose_secret()),
        );
    }

    fn validate(&self) -> Result<(), GroqError> {
        if self.api_key.expose_secret().is_empty() {
            return Err(GroqError::Authentication {
                message: "The api_key client option must be set, either by passing api_key \
                          to the client or by setting the GROQ_API_KEY environment variable"
                    .to_string(),
                api_key_hint: None,
            });
        }

        Ok(())
    }
}

impl std::fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuth")
            .field("api_key", &"[REDACTED]")
            .field("key_hint", &self.key_hint())
            .finish()
    }
}
