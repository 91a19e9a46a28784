//! Groq API client.
//!
//! Wires configuration, authentication and transport into the chat
//! completions service used by the summarizer.

use std::sync::Arc;

use crate::auth::{ApiKeyAuth, AuthProvider};
use crate::config::GroqConfig;
use crate::errors::{GroqError, GroqResult};
use crate::services::ChatService;
use crate::transport::{HttpTransport, HttpTransportImpl};

/// The Groq client.
///
/// Immutable once built; share it behind an `Arc`.
///
/// # Example
///
/// ```rust,no_run
/// use text_summarizer::{GroqClient, GroqConfig};
/// use text_summarizer::types::chat::{ChatRequest, Message};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = GroqConfig::builder().api_key("gsk_your_api_key").build()?;
///     let client = GroqClient::builder().config(config).build()?;
///
///     let request = ChatRequest::new(
///         client.config().model.clone(),
///         vec![Message::user("Hello, Groq!")],
///     );
///     let response = client.chat().create(request).await?;
///     println!("{}", response.content().unwrap_or_default());
///     Ok(())
/// }
/// ```
pub struct GroqClient {
    config: GroqConfig,
    chat_service: ChatService,
}

impl GroqClient {
    /// Creates a new client builder.
    pub fn builder() -> GroqClientBuilder {
        GroqClientBuilder::new()
    }

    /// Creates a client from a configuration with the default transport.
    pub fn from_config(config: GroqConfig) -> GroqResult<Self> {
        GroqClientBuilder::new().config(config).build()
    }

    /// Returns the chat service.
    pub fn chat(&self) -> &ChatService {
        &self.chat_service
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GroqConfig {
        &self.config
    }
}

impl std::fmt::Debug for GroqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqClient")
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for the Groq client.
#[derive(Default)]
pub struct GroqClientBuilder {
    config: Option<GroqConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl GroqClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn config(mut self, config: GroqConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets a custom transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the client.
    pub fn build(self) -> GroqResult<GroqClient> {
        let config = match self.config {
            Some(config) => config,
            None => GroqConfig::builder().build()?,
        };

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(
                HttpTransportImpl::new(&config.base_url, config.timeout)
                    .map_err(|e| GroqError::configuration(e.to_string()))?,
            ),
        };

        let auth: Arc<dyn AuthProvider> = Arc::new(ApiKeyAuth::new(config.api_key.clone()));

        Ok(GroqClient {
            chat_service: ChatService::new(transport, auth),
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{fixtures, MockTransport};
    use crate::types::chat::{ChatRequest, Message};

    #[test]
    fn test_builder_without_config_uses_defaults() {
        let client = GroqClientBuilder::new().build().unwrap();
        assert_eq!(client.config().model, crate::config::DEFAULT_MODEL);
        assert!(!client.config().has_api_key());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GroqConfig::builder().api_key("gsk_hidden_key").build().unwrap();
        let client = GroqClient::from_config(config).unwrap();
        assert!(!format!("{:?}", client).contains("gsk_hidden_key"));
    }

    #[tokio::test]
    async fn test_default_auth_uses_configured_key() {
        let transport = Arc::new(MockTransport::new());
        transport.queue_json(&fixtures::chat_response_json("ok"));

        let config = GroqConfig::builder().api_key("gsk_configured").build().unwrap();
        let client = GroqClient::builder()
            .config(config)
            .transport(Arc::clone(&transport) as Arc<dyn HttpTransport>)
            .build()
            .unwrap();

        client
            .chat()
            .create(ChatRequest::new("m", vec![Message::user("hi")]))
            .await
            .unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(
            sent.headers.get("Authorization").map(String::as_str),
            Some("Bearer gsk_configured")
        );
    }
}
