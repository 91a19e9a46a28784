//! Configuration for the summarizer service.
//!
//! Holds the Groq credential, model and transport settings used by the
//! summarization client, plus the bind address and logging options of the
//! HTTP service. Everything is read once at startup and never mutated.

use secrecy::{ExposeSecret, SecretString};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::errors::{GroqError, GroqResult};
use crate::observability::{LogConfig, LogFormat};

/// Default base URL for the Groq API.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default completion model.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8000;

/// Environment variable holding the Groq API key.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Configuration for the Groq summarization client.
#[derive(Clone)]
pub struct GroqConfig {
    /// API key for authentication. May be empty; calls then fail upstream.
    pub(crate) api_key: SecretString,
    /// Base URL for API requests.
    pub base_url: String,
    /// Model used for every completion.
    pub model: String,
    /// Optional request timeout. `None` leaves the transport default (no timeout).
    pub timeout: Option<Duration>,
}

impl GroqConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> GroqConfigBuilder {
        GroqConfigBuilder::new()
    }

    /// Returns true if a non-empty API key was supplied.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }

    /// Returns the API key hint (last 4 characters) for debugging.
    pub fn api_key_hint(&self) -> String {
        crate::auth::key_hint(self.api_key.expose_secret())
    }

    /// Returns true if the key carries the `gsk_` prefix Groq issues.
    pub fn has_groq_key_format(&self) -> bool {
        self.api_key.expose_secret().starts_with("gsk_")
    }
}

impl std::fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for `GroqConfig`.
#[derive(Default)]
pub struct GroqConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
    timeout: Option<Duration>,
}

impl GroqConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the completion model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Builds the configuration.
    ///
    /// A missing or empty API key is accepted; the first completion call
    /// reports it.
    pub fn build(self) -> GroqResult<GroqConfig> {
        let api_key = self.api_key.unwrap_or_default();

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let parsed = url::Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GroqError::configuration(format!(
                "Base URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        let model = self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        if model.trim().is_empty() {
            return Err(GroqError::configuration("Model cannot be empty"));
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(GroqError::configuration("Timeout must be greater than zero"));
        }

        Ok(GroqConfig {
            api_key: SecretString::new(api_key),
            base_url,
            model,
            timeout: self.timeout,
        })
    }
}

/// Full service configuration: client settings, bind address and logging.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Groq client settings.
    pub groq: GroqConfig,
    /// Bind host.
    pub host: IpAddr,
    /// Bind port.
    pub port: u16,
    /// Logging settings.
    pub log: LogConfig,
}

impl ServiceConfig {
    /// Creates the configuration from process environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `GROQ_API_KEY`: API key (missing is tolerated)
    /// - `GROQ_BASE_URL`, `GROQ_MODEL`, `GROQ_TIMEOUT` (seconds)
    /// - `HOST`, `PORT`
    /// - `LOG_LEVEL`, `LOG_FORMAT` (`pretty` | `json`)
    pub fn from_env() -> GroqResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> GroqResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = GroqConfig::builder();

        if let Some(api_key) = lookup(API_KEY_VAR) {
            builder = builder.api_key(api_key);
        }
        if let Some(base_url) = lookup("GROQ_BASE_URL") {
            builder = builder.base_url(base_url);
        }
        if let Some(model) = lookup("GROQ_MODEL") {
            builder = builder.model(model);
        }
        if let Some(timeout_str) = lookup("GROQ_TIMEOUT") {
            let secs = timeout_str.trim().parse::<u64>().map_err(|_| {
                GroqError::configuration(format!(
                    "GROQ_TIMEOUT must be seconds, got '{}'",
                    timeout_str
                ))
            })?;
            builder = builder.timeout_secs(secs);
        }

        let host_str = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_str
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| GroqError::configuration(format!("Invalid HOST '{}'", host_str)))?;

        let port = match lookup("PORT") {
            Some(port_str) => port_str
                .trim()
                .parse::<u16>()
                .map_err(|_| GroqError::configuration(format!("Invalid PORT '{}'", port_str)))?,
            None => DEFAULT_PORT,
        };

        let mut log = LogConfig::default();
        if let Some(level) = lookup("LOG_LEVEL") {
            log = log.level(level);
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            log = log.format(format.parse::<LogFormat>()?);
        }

        Ok(Self {
            groq: builder.build()?,
            host,
            port,
            log,
        })
    }

    /// Returns the socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
