//! Logging setup for the service.
//!
//! Installs a `tracing-subscriber` stack (env filter plus pretty or JSON
//! output) and provides redaction for text that may carry credentials.

mod logging;

pub use logging::{init_tracing, redact_secrets, LogConfig, LogFormat};
