//! Text Summarizer
//!
//! A small HTTP service that summarizes text with a Groq-hosted LLM. The
//! library holds the pieces the `text-summarizer` binary wires together:
//!
//! - a Groq chat completion client ([`GroqClient`]) over a pluggable transport
//! - the summarizer ([`GroqSummarizer`]) that builds the prompt and issues
//!   exactly one completion per call
//! - the axum router ([`server::router`]) exposing `GET /`, `GET /health`
//!   and `POST /summarize`
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use text_summarizer::{server, GroqClient, GroqSummarizer, ServiceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServiceConfig::from_env()?;
//!     let client = GroqClient::from_config(config.groq.clone())?;
//!     let state = server::AppState::new(Arc::new(GroqSummarizer::new(client)));
//!
//!     let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
//!     server::serve(listener, state, async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod server;
pub mod services;
pub mod summarizer;
pub mod transport;
pub mod types;

pub use client::{GroqClient, GroqClientBuilder};
pub use config::{GroqConfig, ServiceConfig};
pub use errors::{GroqError, GroqResult};
pub use summarizer::{GroqSummarizer, SummarizeError, Summarizer, SummaryStyle};

/// Mock implementations for testing.
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
