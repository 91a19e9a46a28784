//! `text-summarizer` binary: loads configuration, installs logging and
//! serves the summarization API until Ctrl-C.

use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};

use text_summarizer::observability::init_tracing;
use text_summarizer::server::{self, AppState};
use text_summarizer::{GroqClient, GroqSummarizer, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServiceConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config.log).context("failed to initialise logging")?;

    if config.groq.has_api_key() {
        info!(key_hint = %config.groq.api_key_hint(), "Groq API key loaded");
        if !config.groq.has_groq_key_format() {
            warn!("API key does not match expected Groq format (gsk_*)");
        }
    } else {
        warn!("GROQ_API_KEY not set in environment variables");
    }

    let client =
        GroqClient::from_config(config.groq.clone()).context("failed to build Groq client")?;
    let summarizer = GroqSummarizer::new(client);
    info!(model = %summarizer.model(), base_url = %config.groq.base_url, "summarizer ready");

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server running on http://{}", addr);

    server::serve(listener, AppState::new(Arc::new(summarizer)), shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("Shutdown signal received");
}
