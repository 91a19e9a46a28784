//! HTTP surface of the summarizer.
//!
//! Three routes: `GET /`, `GET /health` and `POST /summarize`. Every error
//! is answered as `{"detail": "..."}`.

mod error;
mod handlers;
mod models;

pub use error::ApiError;
pub use handlers::{validate_text, HEALTH_MODEL_LABEL, MAX_BODY_BYTES, MIN_TEXT_CHARS};
pub use models::{SummarizeRequest, SummarizeResponse};

use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, Span};

use crate::summarizer::Summarizer;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    /// Creates the state around a summarizer.
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self { summarizer }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish()
    }
}

/// Builds the router with CORS and request tracing applied.
pub fn router(state: AppState) -> Router {
    // All origins, methods and headers. Credentials stay off: browsers
    // reject a wildcard origin on credentialed requests.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            info_span!(
                "http.request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_request(|_req: &Request<Body>, _span: &Span| {
            info!("request.start");
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &Span| {
            info!(status = %res.status(), latency_ms = %latency.as_millis(), "request.end");
        });

    Router::new()
        .route("/", get(handlers::root).fallback(handlers::method_not_allowed))
        .route("/health", get(handlers::health).fallback(handlers::method_not_allowed))
        .route(
            "/summarize",
            post(handlers::summarize).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(trace)
        .with_state(state)
}

/// Serves the router on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
