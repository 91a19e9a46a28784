//! Route handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use super::error::ApiError;
use super::models::{SummarizeRequest, SummarizeResponse};
use super::AppState;

/// Minimum number of characters accepted by `POST /summarize`.
pub const MIN_TEXT_CHARS: usize = 50;

/// Largest request body accepted, well above any text the model can take.
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Model label reported by `GET /health`.
pub const HEALTH_MODEL_LABEL: &str = "groq-llama-3.3-70b";

const EMPTY_TEXT_DETAIL: &str = "Text cannot be empty";
const SHORT_TEXT_DETAIL: &str = "Text is too short to summarize (minimum 50 characters)";

/// Checks the text of a summarize request.
///
/// Emptiness is judged on the trimmed text, length on the raw text.
pub fn validate_text(text: &str) -> Result<(), ApiError> {
    if text.trim().is_empty() {
        return Err(ApiError::InvalidInput(EMPTY_TEXT_DETAIL.to_string()));
    }

    if text.chars().count() < MIN_TEXT_CHARS {
        return Err(ApiError::InvalidInput(SHORT_TEXT_DETAIL.to_string()));
    }

    Ok(())
}

pub(super) async fn root() -> Json<Value> {
    Json(json!({
        "message": "Text Summarizer API is running!",
        "endpoints": {
            "/summarize": "POST - Summarize text",
            "/health": "GET - Health check"
        }
    }))
}

pub(super) async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "model": HEALTH_MODEL_LABEL
    }))
}

pub(super) async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let Json(request) = payload.map_err(reject_body)?;

    validate_text(&request.text)?;

    let style = request.summary_style();
    let summary = state.summarizer.summarize(&request.text, style).await?;

    Ok(Json(SummarizeResponse::new(&request.text, summary)))
}

/// Decode failures are 422; failures reading the body keep their own status.
fn reject_body(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::BytesRejection(_) => ApiError::Body {
            status: rejection.status(),
            detail: rejection.body_text(),
        },
        other => ApiError::Unprocessable(other.body_text()),
    }
}

pub(super) async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub(super) async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
