//! Request and response bodies of the HTTP API.

use serde::{Deserialize, Serialize};

use crate::summarizer::SummaryStyle;

fn default_style() -> String {
    SummaryStyle::Concise.as_str().to_string()
}

/// Body of `POST /summarize`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    /// Text to summarize.
    pub text: String,
    /// `"concise"` or `"bullets"`. Anything else is treated as concise.
    #[serde(default = "default_style")]
    pub style: String,
}

impl SummarizeRequest {
    /// Resolves the requested style label.
    pub fn summary_style(&self) -> SummaryStyle {
        SummaryStyle::from_label(&self.style)
    }
}

/// Successful answer of `POST /summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// Model output, unmodified.
    pub summary: String,
    /// Character count of the submitted text.
    pub original_length: usize,
    /// Character count of `summary`.
    pub summary_length: usize,
}

impl SummarizeResponse {
    /// Builds the response, counting characters rather than bytes.
    pub fn new(original: &str, summary: String) -> Self {
        Self {
            original_length: original.chars().count(),
            summary_length: summary.chars().count(),
            summary,
        }
    }
}
