//! Chat completion wire types.

use serde::{Deserialize, Serialize};

use crate::errors::GroqError;

/// Chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model ID (required).
    pub model: String,

    /// Messages array (required).
    pub messages: Vec<Message>,

    /// Temperature (0.0-2.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Max completion tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Creates a new request with model and messages.
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Sets the temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the max tokens.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Validates the request before it goes on the wire.
    pub fn validate(&self) -> Result<(), GroqError> {
        if self.model.is_empty() {
            return Err(GroqError::Validation {
                message: "Model is required".to_string(),
                param: Some("model".to_string()),
            });
        }

        if self.messages.is_empty() {
            return Err(GroqError::Validation {
                message: "At least one message is required".to_string(),
                param: Some("messages".to_string()),
            });
        }

        if let Some(temp) = self.temperature {
            if !(0.0..=2.0).contains(&temp) {
                return Err(GroqError::Validation {
                    message: "Temperature must be between 0.0 and 2.0".to_string(),
                    param: Some("temperature".to_string()),
                });
            }
        }

        if self.max_tokens == Some(0) {
            return Err(GroqError::Validation {
                message: "max_tokens must be greater than zero".to_string(),
                param: Some("max_tokens".to_string()),
            });
        }

        Ok(())
    }
}

/// Chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message role.
    pub role: Role,

    /// Message content.
    pub content: String,
}

impl Message {
    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System message.
    System,
    /// User message.
    User,
    /// Assistant message.
    Assistant,
}

/// Chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Response ID.
    pub id: String,

    /// Model ID.
    pub model: String,

    /// Response choices.
    pub choices: Vec<Choice>,

    /// Token usage.
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Gets the first choice content.
    pub fn content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content.as_deref())
    }

    /// Gets the finish reason from the first choice.
    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.choices.first().and_then(|c| c.finish_reason)
    }
}

/// Response choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Choice index.
    pub index: u32,

    /// Assistant message.
    pub message: AssistantMessage,

    /// Finish reason.
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
}

/// Assistant message in response.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    /// Message role.
    pub role: Role,

    /// Message content.
    pub content: Option<String>,
}

/// Finish reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Normal completion.
    Stop,
    /// Max tokens reached.
    Length,
    /// Any reason this client does not distinguish.
    #[serde(other)]
    Other,
}

/// Token usage.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    /// Prompt tokens.
    pub prompt_tokens: u32,

    /// Completion tokens.
    pub completion_tokens: u32,

    /// Total tokens.
    pub total_tokens: u32,
}
