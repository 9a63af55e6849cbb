//! Completion provider abstraction
//!
//! Defines the trait the gateway talks to and the OpenAI-compatible wire
//! types shared by all providers.

pub mod groq;
pub mod headers;
pub mod logging;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::transcript::{Message, Role};

pub use groq::GroqProvider;
pub use logging::RequestContext;

/// Role as understood by the upstream API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamRole {
    System,
    User,
    Assistant,
}

impl From<Role> for UpstreamRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => UpstreamRole::User,
            Role::Assistant => UpstreamRole::Assistant,
        }
    }
}

/// Message sent upstream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpstreamMessage {
    pub role: UpstreamRole,
    pub content: String,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl UpstreamMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: UpstreamRole::System,
            content: content.into(),
            extra: Map::new(),
        }
    }
}

impl From<Message> for UpstreamMessage {
    fn from(message: Message) -> Self {
        Self {
            role: message.role.into(),
            content: message.content,
            extra: message.extra,
        }
    }
}

/// Chat completion request (OpenAI-compatible subset)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<UpstreamMessage>,
    pub temperature: f32,
}

/// Message inside a returned choice
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// A returned choice
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Chat completion response; everything the gateway does not read is ignored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl CompletionResponse {
    /// Content of the first choice, if it has any non-blank text
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|content| !content.trim().is_empty())
    }
}

/// Failures talking to a provider. Logged, never shown to callers.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider credential is not configured")]
    MissingCredential,

    #[error("provider credential is not a valid header value")]
    InvalidCredential,

    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode provider response: {0}")]
    Decode(String),
}

/// Trait defining the interface for completion providers
///
/// Implementations own their credential and must never receive headers from
/// the incoming client request.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name for logging and metrics
    fn name(&self) -> &'static str;

    /// Whether a credential is available
    fn is_configured(&self) -> bool;

    /// Send a chat completion request and return the parsed response
    async fn chat_completion(
        &self,
        request: &CompletionRequest,
        ctx: &RequestContext,
    ) -> Result<CompletionResponse, ProviderError>;
}
