//! Transcript types and request validation
//!
//! A transcript is the ordered list of user/assistant messages owned by the
//! chat widget and resent in full on every request. The gateway validates the
//! request body against this shape before doing anything else.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::{GatewayError, GatewayResult};

/// Role of a transcript participant
///
/// `system` is deliberately absent: only the gateway may speak as system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message typed by the visitor
    User,
    /// Message produced by the model
    Assistant,
}

/// A single transcript entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Message {
    pub role: Role,
    #[schema(example = "Where does Oliver study?")]
    pub content: String,
    /// Any other fields the caller sent; forwarded upstream as received
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            extra: Map::new(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            extra: Map::new(),
        }
    }
}

/// Request body of the ask endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct AskRequest {
    /// Full transcript, oldest first
    pub messages: Vec<Message>,
}

/// Successful response body of the ask endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct AskResponse {
    /// Assistant reply. A leading `CONTACT_OLIVER` marks an out-of-scope question.
    #[schema(example = "Oliver studies at the University of Manchester.")]
    pub content: String,
}

/// Validate a raw request body into a transcript
///
/// Checks run in order and stop at the first failure:
/// 1. the body parses as JSON
/// 2. it carries a `messages` array
/// 3. every element is `{role: user|assistant, content: string}`
///
/// An empty array is accepted.
pub fn parse_ask_request(body: &[u8]) -> GatewayResult<Vec<Message>> {
    let value: Value = serde_json::from_slice(body).map_err(|_| GatewayError::invalid_json())?;

    let elements = match value.get("messages") {
        Some(Value::Array(elements)) => elements,
        _ => return Err(GatewayError::messages_not_array()),
    };

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            Message::deserialize(element).map_err(|_| {
                GatewayError::InvalidRequest(format!(
                    "messages[{}] must be {{role: user|assistant, content: string}}",
                    index
                ))
            })
        })
        .collect()
}
