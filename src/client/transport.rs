//! Widget-to-gateway transport

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::transcript::{AskResponse, Message};

/// Failures seen by the widget when calling the gateway
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("gateway returned status {0}")]
    Status(u16),

    #[error("malformed gateway response: {0}")]
    Decode(String),
}

/// Sends a transcript to the gateway and returns the raw reply text
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    async fn ask(&self, transcript: &[Message]) -> Result<String, ClientError>;
}

#[derive(Serialize)]
struct AskBody<'a> {
    messages: &'a [Message],
}

/// HTTP transport posting to the ask endpoint
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// `endpoint` is the full ask URL, e.g. `http://localhost:8080/api/ask-oliver`
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl GatewayTransport for HttpTransport {
    async fn ask(&self, transcript: &[Message]) -> Result<String, ClientError> {
        debug!(endpoint = %self.endpoint, messages = transcript.len(), "Sending transcript");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AskBody {
                messages: transcript,
            })
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body: AskResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        Ok(body.content)
    }
}
