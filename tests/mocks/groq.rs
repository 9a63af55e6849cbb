//! Mock Groq completion API for testing
//!
//! Provides wiremock-based mocks for the OpenAI-compatible
//! `POST /chat/completions` endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! let groq = MockGroq::start().await;
//! groq.mock_reply("Oliver studies at Manchester.").await;
//! // Use groq.uri() as GROQ_API_URL
//! ```

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, header_exists, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const COMPLETIONS_PATH: &str = "/chat/completions";

/// Mock Groq server wrapper
pub struct MockGroq {
    server: MockServer,
}

impl MockGroq {
    /// Start a new mock Groq server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Build an OpenAI-style completion body
    pub fn completion_body(content: Option<&str>) -> Value {
        json!({
            "id": "chatcmpl-test123",
            "object": "chat.completion",
            "created": 1706745600,
            "model": "openai/gpt-oss-120b",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": content },
                    "finish_reason": "stop"
                }
            ],
            "usage": { "prompt_tokens": 900, "completion_tokens": 12, "total_tokens": 912 }
        })
    }

    /// Mock a successful reply with the given content
    pub async fn mock_reply(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .and(header_exists("Authorization"))
            .and(header("Content-Type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(Self::completion_body(Some(content))),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a reply whose first choice has null content
    pub async fn mock_null_content(&self) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::completion_body(None)))
            .mount(&self.server)
            .await;
    }

    /// Mock a reply with no choices at all
    pub async fn mock_no_choices(&self) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-empty",
                "object": "chat.completion",
                "choices": []
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock an OpenAI-style error response
    pub async fn mock_error(&self, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {
                    "message": message,
                    "type": "invalid_request_error",
                    "code": "provider_detail"
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a reply that arrives only after `delay`
    pub async fn mock_slow_reply(&self, content: &str, delay: Duration) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Self::completion_body(Some(content)))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Requests received on the completions path
    pub async fn completion_requests(&self) -> Vec<wiremock::Request> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.url.path() == COMPLETIONS_PATH)
            .collect()
    }

    /// Parsed JSON body of the n-th completion request
    pub async fn completion_body_at(&self, index: usize) -> Value {
        let requests = self.completion_requests().await;
        serde_json::from_slice(&requests[index].body).expect("completion request body is JSON")
    }
}
