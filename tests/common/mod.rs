//! Common test utilities for Ask Oliver
//!
//! Shared fixtures and harnesses used across the integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;

use ask_oliver::{
    config::ContactInfo, provider::CompletionProvider, routes, AppState, Config, GroqProvider,
};

use crate::mocks::MockGroq;

/// Test configuration constants
pub mod constants {
    /// Provider key used against the mock
    pub const TEST_GROQ_API_KEY: &str = "test-groq-api-key";
    /// Model name sent upstream in tests
    pub const TEST_MODEL: &str = "openai/gpt-oss-120b";
    /// Ask endpoint path
    pub const ASK_PATH: &str = "/api/ask-oliver";
}

/// Build a config pointing at `provider_url`
pub fn test_config(provider_url: &str, api_key: Option<&str>) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        provider_api_url: provider_url.to_string(),
        provider_api_key: api_key.map(str::to_string),
        model: constants::TEST_MODEL.to_string(),
        upstream_timeout: Duration::from_secs(5),
        policy_path: None,
        contact: ContactInfo::default(),
    }
}

/// Build app state with a real Groq provider pointed at `config`
pub fn test_state(config: Config) -> Arc<AppState> {
    let provider: Arc<dyn CompletionProvider> =
        Arc::new(GroqProvider::new(reqwest::Client::new(), &config));
    Arc::new(AppState::new_for_testing(config, provider))
}

/// Test harness: real router, real Groq client, mocked Groq server
///
/// # Example
///
/// ```ignore
/// let harness = GatewayTestHarness::new().await;
/// harness.groq.mock_reply("Hello").await;
/// let response = harness.server.post(ASK_PATH).json(&body).await;
/// ```
pub struct GatewayTestHarness {
    pub server: TestServer,
    pub groq: MockGroq,
}

impl GatewayTestHarness {
    /// Harness with a configured credential
    pub async fn new() -> Self {
        Self::build(Some(constants::TEST_GROQ_API_KEY), Duration::from_secs(5)).await
    }

    /// Harness whose credential is missing
    pub async fn without_credential() -> Self {
        Self::build(None, Duration::from_secs(5)).await
    }

    /// Harness with a short upstream timeout
    pub async fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(constants::TEST_GROQ_API_KEY), timeout).await
    }

    async fn build(api_key: Option<&str>, timeout: Duration) -> Self {
        let groq = MockGroq::start().await;

        let mut config = test_config(&groq.uri(), api_key);
        config.upstream_timeout = timeout;

        let app = routes::create_router(test_state(config));
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, groq }
    }
}

/// Serve the router on a random local port; returns the base URL
pub async fn spawn_gateway(state: Arc<AppState>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has an address");

    tokio::spawn(async move {
        axum::serve(listener, routes::create_router(state))
            .await
            .expect("test gateway crashed");
    });

    format!("http://{}", addr)
}

/// A local URL nothing listens on
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("listener has an address");
    drop(listener);
    format!("http://{}", addr)
}

/// Request body with a single user message
pub fn single_question(question: &str) -> serde_json::Value {
    serde_json::json!({
        "messages": [
            { "role": "user", "content": question }
        ]
    })
}
