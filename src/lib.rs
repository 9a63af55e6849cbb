//! Ask Oliver - knowledge-scoped chat gateway
//!
//! This library provides the gateway that answers questions about Oliver from
//! a fixed profile prompt, and the widget client that talks to it.

pub mod client;
pub mod config;
pub mod docs;
pub mod error;
pub mod gateway;
pub mod policy;
pub mod provider;
pub mod routes;
pub mod sentinel;
pub mod transcript;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::gateway::Gateway;
pub use crate::provider::{CompletionProvider, GroqProvider};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Policy-enforcing gateway; holds the policy prompt and provider
    pub gateway: Gateway,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        let policy = policy::load_policy(config.policy_path.as_deref())?;

        // Initialize HTTP client with connection pooling
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(32)
            .timeout(config.upstream_timeout)
            .build()?;

        let provider: Arc<dyn CompletionProvider> =
            Arc::new(GroqProvider::new(http_client, &config));

        Ok(Self::with_provider(config, policy, provider))
    }

    /// Assemble state around an already-built provider
    pub fn with_provider(
        config: Config,
        policy: Arc<str>,
        provider: Arc<dyn CompletionProvider>,
    ) -> Self {
        let gateway = Gateway::new(policy, config.model.clone(), provider);

        Self {
            config,
            start_time: Instant::now(),
            gateway,
        }
    }

    /// Create a new application state for testing with the built-in policy
    #[cfg(any(test, feature = "test-utils"))]
    pub fn new_for_testing(config: Config, provider: Arc<dyn CompletionProvider>) -> Self {
        Self::with_provider(config, Arc::from(policy::DEFAULT_POLICY_PROMPT), provider)
    }
}
