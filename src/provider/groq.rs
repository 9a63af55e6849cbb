//! Groq provider
//!
//! Talks to Groq's OpenAI-compatible chat completions API. Any other
//! OpenAI-compatible endpoint works by pointing `GROQ_API_URL` at it.

use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;

use super::{
    headers::build_default_headers, CompletionProvider, CompletionRequest, CompletionResponse,
    ProviderError, RequestContext,
};
use crate::config::Config;

/// Groq chat completions client
pub struct GroqProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl GroqProvider {
    /// Create a new Groq provider from configuration
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.provider_api_url.trim_end_matches('/').to_string(),
            api_key: config.provider_api_key.clone(),
            timeout: config.upstream_timeout,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    #[instrument(skip_all, fields(trace_id = %ctx.trace_id, model = %request.model))]
    async fn chat_completion(
        &self,
        request: &CompletionRequest,
        ctx: &RequestContext,
    ) -> Result<CompletionResponse, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingCredential)?;
        let headers = build_default_headers(api_key)?;
        let url = self.completions_url();

        ctx.log_upstream_request(&url);

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ctx.log_timeout(self.timeout.as_millis());
                    ProviderError::Timeout
                } else {
                    ctx.log_connection_error(&e.to_string(), &url);
                    ProviderError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        ctx.log_upstream_response(status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<CompletionResponse>().await.map_err(|e| {
            if e.is_timeout() {
                ctx.log_timeout(self.timeout.as_millis());
                ProviderError::Timeout
            } else {
                ProviderError::Decode(e.to_string())
            }
        })
    }
}
