//! Completion gateway
//!
//! Stateless containment layer between the widget and the provider: prepends
//! the policy prompt, forwards the transcript, and reduces every provider
//! failure to an opaque error.

use std::sync::Arc;
use std::time::Instant;

use tracing::Instrument;

use crate::{
    error::{GatewayError, GatewayResult},
    policy::EMPTY_REPLY_FALLBACK,
    provider::{CompletionProvider, CompletionRequest, RequestContext, UpstreamMessage},
    routes::metrics::{record_out_of_scope, record_request},
    sentinel::Reply,
    transcript::Message,
};

/// Endpoint name used in logs
pub const ASK_ENDPOINT: &str = "/api/ask-oliver";

/// Sampling temperature. Zero keeps replies repeatable for identical input.
const TEMPERATURE: f32 = 0.0;

/// The policy-enforcing completion gateway
#[derive(Clone)]
pub struct Gateway {
    policy: Arc<str>,
    model: String,
    provider: Arc<dyn CompletionProvider>,
}

impl Gateway {
    pub fn new(policy: Arc<str>, model: impl Into<String>, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            policy,
            model: model.into(),
            provider,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Whether the provider credential is present
    pub fn is_configured(&self) -> bool {
        self.provider.is_configured()
    }

    /// Build the upstream request: policy first, then the transcript as given
    pub fn build_request(&self, transcript: Vec<Message>) -> CompletionRequest {
        let mut messages = Vec::with_capacity(transcript.len() + 1);
        messages.push(UpstreamMessage::system(&*self.policy));
        messages.extend(transcript.into_iter().map(UpstreamMessage::from));

        CompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: TEMPERATURE,
        }
    }

    /// Answer a transcript with one assistant message
    ///
    /// Fails with [`GatewayError::Misconfigured`] before any network call when
    /// no credential is configured. Every provider failure becomes
    /// [`GatewayError::UpstreamUnavailable`]; the detail is only logged.
    pub async fn answer(&self, transcript: Vec<Message>) -> GatewayResult<Message> {
        let start = Instant::now();
        let ctx = RequestContext::new(self.provider.name(), ASK_ENDPOINT).with_model(&self.model);

        let result = self.answer_inner(transcript, &ctx).instrument(ctx.create_span()).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(err) => err.outcome(),
        };
        record_request(outcome, &self.model, start.elapsed().as_secs_f64());

        result
    }

    async fn answer_inner(
        &self,
        transcript: Vec<Message>,
        ctx: &RequestContext,
    ) -> GatewayResult<Message> {
        if !self.provider.is_configured() {
            ctx.log_error("provider credential is not configured");
            return Err(GatewayError::Misconfigured);
        }

        ctx.log_request_start(transcript.len());
        let request = self.build_request(transcript);

        let response = self
            .provider
            .chat_completion(&request, ctx)
            .await
            .map_err(|e| {
                ctx.log_error(&e.to_string());
                GatewayError::UpstreamUnavailable
            })?;

        let content = match response.first_content() {
            Some(content) => content.to_string(),
            None => {
                ctx.log_warning("provider returned no content, answering with the sentinel fallback");
                EMPTY_REPLY_FALLBACK.to_string()
            }
        };

        let out_of_scope = Reply::classify(&content).is_out_of_scope();
        if out_of_scope {
            record_out_of_scope(&self.model);
        }
        ctx.log_request_complete(out_of_scope);

        Ok(Message::assistant(content))
    }
}
