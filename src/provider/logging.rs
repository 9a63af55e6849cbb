//! Request logging for provider calls
//!
//! Every ask request gets a short trace id so the gateway's log lines and the
//! provider's log lines can be correlated.

use std::time::Instant;
use tracing::{debug, error, info, warn, Span};
use uuid::Uuid;

/// Context for tracking a request through the system
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request (for log correlation)
    pub trace_id: String,
    /// When the request started
    pub start_time: Instant,
    /// Provider handling this request
    pub provider: String,
    /// Endpoint being served
    pub endpoint: String,
    /// Model being used
    pub model: Option<String>,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(provider: &str, endpoint: &str) -> Self {
        Self {
            trace_id: Uuid::new_v4().simple().to_string()[..8].to_string(),
            start_time: Instant::now(),
            provider: provider.to_string(),
            endpoint: endpoint.to_string(),
            model: None,
        }
    }

    /// Set the model for this request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Log request initiation
    pub fn log_request_start(&self, messages: usize) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            endpoint = %self.endpoint,
            model = ?self.model,
            messages = %messages,
            "Ask request started"
        );
    }

    /// Log request being sent to upstream
    pub fn log_upstream_request(&self, url: &str) {
        debug!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            url = %url,
            elapsed_ms = %self.elapsed_ms(),
            "Sending request to upstream"
        );
    }

    /// Log response received from upstream
    pub fn log_upstream_response(&self, status: u16) {
        debug!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            status = %status,
            elapsed_ms = %self.elapsed_ms(),
            "Response received from upstream"
        );
    }

    /// Log successful request completion
    pub fn log_request_complete(&self, out_of_scope: bool) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = ?self.model,
            out_of_scope = %out_of_scope,
            elapsed_ms = %self.elapsed_ms(),
            "Ask request completed"
        );
    }

    /// Log a warning condition
    pub fn log_warning(&self, message: &str) {
        warn!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            elapsed_ms = %self.elapsed_ms(),
            message = %message,
            "Warning during request"
        );
    }

    /// Log request failure
    pub fn log_error(&self, error: &str) {
        error!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            endpoint = %self.endpoint,
            model = ?self.model,
            elapsed_ms = %self.elapsed_ms(),
            error = %error,
            "Ask request failed"
        );
    }

    /// Log connection error
    pub fn log_connection_error(&self, error: &str, url: &str) {
        error!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            url = %url,
            elapsed_ms = %self.elapsed_ms(),
            error = %error,
            "Connection to upstream failed"
        );
    }

    /// Log timeout
    pub fn log_timeout(&self, timeout_ms: u128) {
        error!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            timeout_ms = %timeout_ms,
            elapsed_ms = %self.elapsed_ms(),
            "Upstream request timed out"
        );
    }

    /// Create a tracing span for this request
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "ask_request",
            trace_id = %self.trace_id,
            provider = %self.provider,
            model = ?self.model,
        )
    }
}
