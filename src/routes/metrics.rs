//! Prometheus metrics endpoint
//!
//! Exposes application metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    let _ = &*PROMETHEUS_HANDLE;
    register_metrics();
}

fn register_metrics() {
    metrics::describe_counter!(
        "ask_oliver_requests_total",
        "Ask requests by outcome"
    );
    metrics::describe_histogram!(
        "ask_oliver_request_duration_seconds",
        "Ask request duration in seconds"
    );
    metrics::describe_counter!(
        "ask_oliver_out_of_scope_total",
        "Replies classified as out of scope"
    );
}

/// Prometheus metrics endpoint handler
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record an ask request
pub fn record_request(outcome: &str, model: &str, duration_secs: f64) {
    metrics::counter!(
        "ask_oliver_requests_total",
        "outcome" => outcome.to_string(),
        "model" => model.to_string()
    )
    .increment(1);
    metrics::histogram!("ask_oliver_request_duration_seconds", "model" => model.to_string())
        .record(duration_secs);
}

/// Record a sentinel reply
pub fn record_out_of_scope(model: &str) {
    metrics::counter!("ask_oliver_out_of_scope_total", "model" => model.to_string()).increment(1);
}
