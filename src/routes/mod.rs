//! HTTP routes for Ask Oliver
//!
//! This module defines all HTTP endpoints exposed by the gateway.

pub mod ask;
pub mod contact;
pub mod docs;
pub mod health;
pub mod metrics;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{gateway::ASK_ENDPOINT, AppState};

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // The widget may be served from a different origin than the gateway
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(ASK_ENDPOINT, post(ask::ask))
        .route("/api/contact", get(contact::contact_info));

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(metrics::prometheus_metrics));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .merge(docs::create_docs_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
