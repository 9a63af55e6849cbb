//! Error types for Ask Oliver
//!
//! The gateway reports exactly three failure kinds to callers. Upstream detail
//! is logged where it happens and never reaches the response body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Body used when the request is not JSON at all
pub const INVALID_JSON_BODY: &str = "invalid JSON body";

/// Body used when `messages` is missing or not an array
pub const MESSAGES_NOT_ARRAY: &str = "messages must be an array";

/// Gateway-level errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// Malformed or missing input. No upstream call was made.
    #[error("{0}")]
    InvalidRequest(String),

    /// Provider credential is not configured
    #[error("credential not configured")]
    Misconfigured,

    /// The provider could not produce an answer
    #[error("upstream unavailable")]
    UpstreamUnavailable,
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "upstream unavailable")]
    pub error: String,
}

impl GatewayError {
    pub fn invalid_json() -> Self {
        Self::InvalidRequest(INVALID_JSON_BODY.to_string())
    }

    pub fn messages_not_array() -> Self {
        Self::InvalidRequest(MESSAGES_NOT_ARRAY.to_string())
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Misconfigured => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::UpstreamUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label used for metrics and logs
    pub fn outcome(&self) -> &'static str {
        match self {
            GatewayError::InvalidRequest(_) => "invalid_request",
            GatewayError::Misconfigured => "misconfigured",
            GatewayError::UpstreamUnavailable => "upstream_unavailable",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type GatewayResult<T> = Result<T, GatewayError>;
