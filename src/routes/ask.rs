//! Ask endpoint
//!
//! `POST /api/ask-oliver` – checks the credential, validates the transcript
//! and hands it to the gateway. The reply is returned raw; sentinel
//! interpretation is the client's job.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};

use crate::{
    error::{ErrorResponse, GatewayError},
    routes::metrics::record_request,
    transcript::{parse_ask_request, AskRequest, AskResponse},
    AppState,
};

/// Answer a question about Oliver
#[utoipa::path(
    post,
    path = "/api/ask-oliver",
    tag = "Chat",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Assistant reply; a leading CONTACT_OLIVER marks an out-of-scope question", body = AskResponse),
        (status = 400, description = "Body is not JSON or has no valid messages array", body = ErrorResponse),
        (status = 500, description = "Credential missing or provider unavailable", body = ErrorResponse)
    )
)]
pub async fn ask(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<AskResponse>, GatewayError> {
    // A missing credential wins over any problem with the body
    let transcript = if state.gateway.is_configured() {
        parse_ask_request(&body)
    } else {
        Err(GatewayError::Misconfigured)
    }
    .map_err(|err| {
        record_request(err.outcome(), state.gateway.model(), 0.0);
        err
    })?;

    let reply = state.gateway.answer(transcript).await?;

    Ok(Json(AskResponse {
        content: reply.content,
    }))
}
