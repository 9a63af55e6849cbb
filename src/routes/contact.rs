//! Contact endpoint
//!
//! Serves the static contact record the widget links to when a question is
//! out of scope.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{config::ContactInfo, AppState};

/// Return the configured contact record
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "Chat",
    responses((status = 200, description = "Contact details", body = ContactInfo))
)]
pub async fn contact_info(State(state): State<Arc<AppState>>) -> Json<ContactInfo> {
    Json(state.config.contact.clone())
}
