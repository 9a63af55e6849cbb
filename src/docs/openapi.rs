//! OpenAPI specification for the ask API

use utoipa::OpenApi;

use crate::{
    config::ContactInfo,
    error::ErrorResponse,
    transcript::{AskRequest, AskResponse, Message, Role},
};

/// OpenAPI specification for the Ask Oliver API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ask Oliver API",
        version = "1.0.0",
        description = "Knowledge-scoped chat gateway. Replies starting with CONTACT_OLIVER mean the question is out of scope and the visitor should contact Oliver directly."
    ),
    paths(
        crate::routes::ask::ask,
        crate::routes::contact::contact_info
    ),
    components(
        schemas(
            Role,
            Message,
            AskRequest,
            AskResponse,
            ErrorResponse,
            ContactInfo,
        )
    ),
    tags(
        (name = "Chat", description = "Chat endpoints")
    )
)]
pub struct AskApiDoc;
