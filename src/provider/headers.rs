//! Header construction for provider requests
//!
//! Upstream requests carry only the provider credential and a content type.
//! Nothing from the incoming client request is forwarded.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use super::ProviderError;

/// Build the headers sent with every provider request
pub fn build_default_headers(api_key: &str) -> Result<HeaderMap, ProviderError> {
    let mut headers = HeaderMap::new();

    let mut authorization = HeaderValue::from_str(&format!("Bearer {}", api_key))
        .map_err(|_| ProviderError::InvalidCredential)?;
    authorization.set_sensitive(true);

    headers.insert(AUTHORIZATION, authorization);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Ok(headers)
}
