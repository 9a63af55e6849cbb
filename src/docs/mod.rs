//! API Documentation module
//!
//! Provides OpenAPI specification generation for the ask API using utoipa.

mod openapi;

pub use openapi::AskApiDoc;
