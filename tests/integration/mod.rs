//! Integration tests for the Ask Oliver gateway
//!
//! These tests drive the real router and Groq client against a wiremock
//! provider, and the widget client against a live gateway.

mod widget;
