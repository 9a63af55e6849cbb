//! Configuration management for Ask Oliver
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use serde::Serialize;
use std::env;
use std::time::Duration;
use utoipa::ToSchema;

/// Model used when `GROQ_MODEL` is not set
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-120b";

/// Groq's OpenAI-compatible API root
pub const DEFAULT_PROVIDER_URL: &str = "https://api.groq.com/openai/v1";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Completion provider API root (OpenAI-compatible)
    pub provider_api_url: String,
    /// Provider credential. Absence is reported per request, not at startup.
    pub provider_api_key: Option<String>,
    /// Model identifier sent upstream
    pub model: String,
    /// Hard limit on a single upstream call
    pub upstream_timeout: Duration,

    /// Optional file replacing the built-in policy prompt
    pub policy_path: Option<String>,

    /// Contact record surfaced by the widget
    pub contact: ContactInfo,
}

/// Static contact details rendered next to out-of-scope answers
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ContactInfo {
    #[schema(example = "oliver@example.com")]
    pub email: String,
    pub twitter: String,
    pub linkedin: String,
    /// CV or other document link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "oliver@example.com".to_string(),
            twitter: "https://x.com/example".to_string(),
            linkedin: "https://www.linkedin.com/in/example".to_string(),
            document: None,
        }
    }
}

impl ContactInfo {
    /// Load contact overrides from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            email: env::var("CONTACT_EMAIL").unwrap_or(defaults.email),
            twitter: env::var("CONTACT_TWITTER").unwrap_or(defaults.twitter),
            linkedin: env::var("CONTACT_LINKEDIN").unwrap_or(defaults.linkedin),
            document: env::var("CONTACT_CV").ok().filter(|v| !v.is_empty()),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("ASK_OLIVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("ASK_OLIVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid ASK_OLIVER_PORT")?,

            provider_api_url: env::var("GROQ_API_URL")
                .unwrap_or_else(|_| DEFAULT_PROVIDER_URL.to_string()),
            provider_api_key: env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty()),
            model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            upstream_timeout: Duration::from_secs(
                env::var("UPSTREAM_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .context("Invalid UPSTREAM_TIMEOUT_SECONDS")?,
            ),

            policy_path: env::var("ASK_OLIVER_POLICY_PATH").ok(),

            contact: ContactInfo::from_env(),
        })
    }
}
