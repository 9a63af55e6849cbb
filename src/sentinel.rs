//! Sentinel classification of assistant replies
//!
//! A reply whose trimmed text starts with `CONTACT_OLIVER` (any case) is an
//! out-of-scope classification rather than an answer. Whatever follows the
//! token is the sentence to show the visitor instead.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::policy::SENTINEL_TOKEN;

/// Shown when an out-of-scope reply carries no follow-up sentence
pub const DEFAULT_APOLOGY: &str = "Please reach out to Oliver directly for that question.";

static SENTINEL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^{}\b", regex::escape(SENTINEL_TOKEN)))
        .expect("sentinel pattern is valid")
});

/// Classified assistant reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Regular answer, shown verbatim
    Answer(String),
    /// Out-of-scope question; carries the follow-up text to display
    OutOfScope(String),
}

impl Reply {
    /// Classify raw reply text
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();

        match SENTINEL_PREFIX.find(trimmed) {
            Some(token) => {
                let remainder = trimmed[token.end()..].trim();
                if remainder.is_empty() {
                    Reply::OutOfScope(DEFAULT_APOLOGY.to_string())
                } else {
                    Reply::OutOfScope(remainder.to_string())
                }
            }
            None => Reply::Answer(raw.to_string()),
        }
    }

    /// Text to show the visitor
    pub fn display_text(&self) -> &str {
        match self {
            Reply::Answer(text) | Reply::OutOfScope(text) => text,
        }
    }

    pub fn is_out_of_scope(&self) -> bool {
        matches!(self, Reply::OutOfScope(_))
    }

    pub fn into_display_text(self) -> String {
        match self {
            Reply::Answer(text) | Reply::OutOfScope(text) => text,
        }
    }
}
