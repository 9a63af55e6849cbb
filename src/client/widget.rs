//! Chat widget state machine
//!
//! Holds the open/closed flag and the transcript for one widget instance.
//! At most one request is in flight: `send` while loading is a no-op.
//! There is no cancellation; a reply that arrives after `close()` is still
//! appended to the transcript.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::warn;

use super::contact::{contact_links, ContactLink};
use super::transport::GatewayTransport;
use crate::config::ContactInfo;
use crate::sentinel::Reply;
use crate::transcript::{Message, Role};

/// First message of every transcript
pub const GREETING: &str =
    "Hi! Ask me anything about Oliver Ulvebne and I'll answer based on his profile.";

/// Assistant message appended when the gateway cannot be reached
pub const FAILURE_REPLY: &str =
    "Sorry, I can't answer right now. Please reach out to Oliver directly.";

/// Transient notice shown under the transcript after a failure
pub const FAILURE_NOTICE: &str = "We hit a problem talking to the assistant.";

/// Result of a `send` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing to send after trimming
    Empty,
    /// A request is already in flight
    Busy,
    /// Regular answer appended
    Answered,
    /// Sentinel reply; contact options revealed
    OutOfScope,
    /// Gateway call failed; fallback appended and contact options revealed
    Failed,
}

/// Everything a view needs to draw the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSnapshot {
    pub is_open: bool,
    pub transcript: Vec<Message>,
    pub input: String,
    pub loading: bool,
    pub show_contact_options: bool,
    pub error: Option<String>,
}

impl WidgetSnapshot {
    fn initial() -> Self {
        Self {
            is_open: false,
            transcript: vec![Message::assistant(GREETING)],
            input: String::new(),
            loading: false,
            show_contact_options: false,
            error: None,
        }
    }

    /// Index of the message the view should scroll to, while open
    pub fn scroll_target(&self) -> Option<usize> {
        if self.is_open {
            self.transcript.len().checked_sub(1)
        } else {
            None
        }
    }

    /// Whether the send button is enabled
    pub fn can_send(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }
}

/// How a message body must be displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    /// Lightweight markup (bold, lists, tables, code). Handed to a markdown renderer.
    Markup(String),
    /// Shown as-is; never interpreted
    PlainText(String),
}

/// One rendered transcript entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub role: Role,
    pub body: MessageBody,
}

/// The chat widget
pub struct ChatWidget {
    transport: Arc<dyn GatewayTransport>,
    contact: ContactInfo,
    state: Mutex<WidgetSnapshot>,
    updates: watch::Sender<WidgetSnapshot>,
}

/// Clears the loading flag however `send` ends, including when its future is dropped
struct LoadingGuard<'a> {
    widget: &'a ChatWidget,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.widget.lock();
        state.loading = false;
        self.widget.publish(&state);
    }
}

impl ChatWidget {
    pub fn new(transport: Arc<dyn GatewayTransport>, contact: ContactInfo) -> Self {
        let initial = WidgetSnapshot::initial();
        let (updates, _) = watch::channel(initial.clone());
        Self {
            transport,
            contact,
            state: Mutex::new(initial),
            updates,
        }
    }

    fn lock(&self) -> MutexGuard<'_, WidgetSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &WidgetSnapshot) {
        self.updates.send_replace(state.clone());
    }

    /// Subscribe to state changes. Views scroll to the newest message on each update.
    pub fn subscribe(&self) -> watch::Receiver<WidgetSnapshot> {
        self.updates.subscribe()
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        self.lock().clone()
    }

    pub fn open(&self) {
        self.set_open(true);
    }

    pub fn close(&self) {
        self.set_open(false);
    }

    fn set_open(&self, open: bool) {
        let mut state = self.lock();
        if state.is_open != open {
            state.is_open = open;
            self.publish(&state);
        }
    }

    /// Replace the draft text
    pub fn set_input(&self, text: impl Into<String>) {
        let mut state = self.lock();
        state.input = text.into();
        self.publish(&state);
    }

    /// Send the current draft
    pub async fn send_input(&self) -> SendOutcome {
        let draft = self.lock().input.clone();
        self.send(&draft).await
    }

    /// Send a question and append the answer
    pub async fn send(&self, user_text: &str) -> SendOutcome {
        let question = user_text.trim();
        if question.is_empty() {
            return SendOutcome::Empty;
        }

        let transcript = {
            let mut state = self.lock();
            if state.loading {
                return SendOutcome::Busy;
            }
            state.transcript.push(Message::user(question));
            state.input.clear();
            state.loading = true;
            state.error = None;
            self.publish(&state);
            state.transcript.clone()
        };
        let _loading = LoadingGuard { widget: self };

        let result = self.transport.ask(&transcript).await;

        let mut state = self.lock();
        let outcome = match result {
            Ok(raw) => {
                let reply = Reply::classify(&raw);
                let outcome = if reply.is_out_of_scope() {
                    state.show_contact_options = true;
                    SendOutcome::OutOfScope
                } else {
                    SendOutcome::Answered
                };
                state.transcript.push(Message::assistant(reply.into_display_text()));
                outcome
            }
            Err(e) => {
                warn!(error = %e, "Ask request failed, offering contact options");
                state.transcript.push(Message::assistant(FAILURE_REPLY));
                state.show_contact_options = true;
                state.error = Some(FAILURE_NOTICE.to_string());
                SendOutcome::Failed
            }
        };
        self.publish(&state);
        drop(state);
        outcome
    }

    /// Transcript as display entries. Only assistant text is treated as markup.
    pub fn render(&self) -> Vec<RenderedMessage> {
        self.lock()
            .transcript
            .iter()
            .map(|message| RenderedMessage {
                role: message.role,
                body: match message.role {
                    Role::Assistant => MessageBody::Markup(message.content.clone()),
                    Role::User => MessageBody::PlainText(message.content.clone()),
                },
            })
            .collect()
    }

    /// Contact buttons, empty until an answer or failure asked for them
    pub fn contact_links(&self) -> Vec<ContactLink> {
        if self.lock().show_contact_options {
            contact_links(&self.contact)
        } else {
            Vec::new()
        }
    }
}
