//! Chat widget client
//!
//! The client half of the proxy: owns the transcript, sends it to the
//! gateway, and turns sentinel replies and failures into a contact prompt.

pub mod contact;
pub mod transport;
pub mod widget;

pub use contact::{contact_links, ContactLink};
pub use transport::{ClientError, GatewayTransport, HttpTransport};
pub use widget::{ChatWidget, MessageBody, RenderedMessage, SendOutcome, WidgetSnapshot};
