//! Capabilities the surrounding host provides to the panel controller.
//!
//! Each one is a narrow trait so the controller can run against a terminal
//! panel, a headless single-shot runner, or test doubles.

use crate::error::{ErrorKind, NexusError};
use crate::protocol::ControllerMessage;

/// The controller's handle on its panel.
pub trait PanelHandle: Send + Sync {
    /// Deliver a message to the embedded page. Returns `false` once the page
    /// has been torn down.
    fn post_message(&self, message: ControllerMessage) -> bool;
}

/// Read-only credential lookup, consulted once per completion request.
///
/// Called directly from the request task, so implementations must return
/// quickly; a small local file read is fine, network lookups are not.
pub trait CredentialSource: Send + Sync {
    fn api_key(&self) -> Option<String>;
}

/// Sink for transient, user-visible error notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&NexusError> for Notification {
    fn from(err: &NexusError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl Notifier for tokio::sync::mpsc::UnboundedSender<Notification> {
    fn notify(&self, notification: Notification) {
        if self.send(notification).is_err() {
            tracing::debug!("Notification dropped: host is gone");
        }
    }
}
