//! Wire messages exchanged between the embedded page and the panel controller.
//!
//! Each message is a JSON record tagged by a `command` field, e.g.
//! `{"command":"sendMessage","text":"hi"}`.

use serde::{Deserialize, Serialize};

/// Page → controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum PageMessage {
    /// The user submitted `text`.
    SendMessage { text: String },
}

/// Controller → page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum ControllerMessage {
    /// The assistant produced `text`.
    DisplayResponse { text: String },
}

impl PageMessage {
    pub fn send(text: impl Into<String>) -> Self {
        Self::SendMessage { text: text.into() }
    }

    /// Decode a raw wire record. Unknown commands and malformed records are
    /// ignored.
    pub fn decode(raw: &str) -> Option<Self> {
        decode(raw)
    }
}

impl ControllerMessage {
    pub fn display(text: impl Into<String>) -> Self {
        Self::DisplayResponse { text: text.into() }
    }

    pub fn decode(raw: &str) -> Option<Self> {
        decode(raw)
    }
}

fn decode<T: for<'de> Deserialize<'de>>(raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(message) => Some(message),
        Err(e) => {
            tracing::debug!("Ignoring unrecognized message: {e}");
            None
        }
    }
}
