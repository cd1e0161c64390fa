use thiserror::Error;

use crate::constants::messages;

#[derive(Error, Debug)]
pub enum NexusError {
    #[error("{}", messages::MISSING_CREDENTIAL)]
    MissingCredential,

    #[error("Error connecting to Gemini API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed: {status} {reason}")]
    RequestFailed { status: u16, reason: String },

    #[error("Unexpected response structure from Gemini API: {0}")]
    MalformedResponse(String),
}

/// The four failure classes a completion request can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Protocol,
    MalformedResponse,
}

impl NexusError {
    pub fn request_failed(status: u16, reason: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            reason: reason.into(),
        }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResponse(detail.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential => ErrorKind::Configuration,
            Self::Transport(_) => ErrorKind::Transport,
            Self::RequestFailed { .. } => ErrorKind::Protocol,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }
}

pub type Result<T> = std::result::Result<T, NexusError>;
