use std::fmt;

use serde::Deserialize;

pub type RequestId = u64;

/// Message used when the backend gives no usable `error` text.
pub const GENERIC_API_ERROR: &str = "Failed to summarize website";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    SummaryCompleted {
        request_id: RequestId,
        result: Result<String, SummarizeError>,
    },
    HealthChecked(Result<BackendHealth, SummarizeError>),
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendHealth {
    pub status: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct SummarizeError {
    pub kind: FailureKind,
    /// Text suitable for showing to the user as-is.
    pub message: String,
}

impl SummarizeError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether the request never got a response from the backend.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, FailureKind::Transport | FailureKind::Timeout)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection, DNS, TLS or body read failure.
    Transport,
    Timeout,
    /// Backend answered with a non-2xx status.
    HttpStatus(u16),
    /// Backend answered 2xx with a body that is not the expected JSON.
    MalformedBody,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MalformedBody => write!(f, "malformed response body"),
        }
    }
}
