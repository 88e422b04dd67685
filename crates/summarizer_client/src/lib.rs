//! Summarizer client: HTTP adapter for the summarization backend and the
//! background handle that runs it off the UI thread.
mod client;
mod handle;
mod settings;
mod types;

pub use client::{ReqwestSummaryClient, SummaryClient};
pub use handle::{ClientHandle, StartError};
pub use settings::{ClientSettings, SettingsError, DEFAULT_API_URL, HEALTH_PATH, SUMMARIZE_PATH};
pub use types::{
    BackendHealth, ClientEvent, FailureKind, RequestId, SummarizeError, GENERIC_API_ERROR,
};
