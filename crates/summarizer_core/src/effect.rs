use crate::RequestId;

/// Side effects requested by [`crate::update`]; executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the trimmed URL to the summarization endpoint.
    RequestSummary { request_id: RequestId, url: String },
    /// Probe the backend health endpoint.
    CheckHealth,
}
