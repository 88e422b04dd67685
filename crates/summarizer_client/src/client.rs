use std::error::Error as _;

use serde::{Deserialize, Serialize};
use summarizer_logging::{summarizer_debug, summarizer_info, summarizer_warn};

use crate::settings::{ClientSettings, HEALTH_PATH, SUMMARIZE_PATH};
use crate::{BackendHealth, FailureKind, SummarizeError, GENERIC_API_ERROR};

#[async_trait::async_trait]
pub trait SummaryClient: Send + Sync {
    /// One POST to the summarize endpoint; returns the markdown summary.
    async fn request_summary(&self, url: &str) -> Result<String, SummarizeError>;

    async fn check_health(&self) -> Result<BackendHealth, SummarizeError>;
}

#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct SummarizeResponse {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReqwestSummaryClient {
    settings: ClientSettings,
    http: reqwest::Client,
}

impl ReqwestSummaryClient {
    pub fn new(settings: ClientSettings) -> Result<Self, SummarizeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| SummarizeError::new(FailureKind::Transport, error_chain(&err)))?;
        Ok(Self { settings, http })
    }
}

#[async_trait::async_trait]
impl SummaryClient for ReqwestSummaryClient {
    async fn request_summary(&self, url: &str) -> Result<String, SummarizeError> {
        let endpoint = self.settings.endpoint(SUMMARIZE_PATH);
        let response = self
            .http
            .post(&endpoint)
            .json(&SummarizeRequest { url })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed = serde_json::from_slice::<SummarizeResponse>(&body);
        summarizer_info!(
            "Summarize status={} body_len={} parsed={}",
            status.as_u16(),
            body.len(),
            parsed.is_ok()
        );

        if !status.is_success() {
            let message = parsed
                .ok()
                .and_then(|body| body.error)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| GENERIC_API_ERROR.to_string());
            return Err(SummarizeError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        match parsed {
            Ok(body) => Ok(body.summary.unwrap_or_default()),
            Err(err) => {
                summarizer_warn!("Summarize response is not valid JSON: {}", err);
                Err(SummarizeError::new(
                    FailureKind::MalformedBody,
                    GENERIC_API_ERROR,
                ))
            }
        }
    }

    async fn check_health(&self) -> Result<BackendHealth, SummarizeError> {
        let endpoint = self.settings.endpoint(HEALTH_PATH);
        let response = self
            .http
            .get(&endpoint)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummarizeError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let health = serde_json::from_slice::<BackendHealth>(&body).map_err(|err| {
            SummarizeError::new(FailureKind::MalformedBody, format!("health response: {err}"))
        })?;
        summarizer_debug!("Health {:?}", health);
        Ok(health)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SummarizeError {
    if err.is_timeout() {
        return SummarizeError::new(FailureKind::Timeout, error_chain(&err));
    }
    SummarizeError::new(FailureKind::Transport, error_chain(&err))
}

/// reqwest's top-level message omits the cause ("connection refused" etc.).
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
