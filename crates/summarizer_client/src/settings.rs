use std::time::Duration;

use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:5001";
pub const SUMMARIZE_PATH: &str = "/api/summarize";
pub const HEALTH_PATH: &str = "/api/health";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid API base URL {url:?}: {message}")]
    InvalidBaseUrl { url: String, message: String },
    #[error("unsupported scheme {scheme:?} in API base URL (expected http or https)")]
    UnsupportedScheme { scheme: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Base URL without the `/api/...` suffix.
    pub base_url: String,
    /// `None` waits for the backend indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl ClientSettings {
    /// Validates `raw` as an http(s) base URL. Blank input selects [`DEFAULT_API_URL`].
    pub fn with_base_url(raw: &str) -> Result<Self, SettingsError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }

        let parsed = Url::parse(raw).map_err(|err| SettingsError::InvalidBaseUrl {
            url: raw.to_string(),
            message: err.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(SettingsError::UnsupportedScheme {
                    scheme: other.to_string(),
                })
            }
        }
        // Endpoint paths are appended as text, so a query or fragment would swallow them.
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(SettingsError::InvalidBaseUrl {
                url: raw.to_string(),
                message: "query and fragment are not allowed".to_string(),
            });
        }

        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
            request_timeout: None,
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
