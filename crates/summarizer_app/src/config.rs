//! Process configuration, read once from the environment at start.

use std::path::PathBuf;
use std::time::Duration;

use summarizer_client::{ClientSettings, SettingsError};
use summarizer_logging::{parse_level, LevelFilter};

pub const ENV_API_URL: &str = "SUMMARIZER_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "SUMMARIZER_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "SUMMARIZER_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "SUMMARIZER_LOG_FILE";

const DEFAULT_LOG_FILE: &str = "summarizer.log";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SUMMARIZER_API_URL: {0}")]
    ApiUrl(#[from] SettingsError),
    #[error("SUMMARIZER_TIMEOUT_SECS: expected a whole number of seconds, got {0:?}")]
    Timeout(String),
    #[error("SUMMARIZER_LOG_LEVEL: unknown level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub client: ClientSettings,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut client = match var(ENV_API_URL) {
            Some(raw) => ClientSettings::with_base_url(&raw)?,
            None => ClientSettings::default(),
        };

        if let Some(raw) = var(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Timeout(raw.clone()))?;
            client.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        let log_level = match var(ENV_LOG_LEVEL) {
            Some(raw) => parse_level(&raw).ok_or(ConfigError::LogLevel(raw))?,
            None => LevelFilter::Info,
        };

        let log_file = var(ENV_LOG_FILE)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Ok(Self {
            client,
            log_level,
            log_file,
        })
    }
}
