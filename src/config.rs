//! Application configuration loaded from environment variables.

use std::env;

/// Default API base for local development against the Django backend.
const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the fitness API, without a trailing slash.
    /// The fixed per-collection path convention lives in `api::endpoints`.
    pub api_base: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `FITBOARD_API_BASE` overrides the local-dev default; deployments
    /// set it to their API hostname.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let raw = env::var("FITBOARD_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::with_base(&raw)
    }

    /// Build a config from an explicit base address.
    ///
    /// Trailing slashes are trimmed so endpoint suffixes can be appended
    /// uniformly; a base without an http(s) scheme is rejected.
    pub fn with_base(base: &str) -> Result<Self, ConfigError> {
        let api_base = base.trim_end_matches('/').to_string();
        if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
            return Err(ConfigError::InvalidBase(base.to_string()));
        }

        Ok(Self { api_base })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API base must start with http:// or https://: {0}")]
    InvalidBase(String),
}
