//! Ranking service configuration.
//!
//! The browser host provides a [`RankingConfig`] through Leptos context;
//! native hosts can read it from the environment with [`RankingConfig::from_env`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_RANKINGS_URL: &str = "http://localhost:4567/rankings";
pub const RANKINGS_URL_VAR: &str = "RANKINGS_URL";

/// Errors produced while building a [`RankingConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The endpoint is not an absolute `http://` or `https://` URL.
    #[error("invalid rankings endpoint '{0}' (expected http:// or https:// URL)")]
    InvalidEndpoint(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingConfig {
    /// Absolute URL votes are POSTed to.
    pub endpoint: String,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_RANKINGS_URL.to_owned() }
    }
}

impl RankingConfig {
    /// Validate and normalize `endpoint`, dropping any trailing `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] for empty or non-HTTP URLs.
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        let trimmed = endpoint.trim().trim_end_matches('/');
        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"));
        match rest {
            Some(host) if !host.is_empty() => Ok(Self { endpoint: trimmed.to_owned() }),
            _ => Err(ConfigError::InvalidEndpoint(endpoint.to_owned())),
        }
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `RANKINGS_URL`: default `http://localhost:4567/rankings`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if `RANKINGS_URL` is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(RANKINGS_URL_VAR) {
            Ok(raw) => Self::new(&raw),
            Err(_) => Ok(Self::default()),
        }
    }
}
