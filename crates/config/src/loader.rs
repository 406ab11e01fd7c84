//! Environment-based configuration loading.
//!
//! Responsibilities:
//! - Read and parse environment variables for the loader configuration.
//! - Load a `.env` file when present (development convenience).
//! - Validate numeric bounds and the Grafana base URL.
//!
//! Does NOT handle:
//! - CLI flag parsing (the binary merges flags over the loaded config).
//! - Defaults for individual fields (see `types` and `constants`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return `ConfigError::InvalidValue`.
//! - The watched namespace is required; everything else has defaults.

use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::constants::{
    ENV_GRAFANA_BASE_URL, ENV_GRAFANA_MAX_RETRIES, ENV_GRAFANA_TIMEOUT, ENV_POD_NAMESPACE,
    MAX_MAX_RETRIES, MAX_TIMEOUT_SECS,
};
use crate::types::Config;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Invalid Grafana base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Reads `.env` from the working directory first (ignored if absent),
    /// then applies `POD_NAMESPACE`, `GRAFANA_BASE_URL`,
    /// `GRAFANA_MAX_RETRIES` and `GRAFANA_TIMEOUT` over the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_namespace(None)
    }

    /// Like [`Config::from_env`], but with an explicit namespace taking
    /// precedence over `POD_NAMESPACE` (used by the CLI's `--namespace`
    /// flag).
    pub fn from_env_with_namespace(namespace: Option<String>) -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env file");
        }

        let namespace = namespace
            .or_else(|| env_var_or_none(ENV_POD_NAMESPACE))
            .ok_or_else(|| ConfigError::MissingEnvVar(ENV_POD_NAMESPACE.to_string()))?;

        let mut config = Config::for_namespace(namespace);

        if let Some(base_url) = env_var_or_none(ENV_GRAFANA_BASE_URL) {
            validate_base_url(&base_url)?;
            config.grafana.base_url = base_url;
        }
        if let Some(retries) = env_var_or_none(ENV_GRAFANA_MAX_RETRIES) {
            let value: usize = retries.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_GRAFANA_MAX_RETRIES.to_string(),
                message: "must be a non-negative integer".to_string(),
            })?;
            if value > MAX_MAX_RETRIES {
                return Err(ConfigError::InvalidValue {
                    var: ENV_GRAFANA_MAX_RETRIES.to_string(),
                    message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, value),
                });
            }
            config.grafana.max_retries = value;
        }
        if let Some(timeout) = env_var_or_none(ENV_GRAFANA_TIMEOUT) {
            let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_GRAFANA_TIMEOUT.to_string(),
                message: "must be a number of seconds".to_string(),
            })?;
            if secs == 0 || secs > MAX_TIMEOUT_SECS {
                return Err(ConfigError::InvalidValue {
                    var: ENV_GRAFANA_TIMEOUT.to_string(),
                    message: format!("must be between 1 and {} (got {})", MAX_TIMEOUT_SECS, secs),
                });
            }
            config.grafana.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

/// Validate that the base URL parses and uses an http(s) scheme.
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    Ok(())
}
