//! Client builder for constructing [`GrafanaClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`GrafanaClient`] methods)
//! - Retry logic for failed requests (handled by `endpoints::request`)
//!
//! # Invariants
//! - `base_url` is required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes

use std::time::Duration;

use crate::client::GrafanaClient;
use crate::error::{ClientError, Result};
use loader_config::GrafanaConfig;
use loader_config::constants::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};

/// Builder for creating a new [`GrafanaClient`].
///
/// All options have defaults except `base_url`, which is required.
pub struct GrafanaClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    max_retries: usize,
}

impl Default for GrafanaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl GrafanaClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Grafana instance.
    ///
    /// This should include the protocol and port, e.g., `http://127.0.0.1:3001`.
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the total attempt budget for Grafana API calls.
    ///
    /// Default is 10 attempts with exponential backoff between transient
    /// failures.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Pre-configure the builder from loaded configuration.
    pub fn from_config(mut self, config: &GrafanaConfig) -> Self {
        self.base_url = Some(config.base_url.clone());
        self.timeout = config.timeout;
        self.max_retries = config.max_retries;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`GrafanaClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<GrafanaClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(GrafanaClient {
            http,
            base_url,
            max_retries: self.max_retries,
        })
    }
}
