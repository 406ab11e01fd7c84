//! Main Grafana API client and API methods.
//!
//! This module provides the primary [`GrafanaClient`] for the dashboard
//! loader's outbound calls. The Grafana management API the loader talks to
//! is the unauthenticated local instance, so there is no credential or
//! session handling here.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `folders`: Folder listing and creation methods
//! - `dashboards`: Dashboard upsert and deletion methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retry pacing (delegated to `endpoints::request`)
//!
//! # Invariants
//! - Every method applies the client's configured retry budget.

pub mod builder;

mod dashboards;
mod folders;

/// Grafana management API client.
///
/// Use [`GrafanaClient::builder()`] to create a client:
///
/// ```rust,ignore
/// let client = GrafanaClient::builder()
///     .base_url("http://127.0.0.1:3001".to_string())
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct GrafanaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) max_retries: usize,
}

impl GrafanaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GrafanaClientBuilder {
        builder::GrafanaClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_builder_with_base_url() {
        let client = GrafanaClient::builder()
            .base_url("http://127.0.0.1:3001".to_string())
            .build();

        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "http://127.0.0.1:3001");
    }

    #[test]
    fn test_builder_missing_base_url() {
        let client = GrafanaClient::builder().build();
        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_builder_normalizes_base_url() {
        let client = GrafanaClient::builder()
            .base_url("http://127.0.0.1:3001/".to_string())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://127.0.0.1:3001");
    }
}
