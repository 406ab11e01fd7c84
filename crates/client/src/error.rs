//! Error types for the Grafana client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Grafana client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Grafana.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid response format from Grafana.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Retry budget exhausted.
    #[error("Retry budget exhausted ({0} attempts)")]
    RetriesExhausted(usize),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if an HTTP status code is transient and worth retrying.
    ///
    /// Retryable status codes:
    /// - 429: Too Many Requests (rate limiting)
    /// - 5xx: server-side failures
    ///
    /// Everything else fails immediately. 412 in particular is never
    /// retried here: it carries the upsert precondition protocol and is
    /// decoded by the dashboard endpoint.
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 500..=599)
    }
}
