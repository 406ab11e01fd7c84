//! Retry helper for HTTP requests with exponential backoff.
//!
//! Responsibilities:
//! - Retry transient failures (connect errors, timeouts, 429, any 5xx)
//!   with exponential backoff up to a bounded attempt budget.
//! - Convert non-success terminal responses into [`ClientError::ApiError`]
//!   with the response body as the message.
//!
//! Does NOT handle:
//! - Precondition (412) decoding; the dashboard upsert endpoint interprets
//!   those bodies itself, so 412 responses are returned as-is.
//!
//! Invariants:
//! - `max_attempts` counts total attempts, never less than one.
//! - Backoff is 2^n seconds capped at [`MAX_BACKOFF_SECS`].

use reqwest::{RequestBuilder, Response};
use tracing::{debug, warn};

use crate::error::{ClientError, Result};

/// Upper bound on a single backoff sleep.
const MAX_BACKOFF_SECS: u64 = 30;

/// Send an HTTP request, retrying transient failures.
///
/// Returns the response for any terminal status (success or not); use
/// [`ensure_success`] when the caller has no protocol-level interpretation
/// of error statuses.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_attempts: usize,
) -> Result<Response> {
    let max_attempts = max_attempts.max(1);

    for attempt in 1..=max_attempts {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                // Streaming bodies cannot be replayed; single attempt only.
                debug!("request builder cannot be cloned, single attempt only");
                return builder.send().await.map_err(ClientError::from);
            }
        };

        match attempt_builder.send().await {
            Ok(response) if ClientError::is_retryable_status(response.status().as_u16()) => {
                let status = response.status().as_u16();
                if attempt < max_attempts {
                    let backoff_secs = backoff_secs(attempt);
                    debug!(
                        status,
                        attempt,
                        max_attempts,
                        backoff_secs,
                        "transient status, retrying with exponential backoff"
                    );
                    tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
                } else {
                    warn!(status, attempts = attempt, "retry budget exhausted");
                    return Err(ClientError::RetriesExhausted(max_attempts));
                }
            }
            Ok(response) => {
                if attempt > 1 {
                    debug!(attempt, "request succeeded after retry");
                }
                return Ok(response);
            }
            Err(e) if is_transient(&e) && attempt < max_attempts => {
                let backoff_secs = backoff_secs(attempt);
                debug!(
                    error = %e,
                    attempt,
                    max_attempts,
                    backoff_secs,
                    "transient transport error, retrying"
                );
                tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
            }
            Err(e) => return Err(ClientError::from(e)),
        }
    }

    Err(ClientError::RetriesExhausted(max_attempts))
}

/// Convert a non-success response into [`ClientError::ApiError`], reading
/// the body as the message.
pub async fn ensure_success(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "could not read error response body".to_string());

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}

fn backoff_secs(attempt: usize) -> u64 {
    2u64.saturating_pow(attempt.min(32) as u32 - 1).min(MAX_BACKOFF_SECS)
}

fn is_transient(error: &reqwest::Error) -> bool {
    error.is_connect() || error.is_timeout()
}
