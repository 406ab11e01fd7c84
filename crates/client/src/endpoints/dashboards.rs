//! Dashboard management endpoints.
//!
//! The upsert endpoint decodes Grafana's 412 precondition responses into
//! [`UpsertStatus`] instead of treating them as errors: version-mismatch
//! and name-exists are part of the upsert protocol and the reconciler
//! decides what to do with them.

use reqwest::Client;

use crate::endpoints::request::{ensure_success, send_request_with_retry};
use crate::error::{ClientError, Result};
use crate::models::{UpsertRequest, UpsertStatus};

/// Status Grafana uses for precondition conflicts on the upsert endpoint.
const PRECONDITION_FAILED: u16 = 412;

/// Upsert a dashboard via `POST /api/dashboards/db`.
pub async fn upsert_dashboard(
    client: &Client,
    base_url: &str,
    request: &UpsertRequest,
    max_attempts: usize,
) -> Result<UpsertStatus> {
    let url = format!("{}/api/dashboards/db", base_url);

    let builder = client.post(&url).json(request);
    let response = send_request_with_retry(builder, max_attempts).await?;

    if response.status().as_u16() == PRECONDITION_FAILED {
        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "could not read error response body".to_string());

        if body.contains("version-mismatch") {
            return Ok(UpsertStatus::VersionMismatch);
        }
        if body.contains("name-exists") {
            return Ok(UpsertStatus::NameExists);
        }
        return Err(ClientError::ApiError {
            status: PRECONDITION_FAILED,
            url,
            message: body,
        });
    }

    ensure_success(response).await?;
    Ok(UpsertStatus::Success)
}

/// Delete a dashboard via `DELETE /api/dashboards/uid/{uid}`.
pub async fn delete_dashboard(
    client: &Client,
    base_url: &str,
    uid: &str,
    max_attempts: usize,
) -> Result<()> {
    let url = format!("{}/api/dashboards/uid/{}", base_url, uid);

    let builder = client.delete(&url);
    let response = send_request_with_retry(builder, max_attempts).await?;
    ensure_success(response).await?;

    Ok(())
}
