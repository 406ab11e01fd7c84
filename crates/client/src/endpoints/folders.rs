//! Folder management endpoints.

use reqwest::Client;

use crate::endpoints::request::{ensure_success, send_request_with_retry};
use crate::error::Result;
use crate::models::{CreateFolderRequest, Folder};

/// List all folders via `GET /api/folders`.
pub async fn list_folders(
    client: &Client,
    base_url: &str,
    max_attempts: usize,
) -> Result<Vec<Folder>> {
    let url = format!("{}/api/folders", base_url);

    let builder = client.get(&url);
    let response = send_request_with_retry(builder, max_attempts).await?;
    let response = ensure_success(response).await?;

    Ok(response.json().await?)
}

/// Create a folder via `POST /api/folders` and return it.
pub async fn create_folder(
    client: &Client,
    base_url: &str,
    title: &str,
    max_attempts: usize,
) -> Result<Folder> {
    let url = format!("{}/api/folders", base_url);
    let body = CreateFolderRequest {
        title: title.to_string(),
    };

    let builder = client.post(&url).json(&body);
    let response = send_request_with_retry(builder, max_attempts).await?;
    let response = ensure_success(response).await?;

    Ok(response.json().await?)
}
