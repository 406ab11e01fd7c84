//! Folder API methods for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Folder;

impl GrafanaClient {
    /// List all folders.
    pub async fn list_folders(&self) -> Result<Vec<Folder>> {
        endpoints::list_folders(&self.http, &self.base_url, self.max_retries).await
    }

    /// Create a folder with the given title.
    pub async fn create_folder(&self, title: &str) -> Result<Folder> {
        endpoints::create_folder(&self.http, &self.base_url, title, self.max_retries).await
    }
}
