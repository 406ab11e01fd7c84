//! Dashboard API methods for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{UpsertRequest, UpsertStatus};

impl GrafanaClient {
    /// Submit a dashboard create-or-update request.
    pub async fn upsert_dashboard(&self, request: &UpsertRequest) -> Result<UpsertStatus> {
        endpoints::upsert_dashboard(&self.http, &self.base_url, request, self.max_retries).await
    }

    /// Delete a dashboard by its uid.
    pub async fn delete_dashboard(&self, uid: &str) -> Result<()> {
        endpoints::delete_dashboard(&self.http, &self.base_url, uid, self.max_retries).await
    }
}
