//! Upsert and deletion engines.
//!
//! Responsibilities:
//! - Turn one managed resource into the right Grafana calls: folder
//!   resolution, per-entry dashboard upsert with conflict recovery, and
//!   per-entry deletion by uid.
//!
//! Does NOT handle:
//! - Event ordering or selection (see `dispatch` / `selection`).
//! - Transport retry (inside the client).
//!
//! Invariants:
//! - The version-mismatch retry is a single whole-resource overwrite pass;
//!   the two-pass structure makes "retry at most once" structural.
//! - Documents already submitted stay submitted when a later sibling fails;
//!   there is no rollback.
//! - Folder resolution runs once per resource, not once per document.

use tracing::{debug, error, info, warn};

use grafana_client::{ClientError, GrafanaClient, UpsertRequest, UpsertStatus};
use loader_config::constants::GENERAL_FOLDER_ID;

use crate::folder::folder_title_for;
use crate::resource::DashboardResource;
use crate::uid::derive_uid;

/// Errors that abort reconciliation of a whole resource.
///
/// Entry-level conflicts (name-exists, terminal statuses on one document)
/// are logged and skipped instead; they never surface here.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    /// A dashboard payload was not valid JSON; remaining entries of the
    /// resource are not attempted.
    #[error("invalid dashboard payload '{key}': {source}")]
    InvalidPayload {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Grafana reported the sentinel id for a created folder.
    #[error("folder creation for '{title}' returned the sentinel id 0")]
    FolderCreateFailed { title: String },

    /// A folder call failed past the client's retry budget.
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Outcome of one pass over a resource's dashboard entries.
enum PassOutcome {
    Done,
    /// At least one entry hit a version-mismatch; the caller decides
    /// whether an overwrite pass follows.
    VersionMismatch,
}

/// Reconciles managed resources against a Grafana instance.
#[derive(Debug, Clone)]
pub struct Reconciler {
    client: GrafanaClient,
}

impl Reconciler {
    pub fn new(client: GrafanaClient) -> Self {
        Self { client }
    }

    /// Create or update every dashboard bundled in `resource`.
    ///
    /// Runs one plain pass and, if any entry reported a version mismatch,
    /// exactly one whole-resource pass with `overwrite = true`. A mismatch
    /// on the overwrite pass is logged and not retried again.
    pub async fn upsert(&self, resource: &DashboardResource) -> Result<(), ReconcileError> {
        let folder_id = match folder_title_for(resource) {
            None => GENERAL_FOLDER_ID,
            Some(title) => self.resolve_or_create_folder(&title).await?,
        };

        match self.upsert_pass(resource, folder_id, false).await? {
            PassOutcome::Done => Ok(()),
            PassOutcome::VersionMismatch => {
                debug!(
                    name = %resource.name,
                    "version mismatch, retrying whole resource with overwrite"
                );
                match self.upsert_pass(resource, folder_id, true).await? {
                    PassOutcome::Done => Ok(()),
                    // Structurally unreachable: the overwrite pass logs
                    // mismatches instead of reporting them.
                    PassOutcome::VersionMismatch => Ok(()),
                }
            }
        }
    }

    /// One pass over all data entries.
    ///
    /// Returns `VersionMismatch` only when `overwrite` is false; the
    /// overwrite pass downgrades further mismatches to logged failures so
    /// the retry cannot recurse.
    async fn upsert_pass(
        &self,
        resource: &DashboardResource,
        folder_id: i64,
        overwrite: bool,
    ) -> Result<PassOutcome, ReconcileError> {
        for (key, payload) in &resource.data {
            let mut dashboard = grafana_client::DashboardDocument::from_json(payload).map_err(
                |source| ReconcileError::InvalidPayload {
                    key: key.clone(),
                    source,
                },
            )?;
            dashboard.set_uid_if_absent(derive_uid(&resource.name, &resource.namespace));
            dashboard.clear_id();

            let request = UpsertRequest {
                folder_id,
                overwrite,
                dashboard,
            };

            match self.client.upsert_dashboard(&request).await {
                Ok(UpsertStatus::Success) => {
                    info!(name = %resource.name, entry = %key, overwrite, "dashboard created/updated");
                }
                Ok(UpsertStatus::VersionMismatch) if !overwrite => {
                    return Ok(PassOutcome::VersionMismatch);
                }
                Ok(UpsertStatus::VersionMismatch) => {
                    error!(
                        name = %resource.name,
                        entry = %key,
                        "version mismatch persisted after overwrite, giving up"
                    );
                }
                Ok(UpsertStatus::NameExists) => {
                    info!(name = %resource.name, entry = %key, "dashboard name already exists, skipping");
                }
                Err(e) => {
                    warn!(name = %resource.name, entry = %key, error = %e, "failed to create/update dashboard");
                }
            }
        }

        Ok(PassOutcome::Done)
    }

    /// Map a folder title to a folder id, creating the folder if absent.
    ///
    /// Idempotent: an existing title is reused, never duplicated. A lookup
    /// hit with id 0 counts as absent; id 0 from creation is a failure (the
    /// sentinel must never be a valid created id).
    pub async fn resolve_or_create_folder(&self, title: &str) -> Result<i64, ReconcileError> {
        let folders = self.client.list_folders().await?;
        if let Some(id) = folders
            .iter()
            .find(|f| f.title == title)
            .map(|f| f.id)
            .filter(|id| *id != GENERAL_FOLDER_ID)
        {
            debug!(title, id, "folder already exists");
            return Ok(id);
        }

        let created = self.client.create_folder(title).await?;
        if created.id == GENERAL_FOLDER_ID {
            return Err(ReconcileError::FolderCreateFailed {
                title: title.to_string(),
            });
        }
        info!(title, id = created.id, "folder created");
        Ok(created.id)
    }

    /// Delete every dashboard bundled in `resource`.
    ///
    /// Best effort per entry: a malformed payload or a failed call is
    /// logged and never blocks deletion of siblings.
    pub async fn delete(&self, resource: &DashboardResource) {
        for (key, payload) in &resource.data {
            let uid = match grafana_client::DashboardDocument::from_json(payload) {
                Ok(doc) => doc
                    .uid
                    .unwrap_or_else(|| derive_uid(&resource.name, &resource.namespace)),
                Err(e) => {
                    warn!(name = %resource.name, entry = %key, error = %e, "invalid dashboard payload, skipping deletion");
                    continue;
                }
            };

            match self.client.delete_dashboard(&uid).await {
                Ok(()) => info!(name = %resource.name, entry = %key, uid = %uid, "dashboard deleted"),
                Err(e) => {
                    error!(name = %resource.name, entry = %key, uid = %uid, error = %e, "failed to delete dashboard");
                }
            }
        }
    }
}
