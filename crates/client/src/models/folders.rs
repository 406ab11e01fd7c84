//! Folder models for the Grafana folder API.

use serde::{Deserialize, Serialize};

/// A Grafana folder as returned by `/api/folders`.
///
/// Grafana responses carry more fields (uid, url, permissions); only the
/// ones the loader acts on are decoded.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Folder {
    /// Numeric folder id. Id 0 is the General folder and doubles as the
    /// "no folder" sentinel in lookups.
    #[serde(default)]
    pub id: i64,
    /// Folder title, unique lookup key.
    #[serde(default)]
    pub title: String,
}

/// Request body for creating a folder via `POST /api/folders`.
#[derive(Debug, Serialize, Clone)]
pub struct CreateFolderRequest {
    pub title: String,
}
