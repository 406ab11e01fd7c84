//! Dashboard models for the Grafana dashboard API.
//!
//! Responsibilities:
//! - Define the [`DashboardDocument`] pass-through model: only `uid` and
//!   `id` are interpreted; every other field survives re-serialization
//!   untouched.
//! - Define the upsert request body and the typed upsert outcome.
//!
//! Invariants:
//! - `id` is always serialized, as an explicit `null` when unset, so Grafana
//!   keys the upsert on `uid` rather than on a stale numeric id.
//! - `uid` is omitted from serialization only while unset; the reconciler
//!   injects a derived uid before submission.

use serde::{Deserialize, Serialize};

/// One dashboard definition, parsed from a ConfigMap data entry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DashboardDocument {
    /// Stable string identifier the upsert is keyed on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Grafana-assigned numeric id. Cleared before every submission.
    #[serde(default)]
    pub id: Option<i64>,
    /// All remaining fields (title, panels, ...), preserved opaquely.
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl DashboardDocument {
    /// Parse a dashboard document from a raw JSON payload.
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    /// Inject `uid` if the payload did not carry one.
    pub fn set_uid_if_absent(&mut self, uid: impl Into<String>) {
        if self.uid.is_none() {
            self.uid = Some(uid.into());
        }
    }

    /// Clear the Grafana-assigned numeric id so the submission is an
    /// upsert-by-uid.
    pub fn clear_id(&mut self) {
        self.id = None;
    }
}

/// Request body for `POST /api/dashboards/db`.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpsertRequest {
    pub folder_id: i64,
    pub overwrite: bool,
    pub dashboard: DashboardDocument,
}

/// Typed outcome of a dashboard upsert call.
///
/// Grafana reports precondition conflicts as 412 with a reason in the body;
/// those are part of the upsert protocol, not transport failures, so the
/// endpoint decodes them instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertStatus {
    /// Grafana accepted the dashboard.
    Success,
    /// 412 with a `version-mismatch` reason: the stored dashboard moved on.
    VersionMismatch,
    /// 412 with a `name-exists` reason: title collision under a different uid.
    NameExists,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_preserves_unknown_fields() {
        let payload = r#"{"uid":"u1","id":42,"title":"A","panels":[{"type":"graph"}]}"#;
        let doc = DashboardDocument::from_json(payload).unwrap();
        assert_eq!(doc.uid.as_deref(), Some("u1"));
        assert_eq!(doc.id, Some(42));
        assert_eq!(doc.rest["title"], "A");
        assert_eq!(doc.rest["panels"][0]["type"], "graph");
    }

    #[test]
    fn test_set_uid_if_absent_keeps_explicit_uid() {
        let mut doc = DashboardDocument::from_json(r#"{"uid":"explicit"}"#).unwrap();
        doc.set_uid_if_absent("derived");
        assert_eq!(doc.uid.as_deref(), Some("explicit"));

        let mut doc = DashboardDocument::from_json(r#"{"title":"A"}"#).unwrap();
        doc.set_uid_if_absent("derived");
        assert_eq!(doc.uid.as_deref(), Some("derived"));
    }

    #[test]
    fn test_id_serializes_as_null_when_cleared() {
        let mut doc = DashboardDocument::from_json(r#"{"uid":"u1","id":7,"title":"A"}"#).unwrap();
        doc.clear_id();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["id"], serde_json::Value::Null);
        assert_eq!(json["uid"], "u1");
        assert_eq!(json["title"], "A");
    }

    #[test]
    fn test_upsert_request_wire_shape() {
        let doc = DashboardDocument::from_json(r#"{"uid":"u1","title":"A"}"#).unwrap();
        let req = UpsertRequest {
            folder_id: 3,
            overwrite: false,
            dashboard: doc,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["folderId"], 3);
        assert_eq!(json["overwrite"], false);
        assert_eq!(json["dashboard"]["uid"], "u1");
    }
}
