//! Dashboard endpoint tests.
//!
//! # Invariants
//! - 200 on the upsert endpoint decodes to `UpsertStatus::Success`.
//! - 412 bodies containing `version-mismatch` / `name-exists` decode to
//!   their typed statuses instead of erroring.
//! - 412 with an unrecognized reason is an `ApiError`.
//! - Deletion targets `/api/dashboards/uid/{uid}`.

mod common;

use common::*;
use grafana_client::{DashboardDocument, UpsertRequest};
use serde_json::json;

fn upsert_request(uid: &str) -> UpsertRequest {
    let mut dashboard =
        DashboardDocument::from_json(&format!(r#"{{"uid":"{}","title":"A","id":9}}"#, uid))
            .unwrap();
    dashboard.clear_id();
    UpsertRequest {
        folder_id: 3,
        overwrite: false,
        dashboard,
    }
}

#[tokio::test]
async fn test_upsert_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .and(body_partial_json(json!({
            "folderId": 3,
            "overwrite": false,
            "dashboard": {"uid": "u1", "id": null}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 1);
    let status = client.upsert_dashboard(&upsert_request("u1")).await.unwrap();

    assert_eq!(status, UpsertStatus::Success);
}

#[tokio::test]
async fn test_upsert_decodes_version_mismatch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .respond_with(ResponseTemplate::new(412).set_body_json(json!({
            "message": "The dashboard has been changed by someone else",
            "status": "version-mismatch"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 3);
    let status = client.upsert_dashboard(&upsert_request("u1")).await.unwrap();

    assert_eq!(status, UpsertStatus::VersionMismatch);

    // Precondition failures must not consume the transport retry budget.
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_upsert_decodes_name_exists() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .respond_with(ResponseTemplate::new(412).set_body_json(json!({
            "message": "A dashboard with the same name already exists",
            "status": "name-exists"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 1);
    let status = client.upsert_dashboard(&upsert_request("u1")).await.unwrap();

    assert_eq!(status, UpsertStatus::NameExists);
}

#[tokio::test]
async fn test_upsert_unknown_precondition_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .respond_with(ResponseTemplate::new(412).set_body_json(json!({
            "status": "something-else"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 1);
    let err = client.upsert_dashboard(&upsert_request("u1")).await.unwrap_err();

    assert!(matches!(err, ClientError::ApiError { status: 412, .. }));
}

#[tokio::test]
async fn test_delete_dashboard_by_uid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/dashboards/uid/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"title": "A"})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 1);
    assert!(client.delete_dashboard("abc123").await.is_ok());
}

#[tokio::test]
async fn test_delete_dashboard_not_found_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/dashboards/uid/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server, 1);
    let err = client.delete_dashboard("missing").await.unwrap_err();

    assert!(matches!(err, ClientError::ApiError { status: 404, .. }));
}
