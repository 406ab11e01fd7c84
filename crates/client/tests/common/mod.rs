//! Common test utilities for integration tests.
//!
//! Re-exports the types most client tests need so individual test files can
//! `use common::*;`.

#[allow(unused_imports)]
pub use grafana_client::{ClientError, GrafanaClient, UpsertStatus};
#[allow(unused_imports)]
pub use wiremock::matchers::{body_json, body_partial_json, method, path};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client against a mock server with a small retry budget.
#[allow(dead_code)]
pub fn test_client(server: &MockServer, max_retries: usize) -> GrafanaClient {
    GrafanaClient::builder()
        .base_url(server.uri())
        .max_retries(max_retries)
        .build()
        .expect("client builds against mock server")
}
