//! Centralized constants for the dashboard loader workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Grafana Connection Defaults
// =============================================================================

/// Default base URL of the Grafana management API.
///
/// The loader runs as a sidecar next to Grafana, so the default points at
/// the local instance.
pub const DEFAULT_GRAFANA_URL: &str = "http://127.0.0.1:3001";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of attempts for a Grafana API call.
///
/// Transient transport failures are retried inside the client up to this
/// budget before a failure is surfaced to the reconciler.
pub const DEFAULT_MAX_RETRIES: usize = 10;

/// Maximum allowed retry budget accepted from configuration.
pub const MAX_MAX_RETRIES: usize = 50;

/// Maximum allowed connection timeout in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Reconciliation Defaults
// =============================================================================

/// Folder title used when a managed resource requests a custom folder but
/// does not name one.
pub const DEFAULT_FOLDER_TITLE: &str = "Custom";

/// Folder id Grafana interprets as "the General folder".
///
/// Also the sentinel for "folder does not exist" in lookup results; the two
/// are indistinguishable by design.
pub const GENERAL_FOLDER_ID: i64 = 0;

// =============================================================================
// Environment Variables
// =============================================================================

/// Namespace whose ConfigMaps are watched.
pub const ENV_POD_NAMESPACE: &str = "POD_NAMESPACE";

/// Override for the Grafana base URL.
pub const ENV_GRAFANA_BASE_URL: &str = "GRAFANA_BASE_URL";

/// Override for the retry budget.
pub const ENV_GRAFANA_MAX_RETRIES: &str = "GRAFANA_MAX_RETRIES";

/// Override for the request timeout in seconds.
pub const ENV_GRAFANA_TIMEOUT: &str = "GRAFANA_TIMEOUT";
