//! Configuration types for the dashboard loader.
//!
//! Responsibilities:
//! - Define the Grafana connection settings (URL, timeout, retry budget).
//! - Define the watch settings (namespace to observe).
//! - Provide sensible defaults via `Default`, not magic numbers.
//!
//! Does NOT handle:
//! - Loading from environment variables (see `loader` module).
//! - Actual network connections (see the client crate).

use crate::constants::{DEFAULT_GRAFANA_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Grafana connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrafanaConfig {
    /// Base URL of the Grafana management API (e.g., http://127.0.0.1:3001)
    pub base_url: String,
    /// HTTP request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of attempts for a Grafana API call
    pub max_retries: usize,
}

impl Default for GrafanaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GRAFANA_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Watch configuration: which namespace's ConfigMaps are observed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Namespace to watch for dashboard ConfigMaps.
    pub namespace: String,
}

/// Complete loader configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub grafana: GrafanaConfig,
    pub watch: WatchConfig,
}

impl Config {
    /// Build a configuration with defaults for the given namespace.
    pub fn for_namespace(namespace: impl Into<String>) -> Self {
        Self {
            grafana: GrafanaConfig::default(),
            watch: WatchConfig {
                namespace: namespace.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grafana_defaults() {
        let cfg = GrafanaConfig::default();
        assert_eq!(cfg.base_url, "http://127.0.0.1:3001");
        assert_eq!(cfg.max_retries, 10);
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_for_namespace() {
        let cfg = Config::for_namespace("open-cluster-management-observability");
        assert_eq!(cfg.watch.namespace, "open-cluster-management-observability");
        assert_eq!(cfg.grafana.base_url, "http://127.0.0.1:3001");
    }

    #[test]
    fn test_duration_serialized_as_seconds() {
        let cfg = GrafanaConfig::default();
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["timeout"], 30);
    }
}
