//! The observed dashboard resource.
//!
//! Responsibilities:
//! - Define [`DashboardResource`], the loader's own view of a watched
//!   ConfigMap, decoupled from any Kubernetes client types.
//! - Provide the `data` content comparison update dispatch relies on.
//!
//! Does NOT handle:
//! - Mapping from cluster objects (the watch source in the binary does that).
//! - Interpreting the dashboard payloads (see the reconcile module).

use std::collections::BTreeMap;

/// An owner reference carried by a watched resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerRef {
    pub name: String,
    pub kind: String,
}

/// A dashboard ConfigMap as observed from the cluster.
///
/// `name` and `namespace` together form its identity; `data` maps arbitrary
/// keys to JSON-encoded dashboard documents (one resource may bundle
/// several).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardResource {
    pub name: String,
    pub namespace: String,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
    pub data: BTreeMap<String, String>,
    pub owner_references: Vec<OwnerRef>,
}

impl DashboardResource {
    /// True if this resource carries different dashboard content than
    /// `other`. Label or annotation changes alone do not count.
    pub fn data_changed_from(&self, other: &DashboardResource) -> bool {
        self.data != other.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource_with_data(entries: &[(&str, &str)]) -> DashboardResource {
        DashboardResource {
            name: "grafana-dashboard-x".to_string(),
            namespace: "ns1".to_string(),
            data: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_data_changed_detects_content_change() {
        let old = resource_with_data(&[("d1", r#"{"title":"A"}"#)]);
        let new = resource_with_data(&[("d1", r#"{"title":"B"}"#)]);
        assert!(new.data_changed_from(&old));
    }

    #[test]
    fn test_identical_data_is_unchanged() {
        let old = resource_with_data(&[("d1", r#"{"title":"A"}"#)]);
        let mut new = old.clone();
        new.labels.insert("extra".to_string(), "label".to_string());
        assert!(!new.data_changed_from(&old));
    }

    #[test]
    fn test_added_entry_is_a_change() {
        let old = resource_with_data(&[("d1", r#"{"title":"A"}"#)]);
        let new = resource_with_data(&[("d1", r#"{"title":"A"}"#), ("d2", "{}")]);
        assert!(new.data_changed_from(&old));
    }
}
