//! Selection filter: which observed resources the loader manages.
//!
//! A pure predicate, re-evaluated on every event since labels and owners
//! may change between events.

use crate::resource::DashboardResource;

/// Label marking a ConfigMap as a custom dashboard (boolean string,
/// case-insensitive).
pub const CUSTOM_DASHBOARD_LABEL: &str = "grafana-custom-dashboard";

/// Label requesting placement in Grafana's General folder.
pub const GENERAL_FOLDER_LABEL: &str = "general-folder";

/// Annotation overriding the folder title.
pub const FOLDER_ANNOTATION: &str = "observability.open-cluster-management.io/dashboard-folder";

/// Owner kind that, combined with the name substring, marks operator-owned
/// dashboards.
pub const MANAGED_OWNER_KIND: &str = "MultiClusterObservability";

/// Name substring required for owner-based selection.
const MANAGED_NAME_SUBSTRING: &str = "grafana-dashboard";

/// Decide whether an observed resource is a dashboard the loader manages.
///
/// Accepts resources labeled `grafana-custom-dashboard: "true"`
/// (case-insensitive), or resources whose name contains
/// `grafana-dashboard` and that are owned by a `MultiClusterObservability`
/// object.
pub fn is_managed(resource: &DashboardResource) -> bool {
    if resource
        .labels
        .get(CUSTOM_DASHBOARD_LABEL)
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    {
        return true;
    }

    resource.name.contains(MANAGED_NAME_SUBSTRING)
        && resource
            .owner_references
            .iter()
            .any(|owner| owner.kind == MANAGED_OWNER_KIND)
}
