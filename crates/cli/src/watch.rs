//! Kubernetes watch source for dashboard ConfigMaps.
//!
//! Responsibilities:
//! - List+watch ConfigMaps in one namespace and translate the raw watch
//!   stream into [`ResourceEvent`]s with full snapshots.
//! - Keep a last-seen map so updates carry both the old and the new
//!   snapshot (the raw stream only delivers the new object); the
//!   reconciliation core stays stateless.
//!
//! Does NOT handle:
//! - Selection or reconciliation (the dispatcher consumes the channel).
//! - Resync/backoff policy details beyond the watcher's defaults.
//!
//! Invariants:
//! - The initial list is replayed as Added events, so a restart re-upserts
//!   every managed resource (idempotent by uid).
//! - Events for one resource are emitted in stream delivery order.

use std::collections::HashMap;
use std::pin::pin;

use anyhow::Context;
use futures::TryStreamExt;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::runtime::watcher::Event;
use kube::runtime::{WatchStreamExt, watcher};
use kube::{Api, Client};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use loader_reconciler::{DashboardResource, OwnerRef, ResourceEvent};

/// Map a ConfigMap snapshot into the loader's resource model.
fn to_resource(cm: ConfigMap) -> DashboardResource {
    let meta = cm.metadata;
    DashboardResource {
        name: meta.name.unwrap_or_default(),
        namespace: meta.namespace.unwrap_or_default(),
        labels: meta.labels.unwrap_or_default(),
        annotations: meta.annotations.unwrap_or_default(),
        data: cm.data.unwrap_or_default(),
        owner_references: meta
            .owner_references
            .unwrap_or_default()
            .into_iter()
            .map(|owner| OwnerRef {
                name: owner.name,
                kind: owner.kind,
            })
            .collect(),
    }
}

/// Run the watch source until the stream ends, the dispatcher goes away,
/// or the shutdown signal fires.
pub async fn run_watch_source(
    client: Client,
    namespace: &str,
    events: mpsc::Sender<ResourceEvent>,
    mut shutdown: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    let api: Api<ConfigMap> = Api::namespaced(client, namespace);
    let mut stream = pin!(watcher(api, watcher::Config::default()).default_backoff());

    // Last-seen snapshots, keyed by name (the watch is namespace-scoped).
    let mut snapshots: HashMap<String, DashboardResource> = HashMap::new();

    info!(namespace, "watching ConfigMaps");

    loop {
        let event = tokio::select! {
            biased;

            _ = shutdown.changed() => {
                info!("shutdown signal received, stopping watch source");
                return Ok(());
            }
            event = stream.try_next() => match event.context("ConfigMap watch stream failed")? {
                Some(event) => event,
                None => return Ok(()),
            },
        };

        let resource_event = match event {
            Event::Init | Event::InitDone => continue,
            Event::InitApply(cm) | Event::Apply(cm) => {
                let new = to_resource(cm);
                match snapshots.insert(new.name.clone(), new.clone()) {
                    Some(old) => ResourceEvent::Updated { old, new },
                    None => ResourceEvent::Added(new),
                }
            }
            Event::Delete(cm) => {
                let resource = to_resource(cm);
                snapshots.remove(&resource.name);
                ResourceEvent::Deleted(resource)
            }
        };

        if events.send(resource_event).await.is_err() {
            debug!("event channel closed, stopping watch source");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_resource_maps_all_fields() {
        let cm: ConfigMap = serde_json::from_value(serde_json::json!({
            "metadata": {
                "name": "grafana-dashboard-x",
                "namespace": "ns1",
                "labels": {"grafana-custom-dashboard": "true"},
                "annotations": {
                    "observability.open-cluster-management.io/dashboard-folder": "Team A"
                },
                "ownerReferences": [{
                    "apiVersion": "observability.open-cluster-management.io/v1beta2",
                    "kind": "MultiClusterObservability",
                    "name": "observability",
                    "uid": "x"
                }]
            },
            "data": {"d1": "{\"title\":\"A\"}"}
        }))
        .unwrap();

        let resource = to_resource(cm);
        assert_eq!(resource.name, "grafana-dashboard-x");
        assert_eq!(resource.namespace, "ns1");
        assert_eq!(
            resource.labels.get("grafana-custom-dashboard").unwrap(),
            "true"
        );
        assert_eq!(resource.data.get("d1").unwrap(), r#"{"title":"A"}"#);
        assert_eq!(resource.owner_references.len(), 1);
        assert_eq!(resource.owner_references[0].kind, "MultiClusterObservability");
    }

    #[test]
    fn test_to_resource_tolerates_empty_metadata() {
        let resource = to_resource(ConfigMap::default());
        assert!(resource.name.is_empty());
        assert!(resource.data.is_empty());
        assert!(resource.owner_references.is_empty());
    }
}
