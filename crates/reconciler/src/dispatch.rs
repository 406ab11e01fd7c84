//! Event dispatcher: the loader's single logical worker.
//!
//! Responsibilities:
//! - Consume resource lifecycle events from a channel strictly
//!   sequentially, in delivery order, one reconciliation in flight at a
//!   time.
//! - Apply the selection filter and the data-change check before touching
//!   Grafana.
//! - Stop cooperatively when the shutdown signal fires, letting an
//!   in-flight call finish.
//!
//! Does NOT handle:
//! - Producing events (the watch source in the binary feeds the channel).
//! - Retry or conflict recovery (see `reconcile`).
//!
//! Invariants:
//! - One reconcile failure never stops the loop; it is logged and the next
//!   event is processed.
//! - `run` consumes the dispatcher and the receiver: the lifecycle is
//!   one-shot per process run (Idle -> Watching -> Stopped).

use tokio::sync::{mpsc, watch};
use tracing::{error, info};

use crate::reconcile::Reconciler;
use crate::resource::DashboardResource;
use crate::selection::is_managed;

/// A lifecycle event for one watched resource, with full snapshots.
#[derive(Debug, Clone)]
pub enum ResourceEvent {
    Added(DashboardResource),
    Updated {
        old: DashboardResource,
        new: DashboardResource,
    },
    Deleted(DashboardResource),
}

/// Sequential consumer of [`ResourceEvent`]s.
pub struct Dispatcher {
    reconciler: Reconciler,
}

impl Dispatcher {
    pub fn new(reconciler: Reconciler) -> Self {
        Self { reconciler }
    }

    /// Run the dispatch loop until the event channel closes or the
    /// shutdown signal fires.
    ///
    /// The shutdown check sits between dispatch cycles, so a reconciliation
    /// that is already running completes before the loop stops.
    pub async fn run(
        self,
        mut events: mpsc::Receiver<ResourceEvent>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        info!("dispatcher watching for resource events");

        loop {
            tokio::select! {
                biased;

                _ = shutdown.changed() => {
                    info!("shutdown signal received, stopping dispatcher");
                    break;
                }
                event = events.recv() => match event {
                    Some(event) => self.dispatch(event).await,
                    None => {
                        info!("event channel closed, stopping dispatcher");
                        break;
                    }
                },
            }
        }
    }

    async fn dispatch(&self, event: ResourceEvent) {
        match event {
            ResourceEvent::Added(resource) => {
                if !is_managed(&resource) {
                    return;
                }
                info!(name = %resource.name, "detected new dashboard resource");
                if let Err(e) = self.reconciler.upsert(&resource).await {
                    error!(name = %resource.name, error = %e, "failed to reconcile new dashboard resource");
                }
            }
            ResourceEvent::Updated { old, new } => {
                if !is_managed(&new) || !new.data_changed_from(&old) {
                    return;
                }
                info!(name = %new.name, "detected updated dashboard resource");
                if let Err(e) = self.reconciler.upsert(&new).await {
                    error!(name = %new.name, error = %e, "failed to reconcile updated dashboard resource");
                }
            }
            ResourceEvent::Deleted(resource) => {
                if !is_managed(&resource) {
                    return;
                }
                info!(name = %resource.name, "detected deleted dashboard resource");
                self.reconciler.delete(&resource).await;
            }
        }
    }
}
