//! Reconciliation core of the Grafana dashboard loader.
//!
//! Turns ConfigMap lifecycle events into the right sequence of Grafana API
//! calls: selection, folder resolution, dashboard upsert with conflict
//! recovery, and deletion by derived uid. The crate is stateless between
//! events; Grafana is the sole source of truth for what currently exists.
//!
//! Event flow: a watch source feeds [`ResourceEvent`]s into a channel; the
//! [`Dispatcher`] consumes them strictly sequentially and hands managed
//! resources to the [`Reconciler`].

mod dispatch;
mod folder;
mod reconcile;
mod resource;
mod selection;
mod uid;

pub use dispatch::{Dispatcher, ResourceEvent};
pub use folder::folder_title_for;
pub use reconcile::{ReconcileError, Reconciler};
pub use resource::{DashboardResource, OwnerRef};
pub use selection::is_managed;
pub use uid::derive_uid;
