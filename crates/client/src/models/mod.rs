//! Wire types for the Grafana management API.

mod dashboards;
mod folders;

pub use dashboards::{DashboardDocument, UpsertRequest, UpsertStatus};
pub use folders::{CreateFolderRequest, Folder};
