//! Grafana HTTP management API client.
//!
//! This crate provides a typed client for the small slice of the Grafana
//! API the dashboard loader needs: listing and creating folders, upserting
//! dashboards, and deleting dashboards by uid. Transient transport failures
//! are retried with exponential backoff up to a bounded budget; callers only
//! ever see a decoded success value or a [`ClientError`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::GrafanaClient;
pub use client::builder::GrafanaClientBuilder;
pub use error::{ClientError, Result};
pub use models::{DashboardDocument, Folder, UpsertRequest, UpsertStatus};
