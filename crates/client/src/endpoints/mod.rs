//! Low-level HTTP calls against the Grafana management API.
//!
//! Each endpoint is a free async function taking the shared
//! `reqwest::Client`, the base URL and the retry budget. The functions
//! return decoded values; transport retry lives in [`request`].

mod dashboards;
mod folders;
mod request;

pub use dashboards::{delete_dashboard, upsert_dashboard};
pub use folders::{create_folder, list_folders};
pub use request::send_request_with_retry;
