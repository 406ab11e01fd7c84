//! Configuration management for the Grafana dashboard loader.
//!
//! This crate provides types and loaders for the loader's runtime
//! configuration: the Grafana endpoint to write to and the namespace to
//! watch. Configuration is read from environment variables (with `.env`
//! support) and passed into components explicitly at construction; there
//! is no process-global state.

pub mod constants;
mod loader;
mod types;

pub use loader::{ConfigError, env_var_or_none};
pub use types::{Config, GrafanaConfig, WatchConfig};
