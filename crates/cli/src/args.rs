//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Merge flag overrides over the environment-loaded configuration.
//!
//! Non-responsibilities:
//! - Does not run the loader (see `main`).
//! - Does not read environment variables itself (see `loader-config`).

use clap::Parser;
use std::time::Duration;

use loader_config::{Config, ConfigError};

#[derive(Parser, Debug)]
#[command(name = "grafana-dashboard-loader")]
#[command(about = "Sync dashboard ConfigMaps into a Grafana instance", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Namespace to watch for dashboard ConfigMaps (defaults to POD_NAMESPACE)
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Base URL of the Grafana management API (e.g., http://127.0.0.1:3001)
    #[arg(long)]
    pub grafana_url: Option<String>,

    /// Total attempt budget for Grafana API calls
    #[arg(long)]
    pub max_retries: Option<usize>,

    /// Grafana request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Resolve the effective configuration: environment first, flags on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::from_env_with_namespace(self.namespace.clone())?;

        if let Some(url) = &self.grafana_url {
            config.grafana.base_url = url.clone();
        }
        if let Some(retries) = self.max_retries {
            config.grafana.max_retries = retries;
        }
        if let Some(secs) = self.timeout {
            config.grafana.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
