//! Grafana dashboard loader binary.
//!
//! Bootstraps logging and configuration, connects to the cluster and to
//! Grafana, then runs two tasks until a termination signal: the ConfigMap
//! watch source feeding an event channel, and the dispatcher draining it.
//! A failure to reach the cluster API is fatal; everything after the watch
//! loop starts is handled locally and logged.

mod args;
mod watch;

use anyhow::Context;
use clap::Parser;
use tokio::sync::{mpsc, watch as watch_channel};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use grafana_client::GrafanaClient;
use loader_reconciler::{Dispatcher, Reconciler};

/// Buffered events between the watch source and the dispatcher.
const EVENT_CHANNEL_CAPACITY: usize = 256;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = args::Cli::parse();
    let config = cli.load_config().context("failed to load configuration")?;

    info!(
        namespace = %config.watch.namespace,
        grafana_url = %config.grafana.base_url,
        "starting grafana-dashboard-loader"
    );

    let grafana = GrafanaClient::builder()
        .from_config(&config.grafana)
        .build()
        .context("failed to build Grafana client")?;

    let kube_client = kube::Client::try_default()
        .await
        .context("failed to build cluster client")?;

    let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let (stop_tx, stop_rx) = watch_channel::channel(false);

    let dispatcher = Dispatcher::new(Reconciler::new(grafana));
    let dispatcher_handle = tokio::spawn(dispatcher.run(event_rx, stop_rx.clone()));

    let namespace = config.watch.namespace.clone();
    let watch_handle = tokio::spawn(async move {
        if let Err(e) = watch::run_watch_source(kube_client, &namespace, event_tx, stop_rx).await {
            error!(error = %e, "watch source terminated with error");
        }
    });

    shutdown_signal().await;
    info!("termination signal received, shutting down");
    // Cooperative stop; both tasks check the signal between cycles.
    let _ = stop_tx.send(true);

    let _ = watch_handle.await;
    let _ = dispatcher_handle.await;

    info!("shutdown complete");
    Ok(())
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
