//! apache-monitor - standalone runner
//!
//! Runs the monitor outside a host agent: samples are written as
//! structured log lines until SIGINT/SIGTERM.

use apache_monitor::infrastructure::{shutdown_signal, Sampler, ShutdownController};
use apache_monitor::{load_config, ApacheMonitor, TracingSampleSink};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt().with_max_level(log_level).init();

    tracing::info!(
        "starting apache monitor module={} url={} source={} interval={}s",
        cfg.module,
        cfg.status_url,
        cfg.source_address,
        cfg.sample_interval().as_secs()
    );

    let sink = TracingSampleSink::new();
    sink.log_catalog();

    let monitor = Arc::new(ApacheMonitor::from_config(&cfg, Arc::new(sink))?);

    let shutdown = ShutdownController::new();
    tokio::spawn(shutdown_signal(shutdown.clone()));

    Sampler::new(monitor, cfg.sample_interval())
        .run(shutdown)
        .await;

    Ok(())
}
