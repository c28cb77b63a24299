//! deepdetect-exporter — Prometheus exporter daemon for DeepDetect.
//!
//! Waits for the monitored instance to come up, builds a
//! [`DeepDetectCollector`], and serves `/metrics`.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use reqwest::Url;
use tokio::time::Instant;
use tracing::info;

use deepdetect_exporter::{DeepDetectCollector, Result, server};

/// Prometheus exporter for DeepDetect machine-learning servers.
#[derive(Parser)]
#[command(name = "deepdetect-exporter")]
#[command(version)]
#[command(about = "Prometheus exporter for DeepDetect")]
struct Args {
    /// host:port to listen on.
    #[arg(long, env = "DDEXP_LISTEN", default_value = "0.0.0.0:8081")]
    listen: SocketAddr,

    /// Base URL of the DeepDetect instance to monitor.
    #[arg(long, env = "DDEXP_MONITOR", default_value = "http://localhost:8080")]
    monitor: Url,

    /// Seconds to wait for the instance to become available at startup.
    #[arg(long, env = "DDEXP_READINESS_TIMEOUT", default_value_t = 360)]
    readiness_timeout: u64,
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    info!(monitor = %args.monitor, "starting DeepDetect exporter");
    let collector = wait_for_upstream(
        args.monitor,
        Duration::from_secs(args.readiness_timeout),
    )
    .await?;

    server::serve(args.listen, Arc::new(collector)).await?;
    Ok(())
}

/// Retry [`DeepDetectCollector::connect`] once per second until `deadline`
/// elapses, then give up with the last error.
async fn wait_for_upstream(endpoint: Url, deadline: Duration) -> Result<DeepDetectCollector> {
    let started = Instant::now();
    loop {
        match DeepDetectCollector::connect(endpoint.clone()).await {
            Ok(collector) => return Ok(collector),
            Err(e) if started.elapsed() < deadline => {
                info!(error = %e, "waiting for DeepDetect to become available");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
            Err(e) => return Err(e),
        }
    }
}
