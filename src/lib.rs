//! Prometheus exporter for [DeepDetect](https://www.deepdetect.com/) servers.
//!
//! Polls a DeepDetect instance's status API on every scrape and re-exposes
//! its internal counters and gauges as Prometheus metrics: service discovery
//! via `/info`, per-service statistics via `/services/{name}`, one labeled
//! sample per present field, plus a `dd_available` gauge describing whether
//! the scrape reached the upstream at all.
//!
//! Each scrape independently re-derives the full metric set from a live API
//! call; the exporter keeps no history and aggregates nothing.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use deepdetect_exporter::{DeepDetectCollector, exposition};
//!
//! #[tokio::main]
//! async fn main() -> deepdetect_exporter::Result<()> {
//!     let endpoint = "http://localhost:8080".parse().unwrap();
//!     let collector = DeepDetectCollector::connect(endpoint).await?;
//!
//!     let samples = collector.collect().await;
//!     println!("{}", exposition::render(&samples)?);
//!
//!     deepdetect_exporter::server::serve("0.0.0.0:8081".parse().unwrap(), Arc::new(collector))
//!         .await
//! }
//! ```

pub mod client;
pub mod collector;
pub mod error;
pub mod exposition;
pub mod server;

// Re-export main types at crate root
pub use client::{DeepDetectClient, ModelStats, ServerInfo, ServiceRecord, ServiceStats};
pub use collector::{
    ConstLabels, DeepDetectCollector, MetricDescriptor, MetricKind, Sample, SampleSet, SampleValue,
};
pub use error::{ExporterError, Result};
