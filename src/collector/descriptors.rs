//! Static metric descriptor table and unit transformers.
//!
//! Declared once, never mutated: the immutable contract between DeepDetect's
//! internal field names and the exported metric names. Each descriptor binds
//! an exported name to a typed accessor on [`ServiceRecord`] and a unit
//! transformer. Accessors return the field's natural numeric value as an
//! `Option<f64>`; an absent field yields `None` and is skipped at emission,
//! a present zero yields `Some(0.0)` and is exported.

use crate::client::ServiceRecord;

/// Prometheus value kind of an exported metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
}

/// Static declaration of one exported metric.
pub struct MetricDescriptor {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: MetricKind,
    /// Typed accessor for the backing field; `None` when absent upstream.
    pub read: fn(&ServiceRecord) -> Option<f64>,
    /// Unit transformer applied to present values before emission.
    pub transform: fn(f64) -> f64,
}

/// Pass a value through unchanged.
pub fn identity(value: f64) -> f64 {
    value
}

/// Convert a millisecond accumulator to seconds.
pub fn millis_to_seconds(value: f64) -> f64 {
    value / 1000.0
}

/// Availability metric, emitted once per scrape with constant labels only.
pub const AVAILABILITY_NAME: &str = "dd_available";
pub const AVAILABILITY_HELP: &str = "DeepDetect availability";

/// The full descriptor table, in emission order.
pub static DESCRIPTORS: [MetricDescriptor; 11] = [
    MetricDescriptor {
        name: "deepdetect_predict_requests_success_total",
        help: "Total number of successful predicts",
        kind: MetricKind::Counter,
        read: |r| r.service_stats.predict_success.map(|v| v as f64),
        transform: identity,
    },
    MetricDescriptor {
        name: "deepdetect_predict_requests_failure_total",
        help: "Total number of failed predicts",
        kind: MetricKind::Counter,
        read: |r| r.service_stats.predict_failure.map(|v| v as f64),
        transform: identity,
    },
    MetricDescriptor {
        name: "deepdetect_inference_requests_total",
        help: "Total number of successful inferences",
        kind: MetricKind::Counter,
        read: |r| r.service_stats.inference_count.map(|v| v as f64),
        transform: identity,
    },
    MetricDescriptor {
        name: "deepdetect_predict_requests_total",
        help: "Total number of predicts",
        kind: MetricKind::Counter,
        read: |r| r.service_stats.predict_count.map(|v| v as f64),
        transform: identity,
    },
    MetricDescriptor {
        name: "deepdetect_predict_duration_seconds_total",
        help: "Total prediction time in seconds",
        kind: MetricKind::Counter,
        read: |r| r.service_stats.total_predict_duration_ms,
        transform: millis_to_seconds,
    },
    MetricDescriptor {
        name: "deepdetect_transform_duration_seconds_total",
        help: "Total transformation time in seconds",
        kind: MetricKind::Counter,
        read: |r| r.service_stats.total_transform_duration_ms,
        transform: millis_to_seconds,
    },
    MetricDescriptor {
        name: "deepdetect_batch_size_avg",
        help: "Average predict batch size",
        kind: MetricKind::Gauge,
        read: |r| r.service_stats.avg_batch_size,
        transform: identity,
    },
    MetricDescriptor {
        name: "deepdetect_data_mem_test_bytes",
        help: "Memory used by test data",
        kind: MetricKind::Gauge,
        read: |r| r.stats.data_mem_test.map(|v| v as f64),
        transform: identity,
    },
    MetricDescriptor {
        name: "deepdetect_data_mem_train_bytes",
        help: "Memory used by training data",
        kind: MetricKind::Gauge,
        read: |r| r.stats.data_mem_train.map(|v| v as f64),
        transform: identity,
    },
    MetricDescriptor {
        name: "deepdetect_flops",
        help: "Model FLOPs",
        kind: MetricKind::Gauge,
        read: |r| r.stats.flops.map(|v| v as f64),
        transform: identity,
    },
    MetricDescriptor {
        name: "deepdetect_params",
        help: "Model parameter count",
        kind: MetricKind::Gauge,
        read: |r| r.stats.params.map(|v| v as f64),
        transform: identity,
    },
];
