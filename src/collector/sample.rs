//! Scrape output model.
//!
//! A scrape produces a [`SampleSet`]: the collector's constant labels plus
//! one [`Sample`] per (service, descriptor) pair that had a value, followed
//! by the availability sample. Sample sets are rebuilt from scratch on every
//! scrape; nothing here persists between scrapes.

use super::descriptors::MetricKind;

/// Value of one sample.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleValue {
    /// A real, transformed number.
    Finite(f64),
    /// The scrape failed before any value could be read; carries the
    /// upstream error message. Only ever attached to the availability
    /// metric.
    Invalid(String),
}

/// One (metric name, label values, value, kind) tuple in the scrape output.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: MetricKind,
    /// Per-service label values, aligned with
    /// [`labels::names`](super::labels::names). Empty for the availability
    /// metric.
    pub label_values: Vec<String>,
    pub value: SampleValue,
}

/// Labels attached to every sample from a given collector instance, captured
/// once at construction from the first `/info` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstLabels {
    pub version: String,
    pub commit: String,
}

/// Complete output of one scrape.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub const_labels: ConstLabels,
    pub samples: Vec<Sample>,
}

impl SampleSet {
    /// Whether this scrape failed to reach the upstream.
    pub fn is_unavailable(&self) -> bool {
        self.samples
            .iter()
            .any(|s| matches!(s.value, SampleValue::Invalid(_)))
    }
}
