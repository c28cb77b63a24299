//! Prometheus text rendering for scrape output.
//!
//! Each scrape gets its own throwaway [`prometheus::Registry`]: the
//! descriptor table becomes one `CounterVec`/`GaugeVec` per metric (constant
//! labels plus the schema's per-service label names), samples fill them, and
//! `TextEncoder` produces the exposition body. Nothing is registered
//! process-wide, so consecutive scrapes never see each other's values.
//!
//! An invalid availability sample (upstream unreachable) renders as
//! `dd_available 0`, so a failed scrape still returns a body containing a
//! sample that signals the failure instead of an error response.

use std::collections::HashMap;

use prometheus::{CounterVec, Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};

use crate::collector::descriptors::{AVAILABILITY_HELP, AVAILABILITY_NAME, DESCRIPTORS};
use crate::collector::{MetricKind, SampleSet, SampleValue};
use crate::collector::labels;
use crate::{ExporterError, Result};

/// Content type of the rendered body.
pub const TEXT_FORMAT: &str = "text/plain; version=0.0.4";

/// Render a scrape's samples into Prometheus text exposition format.
pub fn render(set: &SampleSet) -> Result<String> {
    let registry = Registry::new();
    let const_labels: HashMap<String, String> = HashMap::from([
        ("dd_version".to_string(), set.const_labels.version.clone()),
        ("dd_commit".to_string(), set.const_labels.commit.clone()),
    ]);
    let label_names = labels::names();

    let mut counters: HashMap<&'static str, CounterVec> = HashMap::new();
    let mut gauges: HashMap<&'static str, GaugeVec> = HashMap::new();
    for descriptor in &DESCRIPTORS {
        let opts = Opts::new(descriptor.name, descriptor.help).const_labels(const_labels.clone());
        match descriptor.kind {
            MetricKind::Counter => {
                let vec = CounterVec::new(opts, &label_names)?;
                registry.register(Box::new(vec.clone()))?;
                counters.insert(descriptor.name, vec);
            }
            MetricKind::Gauge => {
                let vec = GaugeVec::new(opts, &label_names)?;
                registry.register(Box::new(vec.clone()))?;
                gauges.insert(descriptor.name, vec);
            }
        }
    }

    let available = Gauge::with_opts(
        Opts::new(AVAILABILITY_NAME, AVAILABILITY_HELP).const_labels(const_labels),
    )?;
    registry.register(Box::new(available.clone()))?;

    for sample in &set.samples {
        if sample.name == AVAILABILITY_NAME {
            available.set(match &sample.value {
                SampleValue::Finite(v) => *v,
                SampleValue::Invalid(_) => 0.0,
            });
            continue;
        }
        let SampleValue::Finite(value) = &sample.value else {
            continue;
        };
        let label_values: Vec<&str> = sample.label_values.iter().map(String::as_str).collect();
        match sample.kind {
            MetricKind::Counter => {
                if let Some(vec) = counters.get(sample.name) {
                    // Fresh registry, so a counter starts at zero and one
                    // inc_by lands exactly on the sample value.
                    vec.with_label_values(&label_values).inc_by(*value);
                }
            }
            MetricKind::Gauge => {
                if let Some(vec) = gauges.get(sample.name) {
                    vec.with_label_values(&label_values).set(*value);
                }
            }
        }
    }

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| ExporterError::Encode(prometheus::Error::Msg(format!("non-UTF-8 exposition: {e}"))))
}
