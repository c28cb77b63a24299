//! Tests for the text exposition rendering of scrape output.

use deepdetect_exporter::{ConstLabels, MetricKind, Sample, SampleSet, SampleValue, exposition};

fn const_labels() -> ConstLabels {
    ConstLabels {
        version: "1.2".to_string(),
        commit: "abcd".to_string(),
    }
}

fn service_labels(name: &str) -> Vec<String> {
    vec![
        name.to_string(),
        "/opt/models".to_string(),
        "supervised".to_string(),
        "caffe".to_string(),
        "classifier".to_string(),
        "1".to_string(),
    ]
}

fn availability(value: SampleValue) -> Sample {
    Sample {
        name: "dd_available",
        help: "DeepDetect availability",
        kind: MetricKind::Gauge,
        label_values: Vec::new(),
        value,
    }
}

/// Extract the sample line (not HELP/TYPE comments) for a metric name.
fn sample_line<'a>(body: &'a str, name: &str) -> &'a str {
    body.lines()
        .find(|line| line.starts_with(name) && !line.starts_with('#'))
        .unwrap_or_else(|| panic!("no sample line for {name} in:\n{body}"))
}

#[test]
fn renders_counter_with_labels_and_type_comment() {
    let set = SampleSet {
        const_labels: const_labels(),
        samples: vec![
            Sample {
                name: "deepdetect_predict_requests_success_total",
                help: "Total number of successful predicts",
                kind: MetricKind::Counter,
                label_values: service_labels("imagenet"),
                value: SampleValue::Finite(10.0),
            },
            availability(SampleValue::Finite(1.0)),
        ],
    };

    let body = exposition::render(&set).unwrap();
    assert!(body.contains("# TYPE deepdetect_predict_requests_success_total counter"));

    let line = sample_line(&body, "deepdetect_predict_requests_success_total");
    assert!(line.contains(r#"service_name="imagenet""#));
    assert!(line.contains(r#"predict="1""#));
    assert!(line.contains(r#"dd_version="1.2""#));
    assert!(line.contains(r#"dd_commit="abcd""#));
    assert!(line.trim_end().ends_with(" 10"));
}

#[test]
fn renders_gauge_values_verbatim() {
    let set = SampleSet {
        const_labels: const_labels(),
        samples: vec![
            Sample {
                name: "deepdetect_batch_size_avg",
                help: "Average predict batch size",
                kind: MetricKind::Gauge,
                label_values: service_labels("imagenet"),
                value: SampleValue::Finite(3.5),
            },
            availability(SampleValue::Finite(1.0)),
        ],
    };

    let body = exposition::render(&set).unwrap();
    assert!(body.contains("# TYPE deepdetect_batch_size_avg gauge"));
    assert!(
        sample_line(&body, "deepdetect_batch_size_avg")
            .trim_end()
            .ends_with(" 3.5")
    );
}

#[test]
fn availability_carries_only_constant_labels() {
    let set = SampleSet {
        const_labels: const_labels(),
        samples: vec![availability(SampleValue::Finite(1.0))],
    };

    let body = exposition::render(&set).unwrap();
    let line = sample_line(&body, "dd_available");
    assert!(line.contains(r#"dd_version="1.2""#));
    assert!(line.contains(r#"dd_commit="abcd""#));
    assert!(!line.contains("service_name"));
    assert!(line.trim_end().ends_with(" 1"));
}

#[test]
fn invalid_availability_renders_as_zero() {
    let set = SampleSet {
        const_labels: const_labels(),
        samples: vec![availability(SampleValue::Invalid(
            "upstream request failed".to_string(),
        ))],
    };

    assert!(set.is_unavailable());
    let body = exposition::render(&set).unwrap();
    assert!(
        sample_line(&body, "dd_available")
            .trim_end()
            .ends_with(" 0")
    );
}

#[test]
fn zero_counter_is_rendered_not_dropped() {
    let set = SampleSet {
        const_labels: const_labels(),
        samples: vec![
            Sample {
                name: "deepdetect_predict_requests_failure_total",
                help: "Total number of failed predicts",
                kind: MetricKind::Counter,
                label_values: service_labels("imagenet"),
                value: SampleValue::Finite(0.0),
            },
            availability(SampleValue::Finite(1.0)),
        ],
    };

    let body = exposition::render(&set).unwrap();
    assert!(
        sample_line(&body, "deepdetect_predict_requests_failure_total")
            .trim_end()
            .ends_with(" 0")
    );
}
