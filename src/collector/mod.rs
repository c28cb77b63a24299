//! The collection pipeline.
//!
//! [`DeepDetectCollector`] turns one scrape request into a [`SampleSet`]: it
//! fetches every hosted service's statistics, walks the static descriptor
//! table for each record, skips absent fields, applies unit transformers,
//! and closes with the availability sample.
//!
//! The collector is stateless across scrapes except for the constant labels
//! (upstream version and commit), captured once at construction. A server
//! restart with a different version requires reconstructing the collector.
//! `collect` takes `&self` and mutates nothing, so concurrent scrapes need
//! no locking.

pub mod descriptors;
pub mod labels;
mod sample;

use reqwest::Url;
use tracing::{error, info, warn};

use crate::Result;
use crate::client::DeepDetectClient;

use descriptors::{AVAILABILITY_HELP, AVAILABILITY_NAME, DESCRIPTORS};

pub use descriptors::{MetricDescriptor, MetricKind};
pub use sample::{ConstLabels, Sample, SampleSet, SampleValue};

/// Scrape-time collector for one DeepDetect instance.
#[derive(Debug, Clone)]
pub struct DeepDetectCollector {
    client: DeepDetectClient,
    const_labels: ConstLabels,
}

impl DeepDetectCollector {
    /// Build a collector for the instance at `endpoint`.
    ///
    /// Performs one `/info` call to capture the version and commit used as
    /// constant labels; a collector cannot exist without a first successful
    /// contact, so any failure here propagates.
    pub async fn connect(endpoint: Url) -> Result<Self> {
        let client = DeepDetectClient::new(endpoint)?;
        let info = client.info().await?;
        info!(
            version = %info.version,
            commit = %info.commit,
            services = info.services.len(),
            "connected to DeepDetect"
        );
        Ok(Self {
            client,
            const_labels: ConstLabels {
                version: info.version,
                commit: info.commit,
            },
        })
    }

    /// Constant labels captured at construction.
    pub fn const_labels(&self) -> &ConstLabels {
        &self.const_labels
    }

    /// Run one scrape.
    ///
    /// On upstream failure the set contains exactly one availability sample
    /// carrying the error; the availability=1.0 success sample is suppressed.
    /// Per-field absences never abort a scrape; they only shrink the set.
    pub async fn collect(&self) -> SampleSet {
        let records = match self.client.all_service_stats().await {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, "scraping DeepDetect failed");
                return SampleSet {
                    const_labels: self.const_labels.clone(),
                    samples: vec![Sample {
                        name: AVAILABILITY_NAME,
                        help: AVAILABILITY_HELP,
                        kind: MetricKind::Gauge,
                        label_values: Vec::new(),
                        value: SampleValue::Invalid(e.to_string()),
                    }],
                };
            }
        };

        let mut samples = Vec::with_capacity(records.len() * DESCRIPTORS.len() + 1);
        for record in &records {
            let label_values = labels::values(record);
            for descriptor in &DESCRIPTORS {
                match (descriptor.read)(record) {
                    Some(raw) => samples.push(Sample {
                        name: descriptor.name,
                        help: descriptor.help,
                        kind: descriptor.kind,
                        label_values: label_values.clone(),
                        value: SampleValue::Finite((descriptor.transform)(raw)),
                    }),
                    None => warn!(
                        metric = descriptor.name,
                        service = %record.name,
                        "expected field absent from DeepDetect response, skipping"
                    ),
                }
            }
        }

        // The scrape itself completed, even if individual fields were absent.
        samples.push(Sample {
            name: AVAILABILITY_NAME,
            help: AVAILABILITY_HELP,
            kind: MetricKind::Gauge,
            label_values: Vec::new(),
            value: SampleValue::Finite(1.0),
        });

        SampleSet {
            const_labels: self.const_labels.clone(),
            samples,
        }
    }
}
