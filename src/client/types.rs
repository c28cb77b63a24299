//! Wire and domain types for the DeepDetect status API.
//!
//! The wire shapes (`InfoResponse`, `ServiceStatsResponse`) mirror the JSON
//! envelopes DeepDetect sends and stay private to the client; the domain
//! types ([`ServerInfo`], [`ServiceRecord`]) are what the rest of the crate
//! consumes.
//!
//! Every numeric statistic is an `Option`: DeepDetect omits fields it has no
//! data for, and an absent field must never be conflated with a present zero.

use serde::Deserialize;

// ============================================================================
// /info
// ============================================================================

/// `/info` envelope: `{head: {version, commit, services: [{name}]}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct InfoResponse {
    pub head: InfoHead,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InfoHead {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub commit: String,
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServiceEntry {
    pub name: String,
}

/// Server-wide snapshot from one `/info` call.
///
/// `services` preserves the response's ordering; per-service fetches and
/// sample emission follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    pub version: String,
    pub commit: String,
    pub services: Vec<String>,
}

impl From<InfoResponse> for ServerInfo {
    fn from(response: InfoResponse) -> Self {
        Self {
            version: response.head.version,
            commit: response.head.commit,
            services: response.head.services.into_iter().map(|s| s.name).collect(),
        }
    }
}

// ============================================================================
// /services/{name}
// ============================================================================

/// `/services/{name}` envelope: `{body: {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ServiceStatsResponse {
    pub body: ServiceRecord,
}

/// One service's full statistics snapshot.
///
/// The metadata fields are label sources and default to empty when missing;
/// the numeric fields under [`ServiceStats`] and [`ModelStats`] are all
/// independently optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServiceRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub repository: String,
    #[serde(rename = "type", default)]
    pub service_type: String,
    #[serde(rename = "mllib", default)]
    pub ml_type: String,
    #[serde(default)]
    pub predict: bool,
    #[serde(default)]
    pub service_stats: ServiceStats,
    #[serde(default)]
    pub stats: ModelStats,
}

/// Request counters and duration accumulators from `body.service_stats`.
///
/// Durations are milliseconds at the source; the descriptor table converts
/// them to seconds on export.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServiceStats {
    pub predict_success: Option<u64>,
    pub inference_count: Option<u64>,
    pub predict_failure: Option<u64>,
    pub total_predict_duration_ms: Option<f64>,
    pub predict_count: Option<u64>,
    pub total_transform_duration_ms: Option<f64>,
    pub avg_batch_size: Option<f64>,
}

/// Model-level gauges from `body.stats`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModelStats {
    pub data_mem_test: Option<u64>,
    pub data_mem_train: Option<u64>,
    pub flops: Option<u64>,
    pub params: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_deserialize_to_none() {
        let record: ServiceRecord =
            serde_json::from_str(r#"{"name": "svc1", "predict": true}"#).unwrap();
        assert_eq!(record.name, "svc1");
        assert!(record.predict);
        assert_eq!(record.service_stats.predict_success, None);
        assert_eq!(record.stats.flops, None);
    }

    #[test]
    fn present_zero_is_not_absent() {
        let record: ServiceRecord = serde_json::from_str(
            r#"{"name": "svc1", "service_stats": {"predict_failure": 0}}"#,
        )
        .unwrap();
        assert_eq!(record.service_stats.predict_failure, Some(0));
        assert_eq!(record.service_stats.predict_success, None);
    }

    #[test]
    fn mllib_maps_to_ml_type() {
        let record: ServiceRecord =
            serde_json::from_str(r#"{"name": "svc1", "mllib": "caffe"}"#).unwrap();
        assert_eq!(record.ml_type, "caffe");
    }

    #[test]
    fn info_response_flattens_service_names_in_order() {
        let response: InfoResponse = serde_json::from_str(
            r#"{"head": {"version": "0.9", "commit": "abc", "services": [{"name": "b"}, {"name": "a"}]}}"#,
        )
        .unwrap();
        let info = ServerInfo::from(response);
        assert_eq!(info.version, "0.9");
        assert_eq!(info.services, vec!["b", "a"]);
    }
}
