//! HTTP client for the DeepDetect status API.
//!
//! [`DeepDetectClient`] issues the two read-only calls the exporter needs:
//! `GET /info` for the server-wide snapshot and `GET /services/{name}` for a
//! single service's statistics. [`DeepDetectClient::all_service_stats`]
//! chains them: it discovers services from `/info` and fetches each one's
//! record sequentially, in the order `/info` listed them, aborting on the
//! first failure. A scrape either fully succeeds or is flagged unavailable —
//! no partial results.
//!
//! Retry policy does not live here; the startup readiness loop owns it.

mod types;

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{ExporterError, Result};

pub use types::{ModelStats, ServerInfo, ServiceRecord, ServiceStats};

use types::{InfoResponse, ServiceStatsResponse};

/// Fixed bound on every individual upstream HTTP call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for one DeepDetect instance.
///
/// Cheap to clone (shares the underlying connection pool) and safe to use
/// from concurrent scrapes.
#[derive(Debug, Clone)]
pub struct DeepDetectClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl DeepDetectClient {
    /// Create a client for the instance at `endpoint` (scheme + host + port).
    pub fn new(endpoint: Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, endpoint })
    }

    /// The endpoint this client talks to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the server-wide snapshot: version, commit, and hosted services.
    pub async fn info(&self) -> Result<ServerInfo> {
        let response: InfoResponse = self.get_json("info").await?;
        let info = ServerInfo::from(response);
        debug!(version = %info.version, services = info.services.len(), "received /info");
        Ok(info)
    }

    /// Fetch one service's statistics record.
    pub async fn service_stats(&self, name: &str) -> Result<ServiceRecord> {
        let response: ServiceStatsResponse = self.get_json(&format!("services/{name}")).await?;
        Ok(response.body)
    }

    /// Fetch the statistics of every service the instance currently hosts.
    ///
    /// Records come back in `/info` order. The first per-service failure
    /// aborts the whole fetch.
    pub async fn all_service_stats(&self) -> Result<Vec<ServiceRecord>> {
        let info = self.info().await?;
        let mut records = Vec::with_capacity(info.services.len());
        for name in &info.services {
            records.push(self.service_stats(name).await?);
        }
        Ok(records)
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.endpoint
            .join(path)
            .map_err(|e| ExporterError::Endpoint(format!("{}/{path}: {e}", self.endpoint)))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExporterError::UpstreamStatus(status));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
