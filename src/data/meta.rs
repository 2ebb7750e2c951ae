//! Service metadata client
//!
//! Typed access to the `/meta` endpoints: component health, uptime, release
//! version and the server-side LLM cache contents. These are read endpoints,
//! so responses are cached with the standard GET TTL.

use crate::api::{ApiClient, RequestOptions, ResponseError};

use super::{CacheRecord, HealthStatus, UptimeInfo, VersionInfo};

/// Client for the `/meta` endpoints
#[derive(Debug, Clone)]
pub struct MetaClient {
    api: ApiClient,
}

impl MetaClient {
    /// Creates a metadata client sharing the given API client
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetches the per-component health report.
    ///
    /// The backend answers 503 when any component is down, which surfaces
    /// here as `ResponseError::Api` carrying the degraded-report body.
    pub async fn health(&self) -> Result<HealthStatus, ResponseError> {
        self.api
            .get("/meta/health", RequestOptions::new())
            .await
            .into_json()
    }

    /// Fetches server and language-model uptime
    pub async fn uptime(&self) -> Result<UptimeInfo, ResponseError> {
        self.api
            .get("/meta/uptime", RequestOptions::new())
            .await
            .into_json()
    }

    /// Fetches release and model version information
    pub async fn version(&self) -> Result<VersionInfo, ResponseError> {
        self.api
            .get("/meta/version", RequestOptions::new())
            .await
            .into_json()
    }

    /// Lists the server-side LLM cache rows, newest first
    pub async fn cache_records(&self) -> Result<Vec<CacheRecord>, ResponseError> {
        self.api
            .get("/meta/cache", RequestOptions::new())
            .await
            .into_json()
    }
}
