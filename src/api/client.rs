//! EZTravel API request executor
//!
//! Wraps raw HTTP calls with endpoint resolution, short-lived response
//! caching and uniform error translation. Every call path returns the
//! normalized [`ApiResponse`] envelope; errors never cross this boundary as
//! `Err`, so callers branch on "error is present" rather than on error kind.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::ApiConfig;

use super::cache::{cache_key, ResponseCache};
use super::url::resolve;

/// Connect-phase timeout for API calls
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Read-phase timeout for API calls
const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Cache TTL applied by [`ApiClient::get`]
pub const GET_TTL: Duration = Duration::from_secs(60);

/// Cache TTL applied by [`ApiClient::post`] and [`ApiClient::put`]
pub const MUTATION_TTL: Duration = Duration::from_secs(120);

/// Response payload: parsed JSON or the raw body text
///
/// Bodies that fail JSON parsing degrade to `Text` instead of erroring, and
/// callers pattern-match explicitly rather than probing an untyped blob.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Body parsed as JSON
    Json(Value),
    /// Body passed through as raw text
    Text(String),
}

impl Payload {
    /// Returns the JSON value when the body parsed as JSON
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    /// Returns the raw text when the body did not parse as JSON
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Json(_) => None,
            Payload::Text(text) => Some(text),
        }
    }
}

/// Normalized response envelope returned by every request path
///
/// Exactly one of `data` and `error` is populated. `status` is `None` only
/// when the failure happened below HTTP (DNS, refused connection, timeout).
/// `cached` is true only when the value came from the response cache rather
/// than a live network call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    /// Response payload on success
    pub data: Option<Payload>,
    /// Human-readable error message on failure
    pub error: Option<String>,
    /// HTTP status code, when a response was received
    pub status: Option<u16>,
    /// Whether the value was served from the response cache
    pub cached: bool,
}

impl ApiResponse {
    fn success(data: Payload, status: u16) -> Self {
        Self {
            data: Some(data),
            error: None,
            status: Some(status),
            cached: false,
        }
    }

    fn failure(error: String, status: Option<u16>) -> Self {
        Self {
            data: None,
            error: Some(error),
            status,
            cached: false,
        }
    }

    /// True when the call produced data rather than an error
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Converts the envelope into typed data.
    ///
    /// Fails when the envelope carries an error, when the payload is raw
    /// text, or when the JSON does not match `T`.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ResponseError> {
        if let Some(message) = self.error {
            return Err(ResponseError::Api {
                message,
                status: self.status,
            });
        }
        match self.data {
            Some(Payload::Json(value)) => Ok(serde_json::from_value(value)?),
            Some(Payload::Text(_)) | None => Err(ResponseError::NotJson),
        }
    }
}

/// Errors surfaced when converting an [`ApiResponse`] into typed data
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The API call failed; carries the envelope's error message
    #[error("{message}")]
    Api {
        message: String,
        status: Option<u16>,
    },

    /// The payload was JSON but did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The payload was raw text where JSON was expected
    #[error("expected a JSON response body")]
    NotJson,
}

/// Per-request options for [`ApiClient::request`]
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Query parameters, keyed and sorted for cache-key determinism
    pub params: Option<BTreeMap<String, String>>,
    /// JSON request body
    pub body: Option<Value>,
    /// Additional request headers
    pub headers: Vec<(String, String)>,
    /// HTTP Basic credentials as (username, password); never part of the
    /// cache key
    pub auth: Option<(String, String)>,
}

impl RequestOptions {
    /// Creates empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the query parameters
    pub fn with_params(mut self, params: BTreeMap<String, String>) -> Self {
        self.params = Some(params);
        self
    }

    /// Adds a single query parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the JSON request body
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets HTTP Basic credentials
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.auth = Some((username.into(), password.into()));
        self
    }
}

/// Client for the EZTravel API
///
/// Owns the HTTP connection pool, the injected configuration and the
/// response cache. Cloning shares all three, so clones observe one cache.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    cache: ResponseCache,
}

impl ApiClient {
    /// Creates a client with the standard timeouts and a fresh cache
    pub fn new(config: ApiConfig) -> Self {
        Self::with_cache(config, ResponseCache::new())
    }

    /// Creates a client sharing an existing cache instance
    pub fn with_cache(config: ApiConfig, cache: ResponseCache) -> Self {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(READ_TIMEOUT)
            .build()
            .expect("failed to construct HTTP client");

        Self {
            http,
            config,
            cache,
        }
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET with the standard read-endpoint TTL (60s)
    pub async fn get(&self, endpoint: &str, options: RequestOptions) -> ApiResponse {
        self.request(Method::GET, endpoint, options, GET_TTL).await
    }

    /// POST with the mutation TTL (120s).
    ///
    /// Mutations do not invalidate existing GET entries; stale reads inside
    /// the TTL window are an accepted trade-off.
    pub async fn post(&self, endpoint: &str, options: RequestOptions) -> ApiResponse {
        self.request(Method::POST, endpoint, options, MUTATION_TTL)
            .await
    }

    /// PUT with the mutation TTL (120s)
    pub async fn put(&self, endpoint: &str, options: RequestOptions) -> ApiResponse {
        self.request(Method::PUT, endpoint, options, MUTATION_TTL)
            .await
    }

    /// DELETE, never cached
    pub async fn delete(&self, endpoint: &str, options: RequestOptions) -> ApiResponse {
        self.request(Method::DELETE, endpoint, options, Duration::ZERO)
            .await
    }

    /// Performs a request and normalizes the outcome into an [`ApiResponse`].
    ///
    /// With a non-zero `ttl` (and debug mode off) the cache is consulted
    /// first and a successful response is stored before returning. Error
    /// responses are never cached.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
        ttl: Duration,
    ) -> ApiResponse {
        let url = resolve(&self.config.base_url, &self.config.api_version, endpoint);

        let use_cache = !ttl.is_zero() && !self.config.debug;
        let key = use_cache
            .then(|| cache_key(method.as_str(), &url, options.params.as_ref(), options.body.as_ref()));

        if let Some(key) = key.as_deref() {
            if let Some(mut hit) = self.cache.get(key) {
                hit.cached = true;
                debug!(%method, %url, "serving response from cache");
                return hit;
            }
        }

        let mut builder = self.http.request(method.clone(), &url);
        if let Some(ref params) = options.params {
            builder = builder.query(params);
        }
        if let Some(ref body) = options.body {
            builder = builder.json(body);
        }
        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some((ref username, ref password)) = options.auth {
            builder = builder.basic_auth(username, Some(password));
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                if self.config.debug {
                    error!(%method, %url, error = %err, "transport failure");
                }
                return ApiResponse::failure(err.to_string(), None);
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                if self.config.debug {
                    error!(%method, %url, error = %err, "failed to read response body");
                }
                return ApiResponse::failure(err.to_string(), None);
            }
        };

        if !status.is_success() {
            if self.config.debug {
                error!(%method, %url, status = status.as_u16(), body = %text, "request failed");
            }
            return ApiResponse::failure(
                format!("HTTP {}: {}", status.as_u16(), text),
                Some(status.as_u16()),
            );
        }

        let payload = match serde_json::from_str::<Value>(&text) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Text(text),
        };
        let result = ApiResponse::success(payload, status.as_u16());

        if let Some(key) = key.as_deref() {
            self.cache.set(key, result.clone(), ttl);
        }

        result
    }
}
