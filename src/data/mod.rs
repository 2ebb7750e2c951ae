//! Typed models and endpoint clients for the EZTravel API
//!
//! This module contains the response models shared across the crate and one
//! submodule per API area, mirroring the backend's route layout. Each client
//! wraps [`crate::api::ApiClient`] with typed calls.

pub mod itineraries;
pub mod meta;
pub mod users;

pub use itineraries::ItineraryClient;
pub use meta::MetaClient;
pub use users::UserClient;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Service health report from `GET /meta/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// "ok" when every component is healthy, "degraded" otherwise
    pub overall_status: String,
    /// Per-component health flags (api, db, llm)
    pub components: BTreeMap<String, bool>,
    /// Error messages for failing components, absent when all are healthy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
    /// When the report was generated
    pub timestamp: DateTime<Utc>,
}

impl HealthStatus {
    /// True when every component reported healthy
    pub fn is_healthy(&self) -> bool {
        self.components.values().all(|&up| up)
    }
}

/// Uptime report from `GET /meta/uptime`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UptimeInfo {
    /// Server uptime in "{h}h {m}m {s}s" form
    pub server_uptime: String,
    /// Language-model uptime in the same form, or "unknown"
    pub llm_uptime: String,
    /// Error detail when the model uptime could not be determined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_errors: Option<String>,
    /// When the report was generated
    pub timestamp: DateTime<Utc>,
}

/// Release and model information from `GET /meta/version`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Language-model status block
    pub llm: LlmInfo,
    /// Release fields the backend spreads into the response (name, version,
    /// build metadata)
    #[serde(flatten)]
    pub release: BTreeMap<String, Value>,
}

/// Language-model status inside [`VersionInfo`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmInfo {
    /// Model identifier, or "Unknown" when unavailable
    pub model: String,
    /// "loaded" or "unavailable"
    pub status: String,
    /// Provider-reported model details when loaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Error message when unavailable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A server-side LLM cache row from `GET /meta/cache`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Prompt text the response was generated for
    pub prompt: String,
    /// Cached model response
    pub response: String,
    /// Row timestamp as stored by the backend
    pub timestamp: String,
}

/// A stored itinerary row from `GET /itineraries`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    /// Row id
    pub id: i64,
    /// Owning user id
    pub user_id: i64,
    /// Trip title
    pub title: String,
    /// Destination
    pub location: String,
    /// Trip length in days
    pub days: i64,
    /// Itinerary document; the backend stores it as a JSON-encoded string
    pub data: Value,
    /// Row creation timestamp as stored by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Itinerary {
    /// The itinerary document, decoding the backend's JSON-encoded string
    /// form when necessary
    pub fn document(&self) -> Value {
        match &self.data {
            Value::String(raw) => serde_json::from_str(raw).unwrap_or_else(|_| self.data.clone()),
            other => other.clone(),
        }
    }
}

/// Payload for `POST /itineraries`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItinerary {
    /// Owning user id
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Trip title
    pub title: String,
    /// Destination
    pub location: String,
    /// Trip length in days
    pub days: i64,
    /// Itinerary document
    pub data: Value,
}

/// Acknowledgement for `POST /itineraries`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertReceipt {
    /// Row id of the inserted itinerary
    pub inserted: i64,
}

/// Acknowledgement for `DELETE /itineraries/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteReceipt {
    pub deleted: bool,
}

/// Acknowledgement for `PUT /users/reset-password`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetReceipt {
    pub success: bool,
}
