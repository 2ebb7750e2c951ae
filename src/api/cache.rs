//! In-memory response cache with per-entry TTL
//!
//! Stores normalized API responses keyed by a digest of the request shape,
//! so identical requests inside the TTL window are served without a network
//! call. Entries expire purely by time and are evicted lazily on lookup; the
//! store is scoped to the process lifetime and is never persisted.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use super::client::ApiResponse;

/// A cached response together with its expiry time
#[derive(Debug, Clone)]
struct CacheEntry {
    value: ApiResponse,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(value: ApiResponse, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// In-memory store mapping request digests to responses with expiry
///
/// Cloning is cheap; clones share the same underlying map, so a client and
/// its clones observe one cache. A coarse `RwLock` guards concurrent access
/// from in-flight requests. There is no eviction beyond time-based expiry.
#[derive(Debug, Clone, Default)]
pub struct ResponseCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl ResponseCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached response for `key` while it is still valid.
    ///
    /// An expired entry is removed on lookup and treated as absent.
    pub fn get(&self, key: &str) -> Option<ApiResponse> {
        let mut entries = self.entries.write().unwrap();
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    /// Stores `value` under `key` with expiry `ttl` from now, replacing any
    /// existing entry.
    pub fn set(&self, key: &str, value: ApiResponse, ttl: Duration) {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.to_string(), CacheEntry::new(value, ttl));
    }

    /// Number of stored entries, including ones that have expired but not
    /// yet been evicted
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// True when no entries are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derives a deterministic cache key from the request shape.
///
/// The key material is serialized with sorted keys (`BTreeMap` params and
/// `serde_json`'s ordered object maps), so semantically identical requests
/// produce the same digest regardless of field insertion order. The
/// serialization is hashed with SHA-256 and returned as lowercase hex.
pub fn cache_key(
    method: &str,
    url: &str,
    params: Option<&BTreeMap<String, String>>,
    body: Option<&Value>,
) -> String {
    let canonical = json!({
        "method": method,
        "url": url,
        "params": params,
        "body": body,
    });

    let mut hasher = Sha256::new();
    hasher.update(canonical.to_string().as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
