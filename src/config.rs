//! Runtime configuration for the EZTravel API client
//!
//! Configuration is read once at startup from environment variables and
//! injected explicitly into `ApiClient`, so tests can construct isolated
//! configurations without touching process state.

use std::env;

/// Base URL used when `EZTRAVEL_BASE_URL` is not set
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// API version segment used when `EZTRAVEL_API_VERSION` is not set
const DEFAULT_API_VERSION: &str = "v1";

/// Configuration for the EZTravel API client
///
/// Read-only after construction. `debug` disables response caching and
/// enables request diagnostics on the log channel.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the EZTravel backend
    pub base_url: String,
    /// API version path segment (e.g. "v1")
    pub api_version: String,
    /// Whether to bypass the cache and log request diagnostics
    pub debug: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            debug: false,
        }
    }
}

impl ApiConfig {
    /// Reads configuration from `EZTRAVEL_BASE_URL`, `EZTRAVEL_API_VERSION`
    /// and `EZTRAVEL_DEBUG`, falling back to the defaults for unset
    /// variables.
    pub fn from_env() -> Self {
        let base_url =
            env::var("EZTRAVEL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_version =
            env::var("EZTRAVEL_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());
        let debug = env::var("EZTRAVEL_DEBUG")
            .map(|v| parse_debug(&v))
            .unwrap_or(false);

        Self {
            base_url,
            api_version,
            debug,
        }
    }

    /// Overrides the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the API version segment
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Enables or disables debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Interprets the `EZTRAVEL_DEBUG` variable as a boolean flag
fn parse_debug(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
