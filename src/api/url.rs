//! Endpoint URL resolution
//!
//! Joins the configured base URL, API version segment and endpoint path into
//! an absolute URL. Resolution is a pure function of its inputs; the request
//! cache relies on that for key determinism.

/// Joins `base_url`, `api_version` and `endpoint` into an absolute URL.
///
/// Trailing slashes on `base_url`, surrounding slashes on `api_version` and
/// leading slashes on `endpoint` are stripped, so every input combination
/// yields exactly one `/` between segments.
pub fn resolve(base_url: &str, api_version: &str, endpoint: &str) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        api_version.trim_matches('/'),
        endpoint.trim_start_matches('/')
    )
}
