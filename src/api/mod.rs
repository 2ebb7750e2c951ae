//! Cached access layer for the EZTravel API
//!
//! Turns a logical `(method, endpoint, params, body)` call into a normalized
//! [`ApiResponse`], optionally served from an in-memory TTL cache. This is
//! the only module that talks to the network; the typed endpoint clients in
//! [`crate::data`] are thin wrappers over it.

mod cache;
mod client;
mod url;

pub use cache::{cache_key, ResponseCache};
pub use client::{
    ApiClient, ApiResponse, Payload, RequestOptions, ResponseError, GET_TTL, MUTATION_TTL,
};
pub use url::resolve;
