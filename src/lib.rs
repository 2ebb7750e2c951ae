//! EZTravel API client library
//!
//! Provides the cached request layer ([`api`]), typed endpoint clients
//! ([`data`]), runtime configuration ([`config`]) and the CLI definition
//! used by the `eztravel` binary.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
