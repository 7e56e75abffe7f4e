//! Search API access
//!
//! `types` holds the wire format, `api` the HTTP client.

pub mod api;
pub mod types;
