//! HTTP client module
//!
//! Issues one request per call and classifies the transport outcome.
//!
//! # Features
//!
//! - **Single-shot requests**: no retries, no backoff
//! - **Binary or text bodies**: ZIP payloads are read as raw bytes
//! - **Transport classification**: non-200 status, empty body and the
//!   "404 Not Found" page the remote service sometimes serves with status 200

mod client;

pub use client::{Body, HttpClient, HttpClientConfig, RawResponse, RequestConfig};
