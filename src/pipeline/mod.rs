//! Request pipeline
//!
//! Every endpoint runs the same steps:
//!
//! ```text
//! dispatch ──► classify ──► normalize ──► map into records
//!   (http)    (transport,     (per        (serde)
//!              decode, remote  endpoint)
//!              Error field)
//! ```
//!
//! [`classify`] is the single place that decides whether a response is a
//! success. Normalizers only ever see documents that passed it.

use crate::decode::decoder_for;
use crate::error::{Error, Result};
use crate::http::{Body, HttpClient, RawResponse, RequestConfig};
use crate::types::ResponseType;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Field the remote service uses to report application errors
pub const REMOTE_ERROR_FIELD: &str = "Error";

/// Dispatches requests and classifies their outcome
#[derive(Debug)]
pub struct Pipeline {
    http: HttpClient,
}

impl Pipeline {
    /// Create a pipeline on top of an HTTP client
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Send one request and return the classified, decoded document.
    ///
    /// `language` is the snapshot taken when the call was dispatched; it
    /// selects the archive entry for ZIP responses.
    pub async fn fetch(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
        language: &str,
    ) -> Result<Value> {
        let response_type = config.response_type;
        let raw = self.http.request(method, path, config).await?;
        classify(raw, response_type, language)
    }

    /// Fetch, normalize and map the result into a record type.
    ///
    /// A normalizer returning `None` means the remote document had no data
    /// for this endpoint.
    pub async fn fetch_as<T, F>(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
        language: &str,
        normalize: F,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        F: FnOnce(Value) -> Option<Value>,
    {
        let document = self.fetch(method, path, config, language).await?;
        normalize(document)
            .map(serde_json::from_value::<T>)
            .transpose()
            .map_err(Error::from)
    }
}

/// Decide whether a raw response is a success and decode it.
///
/// Failures, in order of precedence:
/// 1. Non-200 status, empty body, or an embedded "404 Not Found" page.
///    JSON bodies of non-200 responses are searched for a remote `Error`
///    message first.
/// 2. The body cannot be decoded for its response type.
/// 3. The decoded document carries a root-level `Error` field.
pub fn classify(raw: RawResponse, response_type: ResponseType, language: &str) -> Result<Value> {
    if let Err(err) = raw.ensure_ok() {
        if response_type == ResponseType::Json && raw.status != 200 {
            if let Some(message) = json_error_message(&raw.body) {
                warn!("Remote error (HTTP {}): {}", raw.status, message);
                return Err(Error::remote(message, Some(raw.status)));
            }
        }
        warn!("Request failed: {}", err);
        return Err(err);
    }

    let document = decoder_for(response_type, language)
        .decode(&raw.body)
        .map_err(|e| {
            warn!("Failed to decode {} response: {}", response_type, e);
            e
        })?;

    if let Some(message) = remote_error(&document) {
        warn!("Remote error in HTTP {} response: {}", raw.status, message);
        return Err(Error::remote(message, Some(raw.status)));
    }

    debug!("Decoded {} response", response_type);
    Ok(document)
}

/// Message of a root-level `Error` field, if the document carries one
pub fn remote_error(document: &Value) -> Option<String> {
    match document.get(REMOTE_ERROR_FIELD)? {
        Value::Null => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn json_error_message(body: &Body) -> Option<String> {
    let document: Value = match body {
        Body::Text(text) => serde_json::from_str(text).ok()?,
        Body::Bytes(bytes) => serde_json::from_slice(bytes).ok()?,
    };
    remote_error(&document)
}
