//! Single-shot HTTP client
//!
//! Sends exactly one request per call and hands back the raw outcome:
//! - Text or byte bodies depending on the response type
//! - Transport-level classification (status, empty body, embedded 404 page)
//! - Debug logging with secrets redacted from URLs

use crate::error::{Error, Result};
use crate::types::ResponseType;
use bytes::Bytes;
use reqwest::{Client, Method};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Marker the remote service embeds in HTML error pages served with status 200
const NOT_FOUND_MARKER: &str = "404 Not Found";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
    /// Values masked out of logged URLs
    pub redactions: Vec<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("tvdb-client/{}", env!("CARGO_PKG_VERSION")),
            redactions: Vec::new(),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Mask a secret wherever it appears in a logged URL
    pub fn redact(mut self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        if !secret.is_empty() {
            self.config.redactions.push(secret);
        }
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters, sent in insertion order
    pub query: Vec<(String, String)>,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body (JSON)
    pub body: Option<Value>,
    /// Bearer token for the Authorization header
    pub bearer: Option<String>,
    /// How the body must be read
    pub response_type: ResponseType,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new(response_type: ResponseType) -> Self {
        Self {
            response_type,
            ..Default::default()
        }
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Authenticate with a bearer token
    #[must_use]
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }
}

/// Body of a response, read according to the response type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Decoded text body
    Text(String),
    /// Raw bytes (ZIP archives)
    Bytes(Bytes),
}

impl Body {
    /// Whether the body carries no data
    pub fn is_empty(&self) -> bool {
        match self {
            Body::Text(text) => text.is_empty(),
            Body::Bytes(bytes) => bytes.is_empty(),
        }
    }

    /// Body as text, lossily converting raw bytes
    pub fn to_text(&self) -> String {
        match self {
            Body::Text(text) => text.clone(),
            Body::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

/// Outcome of one HTTP exchange that reached the server
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Body,
}

impl RawResponse {
    /// Classify the transport outcome.
    ///
    /// Succeeds only for status 200. Text bodies must be non-empty and must
    /// not carry an embedded "404 Not Found" page. Raw byte bodies always
    /// pass; a truncated archive is reported by the ZIP decoder.
    pub fn ensure_ok(&self) -> Result<()> {
        if self.status != 200 {
            return Err(Error::http_status(self.status, self.body.to_text()));
        }

        match &self.body {
            Body::Bytes(_) => Ok(()),
            Body::Text(text) if text.is_empty() => Err(Error::EmptyBody {
                status: self.status,
            }),
            Body::Text(text) if text.contains(NOT_FOUND_MARKER) => Err(Error::NotFoundPage {
                status: self.status,
            }),
            Body::Text(_) => Ok(()),
        }
    }
}

/// HTTP client issuing one request per call
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Send exactly one request and read its body.
    ///
    /// Only transport failures are returned as errors here; status and body
    /// checks are left to [`RawResponse::ensure_ok`].
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<RawResponse> {
        let full_url = self.build_url(path)?;
        let log_url = self.redacted(&full_url);

        let mut req = self.client.request(method.clone(), full_url.as_str());

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        for (key, value) in &config.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(ref body) = config.body {
            req = req.json(body);
        }

        if let Some(ref token) = config.bearer {
            req = req.bearer_auth(token);
        }

        debug!(
            "Sending {} {} (expecting {})",
            method, log_url, config.response_type
        );

        let response = req.send().await.map_err(|e| {
            warn!("Transport error for {} {}: {}", method, log_url, e);
            e
        })?;

        let status = response.status().as_u16();
        let body = if config.response_type.is_binary() {
            Body::Bytes(response.bytes().await?)
        } else {
            Body::Text(response.text().await?)
        };

        debug!("Received HTTP {} from {}", status, log_url);
        Ok(RawResponse { status, body })
    }

    /// Build full URL from path
    pub(crate) fn build_url(&self, path: &str) -> Result<url::Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(url::Url::parse(path)?);
        }

        let joined = match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                format!("{base}/{path}")
            }
            None => path.to_string(),
        };

        Ok(url::Url::parse(&joined)?)
    }

    /// Mask configured secrets in a URL for logging
    pub(crate) fn redacted(&self, url: &url::Url) -> String {
        self.config
            .redactions
            .iter()
            .fold(url.to_string(), |acc, secret| acc.replace(secret.as_str(), "***"))
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .field("user_agent", &self.config.user_agent)
            .finish_non_exhaustive()
    }
}
