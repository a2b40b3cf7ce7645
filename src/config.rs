//! Client configuration
//!
//! Both API dialects are configured from a [`ClientConfig`]. It can be built
//! in code, deserialized, or read from the environment.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "TVDB_API_KEY";
/// Environment variable holding the preferred language
pub const ENV_LANGUAGE: &str = "TVDB_LANGUAGE";
/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "TVDB_BASE_URL";

/// Language used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Configuration shared by the legacy and JSON clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key (legacy dialect: also the path token)
    pub api_key: String,

    /// Preferred language (ISO-639-1)
    #[serde(default = "default_language")]
    pub language: String,

    /// Override for the dialect's base URL
    #[serde(default)]
    pub base_url: Option<String>,

    /// Transport timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("tvdb-client/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a config with default settings for the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            language: default_language(),
            base_url: None,
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }

    /// Create a new config builder
    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(api_key),
        }
    }

    /// Read configuration from `TVDB_API_KEY`, `TVDB_LANGUAGE` and `TVDB_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(ENV_API_KEY)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::missing_field(ENV_API_KEY))?;

        let mut config = Self::new(api_key);
        if let Some(language) = lookup(ENV_LANGUAGE).filter(|v| !v.is_empty()) {
            config.language = language;
        }
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            config.base_url = Some(base_url);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for obviously unusable values
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        if self.language.trim().is_empty() {
            return Err(Error::missing_field("language"));
        }
        if let Some(base_url) = &self.base_url {
            url::Url::parse(base_url)?;
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Transport timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the preferred language
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Override the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the transport timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_secs = timeout.as_secs().max(1);
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
