//! JSON API client
//!
//! Authenticates with `POST /login` and sends the resulting bearer token on
//! every other request. The token is shared behind an async lock so
//! concurrent calls see a consistent value while a refresh is in flight.

use super::models::{
    Episode, EpisodeSummary, Image, ImageCounts, Language, Series, SeriesSearchResult,
    TokenResponse, UpdatedSeries,
};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::normalize::extract_path;
use crate::pipeline::Pipeline;
use crate::types::{JsonValue, ResponseType};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Default base URL of the JSON API
pub const MODERN_BASE_URL: &str = "https://api-dev.thetvdb.com";

/// Version negotiated through the `Accept` header
pub const API_VERSION: &str = "1.2.0";

/// Search key used by [`ModernClient::search_series`]
const DEFAULT_SEARCH_KEY: &str = "name";

/// Client for the JSON API
#[derive(Clone)]
pub struct ModernClient {
    pipeline: Arc<Pipeline>,
    api_key: String,
    token: Arc<RwLock<Option<String>>>,
    language: String,
}

impl ModernClient {
    /// Create a client with default settings and language `en`
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client from a full configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http_config = HttpClientConfig::builder()
            .base_url(config.base_url.as_deref().unwrap_or(MODERN_BASE_URL))
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .header("Accept", format!("application/vnd.thetvdb.v{API_VERSION}"))
            .build();

        Ok(Self {
            pipeline: Arc::new(Pipeline::new(HttpClient::with_config(http_config)?)),
            api_key: config.api_key,
            token: Arc::new(RwLock::new(None)),
            language: config.language,
        })
    }

    /// Start with an already issued token instead of logging in
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Arc::new(RwLock::new(Some(token.into())));
        self
    }

    /// Language sent as `Accept-Language` on content requests
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Change the language used for subsequent calls
    pub fn set_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.language = language.into();
        self
    }

    /// Builder-style variant of [`set_language`](Self::set_language)
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Current bearer token, if any
    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Replace the bearer token
    pub async fn set_token(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Exchange an API key for a bearer token and store it
    pub async fn login(&self, api_key: &str) -> Result<()> {
        let config = RequestConfig::new(ResponseType::Json).json(json!({ "apikey": api_key }));
        let response: Option<TokenResponse> = self
            .pipeline
            .fetch_as(Method::POST, "/login", config, &self.language, Some)
            .await?;

        self.store_token(response, "login").await
    }

    /// Log in with the API key the client was configured with
    pub async fn authenticate(&self) -> Result<()> {
        self.login(&self.api_key).await
    }

    /// Trade the current token for a fresh one
    pub async fn refresh_token(&self) -> Result<()> {
        let config = RequestConfig::new(ResponseType::Json).bearer(self.bearer().await?);
        let response: Option<TokenResponse> = self
            .pipeline
            .fetch_as(Method::GET, "/refresh", config, &self.language, Some)
            .await?;

        self.store_token(response, "refresh").await
    }

    async fn store_token(&self, response: Option<TokenResponse>, action: &str) -> Result<()> {
        let response =
            response.ok_or_else(|| Error::auth(format!("{action} response carried no token")))?;
        *self.token.write().await = Some(response.token);
        info!("Token {} succeeded", action);
        Ok(())
    }

    async fn bearer(&self) -> Result<String> {
        self.token
            .read()
            .await
            .clone()
            .ok_or_else(|| Error::auth("no token set, log in first"))
    }

    // ========================================================================
    // Languages
    // ========================================================================

    /// Languages available on the service
    pub async fn get_languages(&self) -> Result<Option<Vec<Language>>> {
        let config = self.authorized().await?;
        self.data("/languages", config).await
    }

    /// Single language by id
    pub async fn get_language(&self, id: impl Display) -> Result<Option<Language>> {
        let config = self.authorized().await?;
        self.data(&format!("/languages/{id}"), config).await
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Search series by name
    pub async fn search_series(&self, name: &str) -> Result<Option<Vec<SeriesSearchResult>>> {
        self.search_series_by(DEFAULT_SEARCH_KEY, name).await
    }

    /// Search series by any supported key (`name`, `imdbId`, `zap2itId`)
    pub async fn search_series_by(
        &self,
        key: &str,
        value: &str,
    ) -> Result<Option<Vec<SeriesSearchResult>>> {
        let config = self.content().await?.query(key, value);
        self.data("/search/series", config).await
    }

    /// Keys accepted by [`search_series_by`](Self::search_series_by)
    pub async fn search_series_params(&self) -> Result<Option<Vec<String>>> {
        let config = self.content().await?;
        self.fetch("/search/series/params", config, "data.params")
            .await
    }

    // ========================================================================
    // Series
    // ========================================================================

    /// Series record by id
    pub async fn get_series(&self, id: impl Display) -> Result<Option<Series>> {
        let config = self.content().await?;
        self.data(&format!("/series/{id}"), config).await
    }

    /// One page of a series' episodes, starting at page 1
    pub async fn get_series_episodes(
        &self,
        id: impl Display,
        page: Option<u32>,
    ) -> Result<Option<Vec<Episode>>> {
        let page = page.unwrap_or(1);
        debug!("Fetching episode page {} of series {}", page, id);

        let config = self.content().await?.query("page", page.to_string());
        self.data(&format!("/series/{id}/episodes"), config).await
    }

    /// Episodes of a series matching query parameters
    pub async fn get_episode_query(
        &self,
        id: impl Display,
        params: &[(&str, &str)],
    ) -> Result<Option<Vec<Episode>>> {
        let config = with_params(self.content().await?, params);
        self.data(&format!("/series/{id}/episodes/query"), config)
            .await
    }

    /// Parameters accepted by [`get_episode_query`](Self::get_episode_query)
    pub async fn get_series_episodes_params(&self, id: impl Display) -> Result<Option<JsonValue>> {
        let config = self.content().await?;
        self.data(&format!("/series/{id}/episodes/query/params"), config)
            .await
    }

    /// Season and episode counts of a series
    pub async fn get_series_episode_summaries(
        &self,
        id: impl Display,
    ) -> Result<Option<EpisodeSummary>> {
        let config = self.content().await?;
        self.data(&format!("/series/{id}/episodes/summary"), config)
            .await
    }

    /// Series record restricted to the given keys
    pub async fn get_series_filter(
        &self,
        id: impl Display,
        keys: &[&str],
    ) -> Result<Option<Series>> {
        let config = self.content().await?.query("keys", keys.join(","));
        self.data(&format!("/series/{id}/filter"), config).await
    }

    /// Keys accepted by [`get_series_filter`](Self::get_series_filter)
    pub async fn get_series_filter_params(&self, id: impl Display) -> Result<Option<JsonValue>> {
        let config = self.content().await?;
        self.data(&format!("/series/{id}/filter/params"), config)
            .await
    }

    // ========================================================================
    // Episodes
    // ========================================================================

    /// Episode record by id
    pub async fn get_episode(&self, id: impl Display) -> Result<Option<Episode>> {
        let config = self.content().await?;
        self.data(&format!("/episodes/{id}"), config).await
    }

    // ========================================================================
    // Images
    // ========================================================================

    /// Image counts of a series per image type
    pub async fn get_series_images(&self, id: impl Display) -> Result<Option<ImageCounts>> {
        let config = self.content().await?;
        self.data(&format!("/series/{id}/images"), config).await
    }

    /// Images of a series matching query parameters
    pub async fn get_series_images_query(
        &self,
        id: impl Display,
        params: &[(&str, &str)],
    ) -> Result<Option<Vec<Image>>> {
        let config = with_params(self.content().await?, params);
        self.data(&format!("/series/{id}/images/query"), config)
            .await
    }

    /// Parameters accepted by [`get_series_images_query`](Self::get_series_images_query)
    pub async fn get_series_images_params(&self, id: impl Display) -> Result<Option<JsonValue>> {
        let config = self.content().await?;
        self.data(&format!("/series/{id}/images/query/params"), config)
            .await
    }

    // ========================================================================
    // Updates
    // ========================================================================

    /// Series updated between two instants. `to` defaults to one week after `from`
    /// on the service side.
    pub async fn get_updates(
        &self,
        from: DateTime<Utc>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Option<Vec<UpdatedSeries>>> {
        let mut config = self
            .content()
            .await?
            .query("fromTime", from.timestamp().to_string());
        if let Some(to) = to {
            config = config.query("toTime", to.timestamp().to_string());
        }
        self.data("/updated/query", config).await
    }

    /// Parameters accepted by [`get_updates`](Self::get_updates)
    pub async fn get_updates_params(&self) -> Result<Option<JsonValue>> {
        let config = self.content().await?;
        self.data("/updated/query/params", config).await
    }

    // ========================================================================
    // Request helpers
    // ========================================================================

    async fn authorized(&self) -> Result<RequestConfig> {
        Ok(RequestConfig::new(ResponseType::Json).bearer(self.bearer().await?))
    }

    async fn content(&self) -> Result<RequestConfig> {
        Ok(self
            .authorized()
            .await?
            .header("Accept-Language", self.language.as_str()))
    }

    async fn data<T: DeserializeOwned>(&self, path: &str, config: RequestConfig) -> Result<Option<T>> {
        self.fetch(path, config, "data").await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        config: RequestConfig,
        field: &str,
    ) -> Result<Option<T>> {
        self.pipeline
            .fetch_as(Method::GET, path, config, &self.language, |doc| {
                extract_path(&doc, field)
            })
            .await
    }
}

impl std::fmt::Debug for ModernClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModernClient")
            .field("pipeline", &self.pipeline)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

fn with_params(config: RequestConfig, params: &[(&str, &str)]) -> RequestConfig {
    params
        .iter()
        .fold(config, |config, (key, value)| config.query(*key, *value))
}
