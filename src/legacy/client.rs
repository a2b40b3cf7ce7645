//! Legacy XML API client
//!
//! Endpoints are path-templated and return XML, or a ZIP archive holding
//! `<language>.xml` for the full series record. The API key doubles as a
//! path segment on most endpoints.

use super::models::{
    Actor, Banner, Episode, FullSeries, Language, Series, SeriesSearchResult, Update,
    UpdateRecords,
};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::normalize::{attach_episodes, ensure_list, ensure_list_field, extract_path};
use crate::pipeline::Pipeline;
use crate::remote_id::RemoteProvider;
use crate::types::{ResponseType, UpdateInterval};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Display;
use tracing::debug;

/// Default base URL of the legacy API
pub const LEGACY_BASE_URL: &str = "http://www.thetvdb.com/api";

/// Client for the legacy XML API
pub struct LegacyClient {
    pipeline: Pipeline,
    token: String,
    language: String,
}

impl LegacyClient {
    /// Create a client with default settings and language `en`
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(token))
    }

    /// Create a client from a full configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http_config = HttpClientConfig::builder()
            .base_url(config.base_url.as_deref().unwrap_or(LEGACY_BASE_URL))
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .redact(&config.api_key)
            .build();

        Ok(Self {
            pipeline: Pipeline::new(HttpClient::with_config(http_config)?),
            token: config.api_key,
            language: config.language,
        })
    }

    /// Language used for subsequent calls
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

    /// Languages available on the service
    pub async fn get_languages(&self) -> Result<Option<Vec<Language>>> {
        let path = format!("/{}/languages.xml", self.token);
        self.fetch(&path, RequestConfig::new(ResponseType::Xml), |doc| {
            ensure_list(extract_path(&doc, "Languages.Language"))
        })
        .await
    }

    /// Current server time as a unix timestamp string
    pub async fn get_time(&self) -> Result<Option<String>> {
        let config = RequestConfig::new(ResponseType::Xml).query("type", "none");
        self.fetch("/Updates.php", config, |doc| extract_path(&doc, "Items.Time"))
            .await
    }

    /// Search series by name
    pub async fn get_series_by_name(&self, name: &str) -> Result<Option<Vec<SeriesSearchResult>>> {
        let config = RequestConfig::new(ResponseType::Xml)
            .query("seriesname", name)
            .query("language", self.language.as_str());
        self.fetch("/GetSeries.php", config, |doc| {
            ensure_list(extract_path(&doc, "Data.Series"))
        })
        .await
    }

    /// Base series record by id
    pub async fn get_series_by_id(&self, id: impl Display) -> Result<Option<Series>> {
        let path = format!("/{}/series/{}/{}.xml", self.token, id, self.language);
        self.fetch(&path, RequestConfig::new(ResponseType::Xml), |doc| {
            extract_path(&doc, "Data.Series")
        })
        .await
    }

    /// Series by an IMDB or zap2it id.
    ///
    /// Fails without a request when no provider recognizes the id.
    pub async fn get_series_by_remote_id(
        &self,
        remote_id: &str,
    ) -> Result<Option<SeriesSearchResult>> {
        let provider = RemoteProvider::classify(remote_id)?;
        debug!("Remote id {} routed to provider {}", remote_id, provider);

        let config = RequestConfig::new(ResponseType::Xml)
            .query(provider.query_key(), remote_id)
            .query("language", self.language.as_str());
        self.fetch("/GetSeriesByRemoteID.php", config, |doc| {
            extract_path(&doc, "Data.Series")
        })
        .await
    }

    /// Full series record with all episodes, fetched as a ZIP archive
    pub async fn get_series_all_by_id(&self, id: impl Display) -> Result<Option<FullSeries>> {
        let path = format!("/{}/series/{}/all/{}.zip", self.token, id, self.language);
        self.fetch(&path, RequestConfig::new(ResponseType::Zip), attach_episodes)
            .await
    }

    /// All episodes of a series
    pub async fn get_episodes_by_id(&self, series_id: impl Display) -> Result<Option<Vec<Episode>>> {
        let path = format!(
            "/api/{}/series/{}/all/{}.xml",
            self.token, series_id, self.language
        );
        self.fetch(&path, RequestConfig::new(ResponseType::Xml), |doc| {
            ensure_list(extract_path(&doc, "Data.Episode"))
        })
        .await
    }

    /// Episode record by id
    pub async fn get_episode_by_id(&self, id: impl Display) -> Result<Option<Episode>> {
        let path = format!("/{}/episodes/{}/{}.xml", self.token, id, self.language);
        self.fetch(&path, RequestConfig::new(ResponseType::Xml), |doc| {
            extract_path(&doc, "Data.Episode")
        })
        .await
    }

    /// Episode of a series that aired on a date (`YYYY-MM-DD`)
    pub async fn get_episode_by_air_date(
        &self,
        series_id: impl Display,
        air_date: &str,
    ) -> Result<Option<Episode>> {
        let config = RequestConfig::new(ResponseType::Xml)
            .query("apikey", self.token.as_str())
            .query("seriesid", series_id.to_string())
            .query("airdate", air_date)
            .query("language", self.language.as_str());
        self.fetch("/GetEpisodeByAirDate.php", config, |doc| {
            extract_path(&doc, "Data.Episode")
        })
        .await
    }

    /// Actors of a series
    pub async fn get_actors(&self, series_id: impl Display) -> Result<Option<Vec<Actor>>> {
        let path = format!("/{}/series/{}/actors.xml", self.token, series_id);
        self.fetch(&path, RequestConfig::new(ResponseType::Xml), |doc| {
            ensure_list(extract_path(&doc, "Actors.Actor"))
        })
        .await
    }

    /// Banners, posters and fanart of a series
    pub async fn get_banners(&self, series_id: impl Display) -> Result<Option<Vec<Banner>>> {
        let path = format!("/{}/series/{}/banners.xml", self.token, series_id);
        self.fetch(&path, RequestConfig::new(ResponseType::Xml), |doc| {
            ensure_list(extract_path(&doc, "Banners.Banner"))
        })
        .await
    }

    /// Series and episode ids updated since a unix timestamp
    pub async fn get_updates(&self, time: i64) -> Result<Option<Update>> {
        let config = RequestConfig::new(ResponseType::Xml)
            .query("type", "all")
            .query("time", time.to_string());
        self.fetch("/Updates.php", config, |doc| {
            extract_path(&doc, "Items").map(|mut items| {
                ensure_list_field(&mut items, "Series");
                ensure_list_field(&mut items, "Episode");
                items
            })
        })
        .await
    }

    /// Everything updated within an interval
    pub async fn get_update_records(&self, interval: UpdateInterval) -> Result<Option<UpdateRecords>> {
        let path = format!("/{}/updates/updates_{}.xml", self.token, interval);
        self.fetch(&path, RequestConfig::new(ResponseType::Xml), |doc| {
            extract_path(&doc, "Data").map(|mut data| {
                ensure_list_field(&mut data, "Series");
                ensure_list_field(&mut data, "Episode");
                ensure_list_field(&mut data, "Banner");
                data
            })
        })
        .await
    }

    async fn fetch<T, F>(&self, path: &str, config: RequestConfig, normalize: F) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        F: FnOnce(Value) -> Option<Value>,
    {
        self.pipeline
            .fetch_as(Method::GET, path, config, &self.language, normalize)
            .await
    }
}

impl std::fmt::Debug for LegacyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegacyClient")
            .field("pipeline", &self.pipeline)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
