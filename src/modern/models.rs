//! Record types of the JSON API
//!
//! Only the `data` payload of each response is modelled. Every field is
//! optional or defaulted; the service omits or nulls fields freely. Fields
//! without a typed counterpart are kept in `extra`.

use crate::types::JsonObject;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `/login` and `/refresh` responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Language usable with the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
    pub id: Option<i64>,
    pub abbreviation: Option<String>,
    pub name: Option<String>,
    pub english_name: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Series entry returned by `/search/series`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesSearchResult {
    pub id: Option<i64>,
    pub series_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub aliases: Vec<String>,
    pub banner: Option<String>,
    /// `YYYY-MM-DD`
    pub first_aired: Option<String>,
    pub network: Option<String>,
    pub overview: Option<String>,
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Series record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Series {
    pub id: Option<i64>,
    pub series_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub aliases: Vec<String>,
    pub banner: Option<String>,
    /// Deprecated tv.com id
    pub series_id: Option<String>,
    pub status: Option<String>,
    pub first_aired: Option<String>,
    pub network: Option<String>,
    pub network_id: Option<String>,
    pub runtime: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub genre: Vec<String>,
    pub overview: Option<String>,
    /// Unix timestamp of the last change
    pub last_updated: Option<i64>,
    pub airs_day_of_week: Option<String>,
    pub airs_time: Option<String>,
    pub rating: Option<String>,
    pub imdb_id: Option<String>,
    pub zap2it_id: Option<String>,
    pub added: Option<String>,
    pub site_rating: Option<f64>,
    pub site_rating_count: Option<i64>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Episode record, both the paged summary form and the full form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Episode {
    pub id: Option<i64>,
    pub aired_season: Option<i64>,
    pub aired_episode_number: Option<i64>,
    pub absolute_number: Option<i64>,
    pub dvd_season: Option<i64>,
    pub dvd_episode_number: Option<f64>,
    pub episode_name: Option<String>,
    pub first_aired: Option<String>,
    pub overview: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub guest_stars: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub directors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub writers: Vec<String>,
    pub production_code: Option<String>,
    pub imdb_id: Option<String>,
    pub filename: Option<String>,
    pub series_id: Option<i64>,
    pub last_updated: Option<i64>,
    pub site_rating: Option<f64>,
    pub site_rating_count: Option<i64>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Season and episode counts of a series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub aired_seasons: Vec<String>,
    pub aired_episodes: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub dvd_seasons: Vec<String>,
    pub dvd_episodes: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Number of images per image type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageCounts {
    pub fanart: Option<i64>,
    pub poster: Option<i64>,
    pub season: Option<i64>,
    pub seasonwide: Option<i64>,
    pub series: Option<i64>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Average rating and vote count of an image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingInfo {
    pub average: Option<f64>,
    pub count: Option<i64>,
}

/// Artwork attached to a series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Image {
    pub id: Option<i64>,
    /// fanart, poster, season, seasonwide or series
    pub key_type: Option<String>,
    pub sub_key: Option<String>,
    pub file_name: Option<String>,
    pub resolution: Option<String>,
    pub ratings_info: Option<RatingInfo>,
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Series changed within an update window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdatedSeries {
    pub id: Option<i64>,
    pub last_updated: Option<i64>,
    #[serde(flatten)]
    pub extra: JsonObject,
}
