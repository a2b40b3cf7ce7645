//! Record types of the legacy XML API
//!
//! Field names serialize exactly as the remote service names them. Every
//! field is optional because empty XML elements decode to `null`. Elements
//! without a typed counterpart are kept in `extra`.

use crate::normalize::parse_pipe_list;
use crate::types::JsonObject;
use serde::{Deserialize, Serialize};

/// Split an optional pipe list, dropping empty entries
fn pipe_values(field: Option<&String>) -> Vec<String> {
    field
        .map(|list| {
            parse_pipe_list(list)
                .into_iter()
                .filter(|v| !v.trim().is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Language usable with the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub id: Option<String>,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Series entry returned by name and remote-id searches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesSearchResult {
    pub seriesid: Option<String>,
    /// Deprecated duplicate of `seriesid`
    pub id: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "SeriesName")]
    pub series_name: Option<String>,
    /// Pipe-delimited alternative names
    #[serde(rename = "AliasNames")]
    pub alias_names: Option<String>,
    pub banner: Option<String>,
    #[serde(rename = "Overview")]
    pub overview: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(rename = "FirstAired")]
    pub first_aired: Option<String>,
    #[serde(rename = "Network")]
    pub network: Option<String>,
    #[serde(rename = "IMDB_ID")]
    pub imdb_id: Option<String>,
    pub zap2it_id: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl SeriesSearchResult {
    /// Alias names as a list
    pub fn alias_name_list(&self) -> Vec<String> {
        pipe_values(self.alias_names.as_ref())
    }
}

/// Base series record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Series {
    pub id: Option<String>,
    /// Pipe-delimited actor names
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Airs_DayOfWeek")]
    pub airs_day_of_week: Option<String>,
    /// `HH:MM AM/PM`
    #[serde(rename = "Airs_Time")]
    pub airs_time: Option<String>,
    #[serde(rename = "ContentRating")]
    pub content_rating: Option<String>,
    #[serde(rename = "FirstAired")]
    pub first_aired: Option<String>,
    /// Pipe-delimited genres
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "IMDB_ID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "Network")]
    pub network: Option<String>,
    #[serde(rename = "NetworkID")]
    pub network_id: Option<String>,
    #[serde(rename = "Overview")]
    pub overview: Option<String>,
    #[serde(rename = "Rating")]
    pub rating: Option<String>,
    #[serde(rename = "RatingCount")]
    pub rating_count: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    /// Deprecated tv.com id
    #[serde(rename = "SeriesID")]
    pub series_id: Option<String>,
    #[serde(rename = "SeriesName")]
    pub series_name: Option<String>,
    /// `Ended` or `Continuing`
    #[serde(rename = "Status")]
    pub status: Option<String>,
    pub added: Option<String>,
    #[serde(rename = "addedBy")]
    pub added_by: Option<String>,
    pub banner: Option<String>,
    pub fanart: Option<String>,
    /// Unix timestamp of the last change
    pub lastupdated: Option<String>,
    pub poster: Option<String>,
    pub zap2it_id: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Series {
    /// Actor names as a list
    pub fn actor_names(&self) -> Vec<String> {
        pipe_values(self.actors.as_ref())
    }

    /// Genres as a list
    pub fn genres(&self) -> Vec<String> {
        pipe_values(self.genre.as_ref())
    }
}

/// Series record together with all of its episodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullSeries {
    #[serde(flatten)]
    pub series: Series,
    #[serde(rename = "Episodes", default)]
    pub episodes: Option<Vec<Episode>>,
}

/// Episode record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Episode {
    pub id: Option<String>,
    #[serde(rename = "Combined_episodenumber")]
    pub combined_episode_number: Option<String>,
    #[serde(rename = "Combined_season")]
    pub combined_season: Option<String>,
    #[serde(rename = "DVD_chapter")]
    pub dvd_chapter: Option<String>,
    #[serde(rename = "DVD_discid")]
    pub dvd_disc_id: Option<String>,
    #[serde(rename = "DVD_episodenumber")]
    pub dvd_episode_number: Option<String>,
    #[serde(rename = "DVD_season")]
    pub dvd_season: Option<String>,
    /// Pipe-delimited directors
    #[serde(rename = "Director")]
    pub director: Option<String>,
    /// Image quality flag, 1 to 6
    #[serde(rename = "EpImgFlag")]
    pub ep_img_flag: Option<String>,
    #[serde(rename = "EpisodeName")]
    pub episode_name: Option<String>,
    #[serde(rename = "EpisodeNumber")]
    pub episode_number: Option<String>,
    #[serde(rename = "FirstAired")]
    pub first_aired: Option<String>,
    /// Pipe-delimited guest stars
    #[serde(rename = "GuestStars")]
    pub guest_stars: Option<String>,
    #[serde(rename = "IMDB_ID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "Overview")]
    pub overview: Option<String>,
    #[serde(rename = "ProductionCode")]
    pub production_code: Option<String>,
    #[serde(rename = "Rating")]
    pub rating: Option<String>,
    #[serde(rename = "RatingCount")]
    pub rating_count: Option<String>,
    #[serde(rename = "SeasonNumber")]
    pub season_number: Option<String>,
    /// Pipe-delimited writers
    #[serde(rename = "Writer")]
    pub writer: Option<String>,
    pub absolute_number: Option<String>,
    pub airsafter_season: Option<String>,
    pub airsbefore_episode: Option<String>,
    pub airsbefore_season: Option<String>,
    pub filename: Option<String>,
    pub lastupdated: Option<String>,
    pub seasonid: Option<String>,
    pub seriesid: Option<String>,
    pub thumb_added: Option<String>,
    pub thumb_height: Option<String>,
    pub thumb_width: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Episode {
    /// Directors as a list
    pub fn directors(&self) -> Vec<String> {
        pipe_values(self.director.as_ref())
    }

    /// Writers as a list
    pub fn writers(&self) -> Vec<String> {
        pipe_values(self.writer.as_ref())
    }

    /// Guest stars as a list
    pub fn guest_star_names(&self) -> Vec<String> {
        pipe_values(self.guest_stars.as_ref())
    }
}

/// Actor of a series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Actor {
    pub id: Option<String>,
    #[serde(rename = "Image")]
    pub image: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Role")]
    pub role: Option<String>,
    #[serde(rename = "SortOrder")]
    pub sort_order: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Artwork attached to a series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Banner {
    pub id: Option<String>,
    #[serde(rename = "BannerPath")]
    pub banner_path: Option<String>,
    /// poster, fanart, series or season
    #[serde(rename = "BannerType")]
    pub banner_type: Option<String>,
    #[serde(rename = "BannerType2")]
    pub banner_type2: Option<String>,
    /// Pipe-delimited RGB triples (fanart only)
    #[serde(rename = "Colors")]
    pub colors: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "Season")]
    pub season: Option<String>,
    #[serde(rename = "Rating")]
    pub rating: Option<String>,
    #[serde(rename = "RatingCount")]
    pub rating_count: Option<String>,
    #[serde(rename = "SeriesName")]
    pub series_name: Option<String>,
    #[serde(rename = "ThumbnailPath")]
    pub thumbnail_path: Option<String>,
    #[serde(rename = "VignettePath")]
    pub vignette_path: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Series and episode ids changed since a timestamp
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Update {
    #[serde(rename = "Time")]
    pub time: Option<String>,
    #[serde(rename = "Series")]
    pub series: Option<Vec<String>>,
    #[serde(rename = "Episode")]
    pub episode: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Series entry of an update record file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesUpdate {
    pub id: Option<String>,
    pub time: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Episode entry of an update record file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeUpdate {
    pub id: Option<String>,
    #[serde(rename = "Series")]
    pub series: Option<String>,
    pub time: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Banner entry of an update record file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerUpdate {
    #[serde(rename = "Series")]
    pub series: Option<String>,
    pub format: Option<String>,
    pub language: Option<String>,
    pub path: Option<String>,
    pub season: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub time: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Everything that changed within an update interval
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateRecords {
    #[serde(rename = "Series")]
    pub series: Option<Vec<SeriesUpdate>>,
    #[serde(rename = "Episode")]
    pub episode: Option<Vec<EpisodeUpdate>>,
    #[serde(rename = "Banner")]
    pub banner: Option<Vec<BannerUpdate>>,
    #[serde(flatten)]
    pub extra: JsonObject,
}
