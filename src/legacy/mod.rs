//! Legacy XML API
//!
//! Client and record types for the original, path-templated XML interface.

mod client;
#[allow(missing_docs)]
mod models;

pub use client::{LegacyClient, LEGACY_BASE_URL};
pub use models::{
    Actor, Banner, BannerUpdate, Episode, EpisodeUpdate, FullSeries, Language, Series,
    SeriesSearchResult, SeriesUpdate, Update, UpdateRecords,
};
