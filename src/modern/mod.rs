//! JSON API (v1.2.0)
//!
//! Bearer-token client for the newer interface of the service.

mod client;
#[allow(missing_docs)]
mod models;

pub use client::{ModernClient, API_VERSION, MODERN_BASE_URL};
pub use models::{
    Episode, EpisodeSummary, Image, ImageCounts, Language, RatingInfo, Series, SeriesSearchResult,
    TokenResponse, UpdatedSeries,
};

#[cfg(test)]
mod tests;
