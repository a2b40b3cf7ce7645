//! Tests for the JSON client

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCEPT: &str = "application/vnd.thetvdb.v1.2.0";

fn client_for(server: &MockServer) -> ModernClient {
    let config = ClientConfig::builder("APIKEY").base_url(server.uri()).build();
    ModernClient::with_config(config).unwrap()
}

fn authed_client_for(server: &MockServer) -> ModernClient {
    client_for(server).with_token("tok")
}

fn data(value: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": value }))
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_login_stores_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("Accept", ACCEPT))
        .and(body_json(json!({"apikey": "APIKEY"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.token().await, None);

    client.login("APIKEY").await.unwrap();
    assert_eq!(client.token().await.as_deref(), Some("abc"));
}

#[tokio::test]
async fn test_authenticate_uses_configured_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"apikey": "APIKEY"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.authenticate().await.unwrap();
    assert_eq!(client.token().await.as_deref(), Some("abc"));
}

#[tokio::test]
async fn test_login_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"Error": "Not Authorized"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.login("wrong").await.unwrap_err();

    assert!(matches!(
        err,
        Error::Remote { ref message, status: Some(401) } if message == "Not Authorized"
    ));
    assert_eq!(client.token().await, None);
}

#[tokio::test]
async fn test_login_without_token_in_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"other": 1})))
        .mount(&server)
        .await;

    let err = client_for(&server).login("APIKEY").await.unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_refresh_token_replaces_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/refresh"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "fresh"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client_for(&server);
    client.refresh_token().await.unwrap();
    assert_eq!(client.token().await.as_deref(), Some("fresh"));
}

#[tokio::test]
async fn test_token_is_shared_between_clones() {
    let client = ModernClient::new("APIKEY").unwrap();
    let clone = client.clone();

    client.set_token("shared").await;
    assert_eq!(clone.token().await.as_deref(), Some("shared"));
}

#[tokio::test]
async fn test_content_call_without_token_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(data(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).get_series(80379).await.unwrap_err();
    assert!(matches!(err, Error::Auth { .. }));
}

// ============================================================================
// Languages
// ============================================================================

#[tokio::test]
async fn test_get_languages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/languages"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(data(json!([
            {"id": 7, "abbreviation": "en", "name": "English", "englishName": "English"},
            {"id": 14, "abbreviation": "de", "name": "Deutsch", "englishName": "German"}
        ])))
        .mount(&server)
        .await;

    let languages = authed_client_for(&server)
        .get_languages()
        .await
        .unwrap()
        .unwrap();

    assert_eq!(languages.len(), 2);
    assert_eq!(languages[1].english_name.as_deref(), Some("German"));
}

#[tokio::test]
async fn test_get_language() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/languages/7"))
        .respond_with(data(json!({"id": 7, "abbreviation": "en"})))
        .mount(&server)
        .await;

    let language = authed_client_for(&server)
        .get_language(7)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(language.id, Some(7));
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_series_defaults_to_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/series"))
        .and(query_param("name", "The Simpsons"))
        .and(header("Accept-Language", "de"))
        .respond_with(data(json!([
            {"id": 71663, "seriesName": "Die Simpsons", "aliases": ["The Simpsons"]}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let results = authed_client_for(&server)
        .with_language("de")
        .search_series("The Simpsons")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(results[0].id, Some(71663));
    assert_eq!(results[0].aliases, vec!["The Simpsons".to_string()]);
}

#[tokio::test]
async fn test_search_series_by_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/series"))
        .and(query_param("imdbId", "tt0898266"))
        .respond_with(data(json!([{"id": 80379}])))
        .expect(1)
        .mount(&server)
        .await;

    let results = authed_client_for(&server)
        .search_series_by("imdbId", "tt0898266")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn test_search_series_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/series"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"Error": "Resource not found"})),
        )
        .mount(&server)
        .await;

    let err = authed_client_for(&server)
        .search_series("zzzz")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert!(matches!(err, Error::Remote { .. }));
}

#[tokio::test]
async fn test_search_series_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/series/params"))
        .respond_with(data(json!({"params": ["name", "imdbId", "zap2itId"]})))
        .mount(&server)
        .await;

    let params = authed_client_for(&server)
        .search_series_params()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(params, vec!["name", "imdbId", "zap2itId"]);
}

// ============================================================================
// Series and episodes
// ============================================================================

#[tokio::test]
async fn test_get_series() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/80379"))
        .and(header("Accept-Language", "en"))
        .respond_with(data(json!({
            "id": 80379,
            "seriesName": "The Big Bang Theory",
            "genre": ["Comedy"],
            "lastUpdated": 1438374651,
            "siteRating": 8.9,
            "imdbId": "tt0898266",
            "network": null
        })))
        .mount(&server)
        .await;

    let series = authed_client_for(&server)
        .get_series(80379)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(series.series_name.as_deref(), Some("The Big Bang Theory"));
    assert_eq!(series.genre, vec!["Comedy".to_string()]);
    assert_eq!(series.last_updated, Some(1438374651));
    assert_eq!(series.network, None);
}

#[tokio::test]
async fn test_get_series_null_lists_and_unmodelled_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/1"))
        .respond_with(data(json!({
            "id": 1,
            "seriesName": "X",
            "aliases": null,
            "genre": null,
            "slug": "x",
            "networkId": "12"
        })))
        .mount(&server)
        .await;

    let series = authed_client_for(&server)
        .get_series(1)
        .await
        .unwrap()
        .unwrap();

    assert!(series.aliases.is_empty());
    assert!(series.genre.is_empty());
    assert_eq!(series.network_id.as_deref(), Some("12"));
    assert_eq!(series.extra.get("slug"), Some(&json!("x")));
    assert!(!series.extra.contains_key("networkId"));
}

#[tokio::test]
async fn test_get_episode_null_credit_lists() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/episodes/2"))
        .respond_with(data(json!({
            "id": 2,
            "guestStars": null,
            "directors": null,
            "writers": ["Bill Prady"],
            "thumbAuthor": 7
        })))
        .mount(&server)
        .await;

    let episode = authed_client_for(&server)
        .get_episode(2)
        .await
        .unwrap()
        .unwrap();

    assert!(episode.guest_stars.is_empty());
    assert!(episode.directors.is_empty());
    assert_eq!(episode.writers, vec!["Bill Prady".to_string()]);
    assert_eq!(episode.extra.get("thumbAuthor"), Some(&json!(7)));
}

#[tokio::test]
async fn test_get_series_episodes_defaults_to_first_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/80379/episodes"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": {"first": 1, "last": 3, "next": 2, "prev": null},
            "data": [{"id": 1, "airedSeason": 1, "airedEpisodeNumber": 1, "episodeName": "Pilot"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let episodes = authed_client_for(&server)
        .get_series_episodes(80379, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(episodes[0].episode_name.as_deref(), Some("Pilot"));
}

#[tokio::test]
async fn test_get_series_episodes_explicit_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/80379/episodes"))
        .and(query_param("page", "3"))
        .respond_with(data(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let episodes = authed_client_for(&server)
        .get_series_episodes(80379, Some(3))
        .await
        .unwrap();
    assert_eq!(episodes, Some(vec![]));
}

#[tokio::test]
async fn test_get_episode_query_forwards_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/80379/episodes/query"))
        .and(query_param("airedSeason", "2"))
        .and(query_param("airedEpisode", "5"))
        .respond_with(data(json!([{"id": 42, "airedSeason": 2, "airedEpisodeNumber": 5}])))
        .expect(1)
        .mount(&server)
        .await;

    let episodes = authed_client_for(&server)
        .get_episode_query(80379, &[("airedSeason", "2"), ("airedEpisode", "5")])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(episodes[0].aired_episode_number, Some(5));
}

#[tokio::test]
async fn test_params_endpoints_return_raw_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/80379/episodes/query/params"))
        .respond_with(data(json!(["absoluteNumber", "airedSeason"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/series/80379/filter/params"))
        .respond_with(data(json!({"params": ["seriesName", "genre"]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/series/80379/images/query/params"))
        .respond_with(data(json!([{"keyType": "fanart", "resolution": ["1920x1080"]}])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/updated/query/params"))
        .respond_with(data(json!(["fromTime", "toTime"])))
        .mount(&server)
        .await;

    let client = authed_client_for(&server);

    assert_eq!(
        client.get_series_episodes_params(80379).await.unwrap(),
        Some(json!(["absoluteNumber", "airedSeason"]))
    );
    assert_eq!(
        client.get_series_filter_params(80379).await.unwrap(),
        Some(json!({"params": ["seriesName", "genre"]}))
    );
    assert_eq!(
        client.get_series_images_params(80379).await.unwrap(),
        Some(json!([{"keyType": "fanart", "resolution": ["1920x1080"]}]))
    );
    assert_eq!(
        client.get_updates_params().await.unwrap(),
        Some(json!(["fromTime", "toTime"]))
    );
}

#[tokio::test]
async fn test_get_series_episode_summaries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/80379/episodes/summary"))
        .respond_with(data(json!({
            "airedSeasons": ["1", "2", "0"],
            "airedEpisodes": "279",
            "dvdSeasons": null,
            "dvdEpisodes": "0"
        })))
        .mount(&server)
        .await;

    let summary = authed_client_for(&server)
        .get_series_episode_summaries(80379)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(summary.aired_episodes.as_deref(), Some("279"));
    assert!(summary.dvd_seasons.is_empty());
    assert_eq!(summary.aired_seasons.len(), 3);
}

#[tokio::test]
async fn test_get_series_filter_joins_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/80379/filter"))
        .and(query_param("keys", "seriesName,genre"))
        .respond_with(data(json!({"seriesName": "The Big Bang Theory", "genre": ["Comedy"]})))
        .expect(1)
        .mount(&server)
        .await;

    let series = authed_client_for(&server)
        .get_series_filter(80379, &["seriesName", "genre"])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(series.id, None);
    assert_eq!(series.series_name.as_deref(), Some("The Big Bang Theory"));
}

#[tokio::test]
async fn test_get_episode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/episodes/332484"))
        .respond_with(data(json!({
            "id": 332484,
            "episodeName": "Pilot",
            "guestStars": ["Vernee Watson"],
            "directors": ["James Burrows"],
            "writers": ["Chuck Lorre", "Bill Prady"]
        })))
        .mount(&server)
        .await;

    let episode = authed_client_for(&server)
        .get_episode(332484)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(episode.writers.len(), 2);
    assert_eq!(episode.guest_stars, vec!["Vernee Watson".to_string()]);
}

// ============================================================================
// Images and updates
// ============================================================================

#[tokio::test]
async fn test_get_series_images() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/80379/images"))
        .respond_with(data(json!({"fanart": 51, "poster": 20, "season": 34})))
        .mount(&server)
        .await;

    let counts = authed_client_for(&server)
        .get_series_images(80379)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(counts.fanart, Some(51));
    assert_eq!(counts.series, None);
}

#[tokio::test]
async fn test_get_series_images_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/80379/images/query"))
        .and(query_param("keyType", "poster"))
        .respond_with(data(json!([{
            "id": 1,
            "keyType": "poster",
            "fileName": "posters/80379-1.jpg",
            "ratingsInfo": {"average": 7.5, "count": 4}
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let images = authed_client_for(&server)
        .get_series_images_query(80379, &[("keyType", "poster")])
        .await
        .unwrap()
        .unwrap();

    assert_eq!(images[0].file_name.as_deref(), Some("posters/80379-1.jpg"));
    assert_eq!(images[0].ratings_info.as_ref().and_then(|r| r.count), Some(4));
}

#[tokio::test]
async fn test_get_updates_sends_unix_seconds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/updated/query"))
        .and(query_param("fromTime", "1438300000"))
        .and(query_param("toTime", "1438386400"))
        .respond_with(data(json!([{"id": 80379, "lastUpdated": 1438374651}])))
        .expect(1)
        .mount(&server)
        .await;

    let from = Utc.timestamp_opt(1_438_300_000, 0).unwrap();
    let to = Utc.timestamp_opt(1_438_386_400, 0).unwrap();
    let updates = authed_client_for(&server)
        .get_updates(from, Some(to))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updates[0].last_updated, Some(1438374651));
}

#[tokio::test]
async fn test_get_updates_null_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/updated/query"))
        .respond_with(data(serde_json::Value::Null))
        .mount(&server)
        .await;

    let from = Utc.timestamp_opt(1_438_300_000, 0).unwrap();
    let updates = authed_client_for(&server)
        .get_updates(from, None)
        .await
        .unwrap();
    assert!(updates.is_none());
}
