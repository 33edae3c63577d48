//! End-to-end tests for dataset endpoints
//!
//! Tests dataset listing, per-dataset access and the play count ranking.

mod common;

use common::{
    TestClient, TestServer, CHART_COUNT, DATASET_COUNT, TEST_CACHE_AGE_SEC, TOP_ARTIST_NAME,
    TOP_CHART_NAME, TOP_CHART_PLAY_COUNT, TOP_PLAY_COUNT_DISPLAY,
};
use reqwest::StatusCode;

// =============================================================================
// Listing Tests
// =============================================================================

#[tokio::test]
async fn test_list_datasets_returns_every_slug() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.list_datasets().await;
    assert_eq!(response.status(), StatusCode::OK);

    let summaries: serde_json::Value = response.json().await.unwrap();
    let summaries = summaries.as_array().unwrap();
    assert_eq!(summaries.len(), DATASET_COUNT);

    for summary in summaries {
        let slug = summary["name"].as_str().unwrap();
        let response = client.get_dataset(slug).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", slug);

        let rows: serde_json::Value = response.json().await.unwrap();
        let row_count = match rows {
            serde_json::Value::Array(items) => items.len(),
            serde_json::Value::Object(entries) => entries.len(),
            other => panic!("Unexpected dataset shape for {}: {}", slug, other),
        };
        assert_eq!(summary["rows"], row_count, "{}", slug);
    }
}

#[tokio::test]
async fn test_datasets_are_cacheable() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_dataset("chart-volumes").await;

    assert_eq!(
        response.headers()["cache-control"],
        format!("max-age={}", TEST_CACHE_AGE_SEC).as_str()
    );
}

// =============================================================================
// Dataset Content Tests
// =============================================================================

#[tokio::test]
async fn test_chart_volumes_keep_declared_order() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let volumes: serde_json::Value = client
        .get_dataset("chart-volumes")
        .await
        .json()
        .await
        .unwrap();
    let volumes = volumes.as_array().unwrap();

    assert_eq!(volumes.len(), CHART_COUNT);
    assert_eq!(volumes[0]["chart_name"], TOP_CHART_NAME);
    assert_eq!(volumes[0]["play_count_hundred_million"], TOP_CHART_PLAY_COUNT);
    for (chart, expected) in volumes.iter().zip(server.datasets.get_chart_volumes()) {
        assert_eq!(chart["chart_name"], expected.chart_name.as_str());
        assert!(chart["play_count_hundred_million"].as_f64().unwrap() >= 0.0);
    }
}

#[tokio::test]
async fn test_mv_distribution_matches_song_counts() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let distribution: serde_json::Value = client
        .get_dataset("mv-distribution")
        .await
        .json()
        .await
        .unwrap();

    for chart in distribution.as_array().unwrap() {
        let mv = chart["mv_count"].as_u64().unwrap();
        let no_mv = chart["no_mv_count"].as_u64().unwrap();
        assert_eq!(
            mv + no_mv,
            chart["song_count"].as_u64().unwrap(),
            "{}",
            chart["chart_name"]
        );
    }
}

#[tokio::test]
async fn test_artist_rankings_are_sorted() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let rankings: serde_json::Value = client
        .get_dataset("artist-rankings")
        .await
        .json()
        .await
        .unwrap();
    let rankings = rankings.as_array().unwrap();

    assert_eq!(rankings[0]["artist_name"], TOP_ARTIST_NAME);
    let counts: Vec<u64> = rankings
        .iter()
        .map(|artist| artist["appearance_count"].as_u64().unwrap())
        .collect();
    assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn test_unknown_dataset_returns_404() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_dataset("lyrics").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Ranking Tests
// =============================================================================

#[tokio::test]
async fn test_play_count_ranking_is_descending() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_play_count_ranking().await;
    assert_eq!(response.status(), StatusCode::OK);

    let ranked: serde_json::Value = response.json().await.unwrap();
    let ranked = ranked.as_array().unwrap();
    assert_eq!(ranked.len(), CHART_COUNT);
    assert_eq!(ranked[0]["record"]["play_count_display"], TOP_PLAY_COUNT_DISPLAY);

    let values: Vec<f64> = ranked
        .iter()
        .map(|entry| entry["play_count_hundred_million"].as_f64().unwrap())
        .collect();
    assert!(values.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(values, [135.0, 63.5, 31.6, 6.11, 5.17, 4.05, 0.75, 0.05, 0.02]);
}
