//! End-to-end tests for the dashboard page and its layout endpoint
//!
//! Tests the rendered page, the dashboard JSON, statics and the frontend dir override.

mod common;

use common::{
    TestClient, TestServer, DASHBOARD_TITLE, DATASET_COUNT, TAB_IDS, TEST_PLOTLY_JS_URL,
};
use reqwest::StatusCode;

// =============================================================================
// Page Tests
// =============================================================================

#[tokio::test]
async fn test_home_serves_rendered_dashboard() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_home().await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_owned();
    assert!(content_type.starts_with("text/html"));

    let html = response.text().await.unwrap();
    assert!(html.contains(DASHBOARD_TITLE));
    assert!(html.contains(&format!(r#"<script src="{}"></script>"#, TEST_PLOTLY_JS_URL)));
    for tab_id in TAB_IDS {
        assert!(html.contains(&format!(r#"data-tab="{}""#, tab_id)), "{}", tab_id);
        assert!(html.contains(&format!(r#"id="tab-{}""#, tab_id)), "{}", tab_id);
    }
}

#[tokio::test]
async fn test_home_embeds_one_figure_per_chart() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let html = client.get_home().await.text().await.unwrap();

    assert_eq!(html.matches(r#"<div class="chart" id="chart-"#).count(), 9);
    assert_eq!(html.matches("<table class=").count(), 2);
}

#[tokio::test]
async fn test_home_is_not_cached() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_home().await;

    assert!(response.headers().get("cache-control").is_none());
}

// =============================================================================
// Dashboard Layout Tests
// =============================================================================

#[tokio::test]
async fn test_dashboard_lists_tabs_in_order() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_dashboard().await;
    assert_eq!(response.status(), StatusCode::OK);

    let dashboard: serde_json::Value = response.json().await.unwrap();
    assert_eq!(dashboard["title"], DASHBOARD_TITLE);

    let tab_ids: Vec<&str> = dashboard["tabs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tab| tab["id"].as_str().unwrap())
        .collect();
    assert_eq!(tab_ids, TAB_IDS);
}

#[tokio::test]
async fn test_dashboard_overview_has_headline_metrics() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let dashboard: serde_json::Value = client.get_dashboard().await.json().await.unwrap();

    let metrics = dashboard["tabs"][0]["metrics"].as_array().unwrap();
    assert_eq!(metrics.len(), 4);
    assert_eq!(metrics[0]["title"], "总播放量");
    assert_eq!(dashboard["footer"]["snapshot_month"], "2025年11月");
}

// =============================================================================
// Statics Tests
// =============================================================================

#[tokio::test]
async fn test_statics_reports_uptime_and_datasets() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_statics().await;
    assert_eq!(response.status(), StatusCode::OK);

    let stats: serde_json::Value = response.json().await.unwrap();
    assert!(stats["uptime"].as_str().unwrap().starts_with("0d "));
    assert_eq!(stats["datasets"].as_array().unwrap().len(), DATASET_COUNT);
}

// =============================================================================
// Frontend Dir Tests
// =============================================================================

#[tokio::test]
async fn test_frontend_dir_replaces_rendered_page() {
    let server = TestServer::spawn_with_frontend(&[
        ("index.html", "<html><body>custom frontend</body></html>"),
        ("app.js", "console.log(1);"),
    ])
    .await;
    let client = TestClient::new(server.base_url.clone());

    let html = client.get_home().await.text().await.unwrap();
    assert!(html.contains("custom frontend"));
    assert!(!html.contains(DASHBOARD_TITLE));

    let script = client.get_path("/app.js").await;
    assert_eq!(script.status(), StatusCode::OK);

    // The API stays available next to the static files
    let response = client.get_dashboard().await;
    assert_eq!(response.status(), StatusCode::OK);
}
