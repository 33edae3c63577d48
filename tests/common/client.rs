//! HTTP client for end-to-end tests
//!
//! This module provides a thin wrapper over reqwest with one method per
//! dashboard endpoint. When API routes change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Request failed")
    }

    // ========================================================================
    // Page
    // ========================================================================

    /// GET / - the rendered dashboard page (or the frontend dir, if configured)
    pub async fn get_home(&self) -> Response {
        self.get("/").await
    }

    /// GET any path, for static files served from the frontend dir
    pub async fn get_path(&self, path: &str) -> Response {
        self.get(path).await
    }

    // ========================================================================
    // API
    // ========================================================================

    /// GET /v1/statics
    pub async fn get_statics(&self) -> Response {
        self.get("/v1/statics").await
    }

    /// GET /v1/dashboard
    pub async fn get_dashboard(&self) -> Response {
        self.get("/v1/dashboard").await
    }

    /// GET /v1/datasets
    pub async fn list_datasets(&self) -> Response {
        self.get("/v1/datasets").await
    }

    /// GET /v1/datasets/{slug}
    pub async fn get_dataset(&self, slug: &str) -> Response {
        self.get(&format!("/v1/datasets/{}", slug)).await
    }

    /// GET /v1/ranking/play-count
    pub async fn get_play_count_ranking(&self) -> Response {
        self.get("/v1/ranking/play-count").await
    }
}
