//! Test server lifecycle management
//!
//! Every test gets its own server on a random port, serving the built-in
//! chart snapshot. The listener is bound before the server task starts, so
//! requests made right after `spawn` queue up instead of failing.

use super::constants::*;
use chart_dashboard_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use chart_dashboard_server::ChartDatasetProvider;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The datasets the server was built from, to compare responses against
    pub datasets: Arc<ChartDatasetProvider>,

    // Kept alive until drop
    _frontend_dir: Option<TempDir>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    /// Serves the rendered dashboard page at `/`.
    pub async fn spawn() -> Self {
        Self::start(None).await
    }

    /// Serves a temporary frontend directory holding `files` at `/` instead
    /// of the rendered page. The API stays under `/v1`.
    pub async fn spawn_with_frontend(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("Failed to create frontend dir");
        for (name, content) in files {
            std::fs::write(dir.path().join(name), content).expect("Failed to write frontend file");
        }
        Self::start(Some(dir)).await
    }

    async fn start(frontend_dir: Option<TempDir>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let address = listener.local_addr().expect("Failed to get local address");

        let config = ServerConfig {
            port: address.port(),
            requests_logging_level: RequestsLoggingLevel::None,
            content_cache_age_sec: TEST_CACHE_AGE_SEC,
            frontend_dir_path: frontend_dir
                .as_ref()
                .map(|dir| dir.path().to_string_lossy().into_owned()),
            plotly_js_url: TEST_PLOTLY_JS_URL.to_owned(),
            ..ServerConfig::default()
        };

        let datasets = Arc::new(ChartDatasetProvider::new());
        let app = make_app(config, datasets.clone()).expect("Failed to build app");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        Self {
            base_url: format!("http://{}", address),
            datasets,
            _frontend_dir: frontend_dir,
            shutdown_tx: Some(shutdown_tx),
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
