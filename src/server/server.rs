use anyhow::{Context, Result};
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tracing::{error, info};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::services::ServeDir;

use super::metrics::{metrics_handler, record_error};
use super::{http_cache, log_requests, state::*, ServerConfig};
use crate::dashboard::{render_page, Dashboard, PageOptions};
use crate::dataset::{ranked_play_counts, ChartDatasetProvider, DatasetKind, DatasetSummary};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
    pub datasets: Vec<DatasetSummary>,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(page): State<RenderedPage>) -> Html<RenderedPage> {
    Html(page)
}

async fn get_statics(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: state.version.clone(),
        datasets: state.datasets.summaries(),
    };
    Json(stats)
}

async fn get_dashboard(State(dashboard): State<GuardedDashboard>) -> Response {
    Json(dashboard.as_ref()).into_response()
}

async fn list_datasets(State(datasets): State<GuardedDatasets>) -> impl IntoResponse {
    Json(datasets.summaries())
}

async fn get_dataset(
    State(datasets): State<GuardedDatasets>,
    Path(slug): Path<String>,
) -> Response {
    let kind = match DatasetKind::from_slug(&slug) {
        Some(kind) => kind,
        None => return StatusCode::NOT_FOUND.into_response(),
    };

    match datasets.dataset_json(kind) {
        Ok(value) => Json(value).into_response(),
        Err(err) => {
            error!("Failed to serialize dataset {}: {}", kind, err);
            record_error("serialization", "datasets");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn get_play_count_ranking(State(datasets): State<GuardedDatasets>) -> Response {
    match ranked_play_counts(datasets.get_detail_table()) {
        Ok(ranked) => Json(ranked).into_response(),
        Err(err) => {
            error!("Could not rank detail table: {}", err);
            record_error("parse", "ranking");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

impl ServerState {
    fn new(config: ServerConfig, datasets: Arc<ChartDatasetProvider>) -> Result<ServerState> {
        let dashboard = Dashboard::build(&datasets)
            .context("Could not build the dashboard from the chart datasets")?;
        let page = render_page(
            &dashboard,
            &PageOptions {
                plotly_js_url: config.plotly_js_url.clone(),
            },
        );

        Ok(ServerState {
            config,
            start_time: Instant::now(),
            datasets,
            dashboard: Arc::new(dashboard),
            page: RenderedPage::from(page),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        })
    }
}

pub fn make_app(config: ServerConfig, datasets: Arc<ChartDatasetProvider>) -> Result<Router> {
    let state = ServerState::new(config.clone(), datasets)?;

    let data_routes: Router = Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/datasets", get(list_datasets))
        .route("/datasets/{slug}", get(get_dataset))
        .route("/ranking/play-count", get(get_play_count_ranking))
        .layer(middleware::from_fn_with_state(
            config.content_cache_age_sec,
            http_cache,
        ))
        .with_state(state.clone());

    let v1_routes: Router = Router::new()
        .route("/statics", get(get_statics))
        .with_state(state.clone())
        .merge(data_routes);

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    let app: Router = home_router
        .nest("/v1", v1_routes)
        .layer(middleware::from_fn_with_state(state.clone(), log_requests));

    Ok(app)
}

fn make_metrics_app() -> Router {
    Router::new().route("/metrics", get(metrics_handler))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

pub async fn run_server(config: ServerConfig, datasets: Arc<ChartDatasetProvider>) -> Result<()> {
    let app = make_app(config.clone(), datasets)?;

    let address = format!("{}:{}", config.bind_address, config.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    let metrics_address = format!("{}:{}", config.bind_address, config.metrics_port);
    let metrics_listener = tokio::net::TcpListener::bind(&metrics_address)
        .await
        .with_context(|| format!("Failed to bind metrics port {}", metrics_address))?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(metrics_listener, make_metrics_app()).await {
            error!("Metrics server stopped: {}", err);
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
