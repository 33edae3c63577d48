use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::{fmt::Debug, path::PathBuf};
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chart_dashboard_server::config::{AppConfig, CliConfig, FileConfig};
use chart_dashboard_server::server::{self, run_server, RequestsLoggingLevel, ServerConfig};
use chart_dashboard_server::{ChartDatasetProvider, Dashboard};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Values found there override the CLI ones.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The address to bind both servers to.
    #[clap(long)]
    pub bind_address: Option<String>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9091)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// The maximum age of content in the cache in seconds.
    #[clap(long, default_value_t = 3600)]
    pub content_cache_age_sec: usize,

    /// Path to a directory served at the root instead of the rendered dashboard.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Where the dashboard page loads Plotly from.
    #[clap(long)]
    pub plotly_js_url: Option<String>,

    /// Validate the built-in datasets and the dashboard, then exit.
    #[clap(long)]
    pub check_only: bool,
}

impl From<&CliArgs> for CliConfig {
    fn from(args: &CliArgs) -> Self {
        CliConfig {
            bind_address: args.bind_address.clone(),
            port: args.port,
            metrics_port: args.metrics_port,
            logging_level: args.logging_level.clone(),
            content_cache_age_sec: args.content_cache_age_sec,
            frontend_dir_path: args.frontend_dir_path.clone(),
            plotly_js_url: args.plotly_js_url.clone(),
        }
    }
}

fn check_only(datasets: &ChartDatasetProvider) -> Result<()> {
    let problems = datasets.check();
    if !problems.is_empty() {
        println!("Found {} problems:", problems.len());
        for problem in problems.iter() {
            println!("- {:?}", problem);
        }
        println!();
    }

    match (Dashboard::build(datasets), problems.is_empty()) {
        (Ok(dashboard), true) => println!(
            "Datasets checked, no issues found. Dashboard has {} widgets.",
            dashboard.widget_count()
        ),
        (Ok(_), false) => println!("Dashboard was built, but check the issues above."),
        (Err(err), _) => println!("The dashboard could not be built: {}", err),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let app_config = AppConfig::resolve(&CliConfig::from(&cli_args), file_config)?;

    let datasets = Arc::new(ChartDatasetProvider::new());
    info!(
        "Loaded {} datasets, snapshot of {}",
        datasets.summaries().len(),
        datasets
            .snapshot_month()
            .map(|month| month.format("%Y-%m").to_string())
            .unwrap_or_else(|| "an unknown month".to_owned())
    );

    if cli_args.check_only {
        return check_only(&datasets);
    }

    for problem in datasets.check() {
        warn!("Dataset problem: {:?}", problem);
    }

    // Initialize metrics system
    info!("Initializing metrics...");
    server::metrics::init_metrics();
    server::metrics::init_dataset_metrics(&datasets);

    let server_config = ServerConfig::from(&app_config);
    info!(
        "Ready to serve at {}:{} (metrics on port {})",
        server_config.bind_address, server_config.port, server_config.metrics_port
    );
    run_server(server_config, datasets).await
}
