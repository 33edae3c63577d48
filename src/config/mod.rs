mod file_config;

pub use file_config::{FileConfig, PageConfig};

use crate::dashboard::DEFAULT_PLOTLY_JS_URL;
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub bind_address: Option<String>,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    pub plotly_js_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: String,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    pub plotly_js_url: String,
}

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let bind_address = file
            .bind_address
            .or_else(|| cli.bind_address.clone())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_owned());

        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);
        if port != 0 && port == metrics_port {
            bail!("port and metrics_port must differ, both are {}", port);
        }

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let content_cache_age_sec = file
            .content_cache_age_sec
            .unwrap_or(cli.content_cache_age_sec);

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());
        if let Some(dir) = &frontend_dir_path {
            let dir_path = PathBuf::from(dir);
            if !dir_path.exists() {
                bail!("Frontend directory does not exist: {:?}", dir_path);
            }
            if !dir_path.is_dir() {
                bail!("frontend_dir_path is not a directory: {:?}", dir_path);
            }
        }

        let plotly_js_url = file
            .page
            .unwrap_or_default()
            .plotly_js_url
            .or_else(|| cli.plotly_js_url.clone())
            .unwrap_or_else(|| DEFAULT_PLOTLY_JS_URL.to_owned());
        if plotly_js_url.trim().is_empty() {
            bail!("plotly_js_url must not be empty");
        }

        Ok(Self {
            bind_address,
            port,
            metrics_port,
            logging_level,
            content_cache_age_sec,
            frontend_dir_path,
            plotly_js_url,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
