use super::RequestsLoggingLevel;
use crate::config::AppConfig;
use crate::dashboard::DEFAULT_PLOTLY_JS_URL;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub bind_address: String,
    pub port: u16,
    pub metrics_port: u16,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    pub plotly_js_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            bind_address: "127.0.0.1".to_owned(),
            port: 3001,
            metrics_port: 9091,
            content_cache_age_sec: 3600,
            frontend_dir_path: None,
            plotly_js_url: DEFAULT_PLOTLY_JS_URL.to_owned(),
        }
    }
}

impl From<&AppConfig> for ServerConfig {
    fn from(config: &AppConfig) -> Self {
        ServerConfig {
            requests_logging_level: config.logging_level.clone(),
            bind_address: config.bind_address.clone(),
            port: config.port,
            metrics_port: config.metrics_port,
            content_cache_age_sec: config.content_cache_age_sec,
            frontend_dir_path: config.frontend_dir_path.clone(),
            plotly_js_url: config.plotly_js_url.clone(),
        }
    }
}
