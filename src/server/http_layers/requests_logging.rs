//! Request logging middleware
//!
//! The server only answers GET requests without a body, so the interesting
//! payloads are the responses. At `Body` level JSON responses are buffered
//! and a preview is logged; the HTML page and static files only get their
//! size logged.

use crate::server::metrics::{categorize_endpoint, record_http_request};
use crate::server::ServerConfig;
use axum::extract::State;
use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tracing::{error, info};

#[derive(PartialEq, PartialOrd, Clone, Debug, Default, clap::ValueEnum)]
pub enum RequestsLoggingLevel {
    /// Nothing is logged, metrics are still recorded.
    None,
    /// Method, path, status and latency.
    #[default]
    Path,
    /// Also request and response headers.
    Headers,
    /// Also a preview of JSON response bodies.
    Body,
}

impl std::fmt::Display for RequestsLoggingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Characters of a JSON body shown in the log.
const BODY_PREVIEW_CHARS: usize = 512;

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

fn body_preview(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    if text.chars().count() <= BODY_PREVIEW_CHARS {
        return text.into_owned();
    }
    let mut preview: String = text.chars().take(BODY_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

fn log_headers(direction: &str, headers: &HeaderMap) {
    info!("  {} headers:", direction);
    for (name, value) in headers.iter() {
        info!("    {}: {:?}", name, value);
    }
}

async fn log_response_body(response: Response) -> Response {
    if !is_json(response.headers()) {
        match content_length(response.headers()) {
            Some(size) => info!("  Resp body: not JSON ({:#})", byte_unit::Byte::from(size)),
            None => info!("  Resp body: not JSON, size unknown"),
        }
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes: Bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            error!("Failed to buffer response body: {}", err);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
        }
    };
    info!(
        "  Resp body ({:#}): {}",
        byte_unit::Byte::from(bytes.len()),
        body_preview(&bytes)
    );
    Response::from_parts(parts, Body::from(bytes))
}

pub async fn log_requests(
    State(config): State<ServerConfig>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let level = config.requests_logging_level;
    let start = Instant::now();

    let method = request.method().to_string();
    let path = request.uri().path().to_owned();

    if level >= RequestsLoggingLevel::Headers {
        info!("{} {}", method, request.uri());
        log_headers("Req", request.headers());
    }

    let mut response = next.run(request).await;

    if level >= RequestsLoggingLevel::Headers {
        log_headers("Resp", response.headers());
    }
    if level >= RequestsLoggingLevel::Body {
        response = log_response_body(response).await;
    }

    let status = response.status().as_u16();
    let duration = start.elapsed();

    if level > RequestsLoggingLevel::None {
        info!("{} {} -> {} ({}ms)", method, path, status, duration.as_millis());
    }

    record_http_request(&method, categorize_endpoint(&path), status, duration);

    response
}
