//! Chart Dashboard Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod server;

// Re-export commonly used types for convenience
pub use dashboard::{render_page, Dashboard, PageOptions};
pub use dataset::{rank_by_play_count, ChartDatasetProvider, DatasetKind, ParseError};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
