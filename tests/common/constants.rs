//! Shared constants for end-to-end tests
//!
//! When the built-in chart snapshot changes, update only this file.

// ============================================================================
// Dashboard Content
// ============================================================================

/// Heading shown on top of the rendered page
pub const DASHBOARD_TITLE: &str = "网易云音乐榜单数据分析大屏";

/// Tab identifiers, in display order
pub const TAB_IDS: [&str; 4] = ["overview", "artists", "trends", "details"];

/// Chart with the highest play count
pub const TOP_CHART_NAME: &str = "热歌榜";

/// Play count of the top chart in the volumes table, in 亿
pub const TOP_CHART_PLAY_COUNT: f64 = 135.01;

/// Display value of the highest play count in the detail table
pub const TOP_PLAY_COUNT_DISPLAY: &str = "135亿";

/// Artist ranked first in the artist rankings
pub const TOP_ARTIST_NAME: &str = "周深";

/// Number of charts covered by the snapshot
pub const CHART_COUNT: usize = 9;

/// Number of datasets served under /v1/datasets
pub const DATASET_COUNT: usize = 9;

/// URL the page loads Plotly from unless configured otherwise
pub const TEST_PLOTLY_JS_URL: &str = "/static/plotly.min.js";

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Cache age configured on the test server (seconds)
pub const TEST_CACHE_AGE_SEC: usize = 120;
