//! Record types for the chart statistics tables.
//!
//! Every record is built once by [`super::ChartDatasetProvider`] and never
//! mutated afterwards.

use serde::Serialize;

/// Aggregate numbers for a single chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartRecord {
    pub chart_name: String,
    /// Total plays, in units of 亿 (10^8).
    pub play_count_hundred_million: f64,
    pub song_count: u32,
    pub favorites: u64,
    pub shares: u64,
    pub comments: u64,
    /// Songs with a music video, when known.
    pub mv_count: Option<u32>,
    /// Songs without a music video, when known.
    pub no_mv_count: Option<u32>,
}

impl ChartRecord {
    /// Sum of the MV split, if both halves are known.
    pub fn mv_total(&self) -> Option<u32> {
        match (self.mv_count, self.no_mv_count) {
            (Some(mv), Some(no_mv)) => Some(mv + no_mv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SongCountRow {
    pub chart_name: String,
    pub song_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArtistRecord {
    pub artist_name: String,
    /// Appearances across chart snapshots, counted with repetition.
    pub appearance_count: u32,
    /// Distinct chart names, in display order.
    pub chart_membership: Vec<String>,
}

impl ArtistRecord {
    pub fn membership_display(&self) -> String {
        self.chart_membership.join("/")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenreRecord {
    pub genre_name: String,
    pub song_count: u32,
    /// Average plays per song, in units of 万 (10^4).
    pub avg_play_count_ten_thousand: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReleaseTypeRecord {
    pub release_type: String,
    pub count: u32,
    pub growth_rate_percent: f64,
}

/// A row of the detail table, with the counters kept as display strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetailRecord {
    pub chart_name: String,
    pub favorites_display: String,
    pub shares_display: String,
    pub comments_display: String,
    pub song_count: u32,
    /// e.g. "135亿", meaning 135 * 10^8 plays.
    pub play_count_display: String,
}

/// One of the key-indicator cards shown on top of the overview tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadlineMetric {
    pub title: String,
    pub value_display: String,
    pub caption: String,
}
