use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::literals;
use super::ranking::{parse_play_count, ParseError};
use super::{
    ArtistRecord, ChartRecord, DetailRecord, GenreRecord, HeadlineMetric, ReleaseTypeRecord,
    SongCountRow,
};

/// The named datasets, as addressed by the HTTP API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    ChartVolumes,
    SongCounts,
    MvDistribution,
    ArtistRankings,
    ArtistDistribution,
    GenreStats,
    ReleaseTypeStats,
    DetailTable,
    HeadlineMetrics,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 9] = [
        DatasetKind::ChartVolumes,
        DatasetKind::SongCounts,
        DatasetKind::MvDistribution,
        DatasetKind::ArtistRankings,
        DatasetKind::ArtistDistribution,
        DatasetKind::GenreStats,
        DatasetKind::ReleaseTypeStats,
        DatasetKind::DetailTable,
        DatasetKind::HeadlineMetrics,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            DatasetKind::ChartVolumes => "chart-volumes",
            DatasetKind::SongCounts => "song-counts",
            DatasetKind::MvDistribution => "mv-distribution",
            DatasetKind::ArtistRankings => "artist-rankings",
            DatasetKind::ArtistDistribution => "artist-distribution",
            DatasetKind::GenreStats => "genre-stats",
            DatasetKind::ReleaseTypeStats => "release-type-stats",
            DatasetKind::DetailTable => "detail-table",
            DatasetKind::HeadlineMetrics => "headline-metrics",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Invariant violations found by [`ChartDatasetProvider::check`].
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetProblem {
    NegativePlayCount {
        chart_name: String,
        value: f64,
    },
    MvSplitMismatch {
        chart_name: String,
        mv_total: u32,
        song_count: u32,
    },
    UnknownMvChart(String),
    MissingMvSplit(String),
    ArtistRankingOutOfOrder {
        position: usize,
        artist_name: String,
    },
    UnparsablePlayCount(ParseError),
    InvalidSnapshotMonth {
        year: i32,
        month: u32,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub name: &'static str,
    pub rows: usize,
}

/// Owner of the fixed chart statistics tables.
///
/// All tables are built eagerly in [`ChartDatasetProvider::new`] and only
/// read afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartDatasetProvider {
    chart_volumes: Vec<ChartRecord>,
    song_counts: Vec<SongCountRow>,
    mv_distribution: Vec<ChartRecord>,
    artist_rankings: Vec<ArtistRecord>,
    artist_distribution: BTreeMap<u32, u32>,
    genre_stats: Vec<GenreRecord>,
    release_type_stats: Vec<ReleaseTypeRecord>,
    detail_table: Vec<DetailRecord>,
    headline_metrics: Vec<HeadlineMetric>,
    snapshot_year_month: (i32, u32),
    data_source: String,
    unknown_mv_charts: Vec<String>,
}

fn split_membership(membership: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for chart in membership.split('/').map(str::trim).filter(|c| !c.is_empty()) {
        if !out.iter().any(|known| known == chart) {
            out.push(chart.to_owned());
        }
    }
    out
}

impl ChartDatasetProvider {
    pub fn new() -> Self {
        let chart_volumes: Vec<ChartRecord> = literals::CHART_VOLUMES
            .iter()
            .map(|chart| ChartRecord {
                chart_name: chart.name.to_owned(),
                play_count_hundred_million: chart.play_count_hundred_million,
                song_count: chart.song_count,
                favorites: chart.favorites,
                shares: chart.shares,
                comments: chart.comments,
                mv_count: chart.mv_split.map(|(mv, _)| mv),
                no_mv_count: chart.mv_split.map(|(_, no_mv)| no_mv),
            })
            .collect();

        let song_counts = literals::SONG_COUNTS
            .iter()
            .map(|(name, count)| SongCountRow {
                chart_name: (*name).to_owned(),
                song_count: *count,
            })
            .collect();

        let mut mv_distribution = Vec::with_capacity(literals::MV_DISTRIBUTION.len());
        let mut unknown_mv_charts = Vec::new();
        for name in literals::MV_DISTRIBUTION {
            match chart_volumes.iter().find(|c| c.chart_name == name) {
                Some(chart) => mv_distribution.push(chart.clone()),
                None => unknown_mv_charts.push(name.to_owned()),
            }
        }

        let artist_rankings = literals::ARTIST_RANKINGS
            .iter()
            .map(|(name, count, membership)| ArtistRecord {
                artist_name: (*name).to_owned(),
                appearance_count: *count,
                chart_membership: split_membership(membership),
            })
            .collect();

        let genre_stats = literals::GENRE_STATS
            .iter()
            .map(|(name, songs, avg)| GenreRecord {
                genre_name: (*name).to_owned(),
                song_count: *songs,
                avg_play_count_ten_thousand: *avg,
            })
            .collect();

        let release_type_stats = literals::RELEASE_TYPE_STATS
            .iter()
            .map(|(release_type, count, growth)| ReleaseTypeRecord {
                release_type: (*release_type).to_owned(),
                count: *count,
                growth_rate_percent: *growth,
            })
            .collect();

        let detail_table = literals::DETAIL_TABLE
            .iter()
            .map(|row| DetailRecord {
                chart_name: row.name.to_owned(),
                favorites_display: row.favorites.to_owned(),
                shares_display: row.shares.to_owned(),
                comments_display: row.comments.to_owned(),
                song_count: row.song_count,
                play_count_display: row.play_count.to_owned(),
            })
            .collect();

        let headline_metrics = literals::HEADLINE_METRICS
            .iter()
            .map(|(title, value, caption)| HeadlineMetric {
                title: (*title).to_owned(),
                value_display: (*value).to_owned(),
                caption: (*caption).to_owned(),
            })
            .collect();

        ChartDatasetProvider {
            chart_volumes,
            song_counts,
            mv_distribution,
            artist_rankings,
            artist_distribution: literals::ARTIST_DISTRIBUTION.into_iter().collect(),
            genre_stats,
            release_type_stats,
            detail_table,
            headline_metrics,
            snapshot_year_month: literals::SNAPSHOT_YEAR_MONTH,
            data_source: literals::DATA_SOURCE.to_owned(),
            unknown_mv_charts,
        }
    }

    pub fn get_chart_volumes(&self) -> &[ChartRecord] {
        &self.chart_volumes
    }

    /// Song counts per chart, in this table's own order (古典榜 before 电音榜).
    pub fn get_song_counts(&self) -> &[SongCountRow] {
        &self.song_counts
    }

    /// MV split for the charts it was collected for. 全球说唱榜 and 潮流风向榜
    /// are not part of it.
    pub fn get_mv_distribution(&self) -> &[ChartRecord] {
        &self.mv_distribution
    }

    pub fn get_artist_rankings(&self) -> &[ArtistRecord] {
        &self.artist_rankings
    }

    /// Number of distinct charts an artist appeared on -> number of artists.
    pub fn get_artist_distribution(&self) -> &BTreeMap<u32, u32> {
        &self.artist_distribution
    }

    pub fn get_genre_stats(&self) -> &[GenreRecord] {
        &self.genre_stats
    }

    pub fn get_release_type_stats(&self) -> &[ReleaseTypeRecord] {
        &self.release_type_stats
    }

    pub fn get_detail_table(&self) -> &[DetailRecord] {
        &self.detail_table
    }

    pub fn get_headline_metrics(&self) -> &[HeadlineMetric] {
        &self.headline_metrics
    }

    /// First day of the month the snapshot was taken in, `None` if the
    /// recorded year and month do not form a date.
    pub fn snapshot_month(&self) -> Option<NaiveDate> {
        let (year, month) = self.snapshot_year_month;
        NaiveDate::from_ymd_opt(year, month, 1)
    }

    pub fn data_source(&self) -> &str {
        &self.data_source
    }

    pub fn artist_population(&self) -> u32 {
        self.artist_distribution.values().sum()
    }

    pub fn row_count(&self, kind: DatasetKind) -> usize {
        match kind {
            DatasetKind::ChartVolumes => self.chart_volumes.len(),
            DatasetKind::SongCounts => self.song_counts.len(),
            DatasetKind::MvDistribution => self.mv_distribution.len(),
            DatasetKind::ArtistRankings => self.artist_rankings.len(),
            DatasetKind::ArtistDistribution => self.artist_distribution.len(),
            DatasetKind::GenreStats => self.genre_stats.len(),
            DatasetKind::ReleaseTypeStats => self.release_type_stats.len(),
            DatasetKind::DetailTable => self.detail_table.len(),
            DatasetKind::HeadlineMetrics => self.headline_metrics.len(),
        }
    }

    pub fn summaries(&self) -> Vec<DatasetSummary> {
        DatasetKind::ALL
            .iter()
            .map(|kind| DatasetSummary {
                name: kind.slug(),
                rows: self.row_count(*kind),
            })
            .collect()
    }

    pub fn dataset_json(&self, kind: DatasetKind) -> serde_json::Result<serde_json::Value> {
        match kind {
            DatasetKind::ChartVolumes => serde_json::to_value(&self.chart_volumes),
            DatasetKind::SongCounts => serde_json::to_value(&self.song_counts),
            DatasetKind::MvDistribution => serde_json::to_value(&self.mv_distribution),
            DatasetKind::ArtistRankings => serde_json::to_value(&self.artist_rankings),
            DatasetKind::ArtistDistribution => serde_json::to_value(&self.artist_distribution),
            DatasetKind::GenreStats => serde_json::to_value(&self.genre_stats),
            DatasetKind::ReleaseTypeStats => serde_json::to_value(&self.release_type_stats),
            DatasetKind::DetailTable => serde_json::to_value(&self.detail_table),
            DatasetKind::HeadlineMetrics => serde_json::to_value(&self.headline_metrics),
        }
    }

    /// Looks for data-entry defects in the tables. An empty result means all
    /// invariants hold.
    pub fn check(&self) -> Vec<DatasetProblem> {
        let mut problems = Vec::new();

        for chart in self.chart_volumes.iter() {
            if !(chart.play_count_hundred_million >= 0.0) {
                problems.push(DatasetProblem::NegativePlayCount {
                    chart_name: chart.chart_name.clone(),
                    value: chart.play_count_hundred_million,
                });
            }
        }

        for name in self.unknown_mv_charts.iter() {
            problems.push(DatasetProblem::UnknownMvChart(name.clone()));
        }

        for chart in self.mv_distribution.iter() {
            match chart.mv_total() {
                None => problems.push(DatasetProblem::MissingMvSplit(chart.chart_name.clone())),
                Some(mv_total) if mv_total != chart.song_count => {
                    problems.push(DatasetProblem::MvSplitMismatch {
                        chart_name: chart.chart_name.clone(),
                        mv_total,
                        song_count: chart.song_count,
                    })
                }
                Some(_) => {}
            }
        }

        for (position, pair) in self.artist_rankings.windows(2).enumerate() {
            if pair[0].appearance_count < pair[1].appearance_count {
                problems.push(DatasetProblem::ArtistRankingOutOfOrder {
                    position: position + 1,
                    artist_name: pair[1].artist_name.clone(),
                });
            }
        }

        for record in self.detail_table.iter() {
            if let Err(err) = parse_play_count(&record.play_count_display) {
                problems.push(DatasetProblem::UnparsablePlayCount(err));
            }
        }

        if self.snapshot_month().is_none() {
            let (year, month) = self.snapshot_year_month;
            problems.push(DatasetProblem::InvalidSnapshotMonth { year, month });
        }

        problems
    }
}

impl Default for ChartDatasetProvider {
    fn default() -> Self {
        Self::new()
    }
}
