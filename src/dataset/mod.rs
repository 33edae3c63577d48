mod literals;
mod models;
mod provider;
mod ranking;

pub use models::{
    ArtistRecord, ChartRecord, DetailRecord, GenreRecord, HeadlineMetric, ReleaseTypeRecord,
    SongCountRow,
};
pub use provider::{ChartDatasetProvider, DatasetKind, DatasetProblem, DatasetSummary};
pub use ranking::{
    parse_play_count, rank_by_play_count, ranked_play_counts, ParseError, RankedPlayCount,
    HUNDRED_MILLION_UNIT,
};
