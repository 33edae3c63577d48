//! Hardcoded snapshot of the NetEase Cloud Music chart statistics (2025-11).
//!
//! Tables are kept exactly as curated, including the different chart orders
//! between tables and the charts missing from the MV table.

pub(super) struct ChartLiteral {
    pub name: &'static str,
    pub play_count_hundred_million: f64,
    pub song_count: u32,
    pub favorites: u64,
    pub shares: u64,
    pub comments: u64,
    pub mv_split: Option<(u32, u32)>,
}

pub(super) const CHART_VOLUMES: [ChartLiteral; 9] = [
    ChartLiteral {
        name: "热歌榜",
        play_count_hundred_million: 135.01,
        song_count: 200,
        favorites: 12_691_782,
        shares: 64_897,
        comments: 311_600,
        mv_split: Some((45, 155)),
    },
    ChartLiteral {
        name: "飙升榜",
        play_count_hundred_million: 63.48,
        song_count: 100,
        favorites: 4_172_750,
        shares: 16_818,
        comments: 225_998,
        mv_split: Some((12, 88)),
    },
    ChartLiteral {
        name: "新歌榜",
        play_count_hundred_million: 31.59,
        song_count: 100,
        favorites: 2_790_101,
        shares: 13_877,
        comments: 157_187,
        mv_split: Some((8, 92)),
    },
    ChartLiteral {
        name: "原创榜",
        play_count_hundred_million: 6.11,
        song_count: 100,
        favorites: 728_562,
        shares: 12_917,
        comments: 14_338,
        mv_split: Some((6, 94)),
    },
    ChartLiteral {
        name: "中文说唱榜",
        play_count_hundred_million: 5.17,
        song_count: 50,
        favorites: 812_732,
        shares: 6_613,
        comments: 20_411,
        mv_split: Some((3, 47)),
    },
    ChartLiteral {
        name: "电音榜",
        play_count_hundred_million: 4.05,
        song_count: 50,
        favorites: 1_311_832,
        shares: 13_396,
        comments: 43_566,
        mv_split: Some((0, 50)),
    },
    ChartLiteral {
        name: "古典榜",
        play_count_hundred_million: 0.75,
        song_count: 100,
        favorites: 440_795,
        shares: 3_906,
        comments: 5_065,
        mv_split: Some((2, 98)),
    },
    ChartLiteral {
        name: "全球说唱榜",
        play_count_hundred_million: 0.02,
        song_count: 10,
        favorites: 4_157,
        shares: 44,
        comments: 114,
        mv_split: None,
    },
    ChartLiteral {
        name: "潮流风向榜",
        play_count_hundred_million: 0.05,
        song_count: 10,
        favorites: 4_785,
        shares: 47,
        comments: 75,
        mv_split: None,
    },
];

pub(super) const SONG_COUNTS: [(&str, u32); 9] = [
    ("热歌榜", 200),
    ("飙升榜", 100),
    ("新歌榜", 100),
    ("原创榜", 100),
    ("中文说唱榜", 50),
    ("古典榜", 100),
    ("电音榜", 50),
    ("全球说唱榜", 10),
    ("潮流风向榜", 10),
];

pub(super) const MV_DISTRIBUTION: [&str; 7] = [
    "热歌榜",
    "飙升榜",
    "新歌榜",
    "原创榜",
    "中文说唱榜",
    "古典榜",
    "电音榜",
];

pub(super) const ARTIST_RANKINGS: [(&str, u32, &str); 10] = [
    ("周深", 28, "新歌榜/热歌榜/原创榜"),
    ("薛之谦", 15, "热歌榜/新歌榜"),
    ("郑润泽", 14, "热歌榜/新歌榜/飙升榜"),
    ("陈奕迅", 12, "热歌榜/飙升榜"),
    ("林俊杰", 10, "热歌榜/飙升榜"),
    ("王齐铭WatchMe", 9, "中文说唱榜/新歌榜"),
    ("艾志恒Asen", 8, "中文说唱榜"),
    ("GALI", 7, "中文说唱榜/新歌榜"),
    ("马思唯", 7, "中文说唱榜/新歌榜"),
    ("陈粒", 6, "热歌榜/飙升榜"),
];

/// Artists by number of distinct charts they appeared on, over the whole
/// artist population.
pub(super) const ARTIST_DISTRIBUTION: [(u32, u32); 4] = [(1, 320), (2, 85), (3, 25), (4, 8)];

pub(super) const GENRE_STATS: [(&str, u32, f64); 8] = [
    ("流行音乐", 420, 850.0),
    ("说唱音乐", 180, 620.0),
    ("电音", 50, 480.0),
    ("古典音乐", 100, 120.0),
    ("民谣", 65, 350.0),
    ("摇滚", 30, 280.0),
    ("R&B", 25, 410.0),
    ("其他", 15, 200.0),
];

pub(super) const RELEASE_TYPE_STATS: [(&str, u32, f64); 6] = [
    ("新歌首发", 180, 25.3),
    ("Live版本", 120, 18.7),
    ("重新编曲", 85, 12.5),
    ("经典重录", 60, 8.9),
    ("合作版本", 95, 22.1),
    ("Remix版本", 45, 15.6),
];

pub(super) struct DetailLiteral {
    pub name: &'static str,
    pub favorites: &'static str,
    pub shares: &'static str,
    pub comments: &'static str,
    pub song_count: u32,
    pub play_count: &'static str,
}

pub(super) const DETAIL_TABLE: [DetailLiteral; 9] = [
    DetailLiteral {
        name: "热歌榜",
        favorites: "12,691,782",
        shares: "64,897",
        comments: "311,600",
        song_count: 200,
        play_count: "135亿",
    },
    DetailLiteral {
        name: "飙升榜",
        favorites: "4,172,750",
        shares: "16,818",
        comments: "225,998",
        song_count: 100,
        play_count: "63.5亿",
    },
    DetailLiteral {
        name: "新歌榜",
        favorites: "2,790,101",
        shares: "13,877",
        comments: "157,187",
        song_count: 100,
        play_count: "31.6亿",
    },
    DetailLiteral {
        name: "原创榜",
        favorites: "728,562",
        shares: "12,917",
        comments: "14,338",
        song_count: 100,
        play_count: "6.11亿",
    },
    DetailLiteral {
        name: "网易云中文说唱榜",
        favorites: "812,732",
        shares: "6,613",
        comments: "20,411",
        song_count: 50,
        play_count: "5.17亿",
    },
    DetailLiteral {
        name: "网易云古典榜",
        favorites: "440,795",
        shares: "3,906",
        comments: "5,065",
        song_count: 100,
        play_count: "0.75亿",
    },
    DetailLiteral {
        name: "网易云电音榜",
        favorites: "1,311,832",
        shares: "13,396",
        comments: "43,566",
        song_count: 50,
        play_count: "4.05亿",
    },
    DetailLiteral {
        name: "网易云全球说唱榜",
        favorites: "4,157",
        shares: "44",
        comments: "114",
        song_count: 10,
        play_count: "0.02亿",
    },
    DetailLiteral {
        name: "潮流风向榜",
        favorites: "4,785",
        shares: "47",
        comments: "75",
        song_count: 10,
        play_count: "0.05亿",
    },
];

pub(super) const HEADLINE_METRICS: [(&str, &str, &str); 4] = [
    ("总播放量", "245亿+", "所有榜单累计播放"),
    ("总歌曲数", "850+", "所有榜单歌曲总和"),
    ("总收藏量", "2250万+", "所有榜单收藏总量"),
    ("MV歌曲占比", "15.3%", "有MV的歌曲比例"),
];

/// Month the snapshot was taken.
pub(super) const SNAPSHOT_YEAR_MONTH: (i32, u32) = (2025, 11);

pub(super) const DATA_SOURCE: &str = "网易云音乐官方榜单";
