use serde::Serialize;

use super::widgets::{
    BarChart, ColorScale, ComboChart, LineChart, Palette, PieChart, Series, StackedBarChart,
    TableView, Widget, PINK, PURPLE,
};
use crate::dataset::{ranked_play_counts, ChartDatasetProvider, HeadlineMetric, ParseError};

const PAGE_TITLE: &str = "网易云音乐榜单数据分析大屏";
const PAGE_ICON: &str = "🎵";
const CHART_HEIGHT: u32 = 400;
const RANKING_CHART_HEIGHT: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelWidth {
    Half,
    Full,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Panel {
    pub heading: Option<String>,
    pub width: PanelWidth,
    pub widget: Widget,
}

impl Panel {
    fn half(heading: Option<&str>, widget: Widget) -> Self {
        Panel {
            heading: heading.map(str::to_owned),
            width: PanelWidth::Half,
            widget,
        }
    }

    fn full(heading: Option<&str>, widget: Widget) -> Self {
        Panel {
            heading: heading.map(str::to_owned),
            width: PanelWidth::Full,
            widget,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tab {
    pub id: String,
    pub title: String,
    pub metrics: Vec<HeadlineMetric>,
    pub panels: Vec<Panel>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Footer {
    pub title: String,
    pub data_source: String,
    pub snapshot_month: String,
    pub tech_stack: String,
}

/// The whole page: every dataset mapped to the widget that displays it,
/// grouped into tabs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub icon: String,
    pub tabs: Vec<Tab>,
    pub footer: Footer,
}

fn owned(items: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    items.into_iter().map(Into::into).collect()
}

impl Dashboard {
    /// Fails only if a detail-table play count cannot be parsed for the
    /// ranking chart.
    pub fn build(datasets: &ChartDatasetProvider) -> Result<Dashboard, ParseError> {
        let tabs = vec![
            overview_tab(datasets),
            artists_tab(datasets),
            trends_tab(datasets),
            details_tab(datasets)?,
        ];

        Ok(Dashboard {
            title: PAGE_TITLE.to_owned(),
            icon: PAGE_ICON.to_owned(),
            tabs,
            footer: Footer {
                title: PAGE_TITLE.to_owned(),
                data_source: datasets.data_source().to_owned(),
                // An invalid month is reported by `ChartDatasetProvider::check`.
                snapshot_month: datasets
                    .snapshot_month()
                    .map(|month| month.format("%Y年%-m月").to_string())
                    .unwrap_or_default(),
                tech_stack: "axum + Plotly".to_owned(),
            },
        })
    }

    pub fn widget_count(&self) -> usize {
        self.tabs.iter().map(|tab| tab.panels.len()).sum()
    }
}

fn overview_tab(datasets: &ChartDatasetProvider) -> Tab {
    let volumes = datasets.get_chart_volumes();
    let song_counts = datasets.get_song_counts();
    let mv = datasets.get_mv_distribution();

    let volumes_bar = Widget::Bar(BarChart {
        title: "各榜单播放量分布".to_owned(),
        x_label: "榜单".to_owned(),
        y_label: "播放量(亿)".to_owned(),
        categories: owned(volumes.iter().map(|c| c.chart_name.as_str())),
        values: volumes.iter().map(|c| c.play_count_hundred_million).collect(),
        color_scale: ColorScale::Viridis,
        height: CHART_HEIGHT,
    });

    let songs_donut = Widget::Pie(PieChart {
        title: "各榜单歌曲数量占比".to_owned(),
        labels: owned(song_counts.iter().map(|r| r.chart_name.as_str())),
        values: song_counts.iter().map(|r| r.song_count as f64).collect(),
        hole: 0.3,
        palette: Palette::RdBu,
    });

    let mv_stacked = Widget::StackedBar(StackedBarChart {
        title: "各榜单MV分布情况".to_owned(),
        x_title: "榜单名称".to_owned(),
        y_title: "歌曲数量".to_owned(),
        categories: owned(mv.iter().map(|c| c.chart_name.as_str())),
        series: vec![
            Series {
                name: "有MV".to_owned(),
                values: mv
                    .iter()
                    .map(|c| c.mv_count.unwrap_or_default() as f64)
                    .collect(),
                color: PINK.to_owned(),
            },
            Series {
                name: "无MV".to_owned(),
                values: mv
                    .iter()
                    .map(|c| c.no_mv_count.unwrap_or_default() as f64)
                    .collect(),
                color: PURPLE.to_owned(),
            },
        ],
        height: CHART_HEIGHT,
    });

    Tab {
        id: "overview".to_owned(),
        title: "📊 榜单概览".to_owned(),
        metrics: datasets.get_headline_metrics().to_vec(),
        panels: vec![
            Panel::half(Some("各榜单播放量对比"), volumes_bar),
            Panel::half(Some("各榜单歌曲数量"), songs_donut),
            Panel::full(Some("MV分布情况"), mv_stacked),
        ],
    }
}

fn artists_tab(datasets: &ChartDatasetProvider) -> Tab {
    let rankings = datasets.get_artist_rankings();
    let top_ten = &rankings[..rankings.len().min(10)];

    let table = Widget::Table(TableView {
        columns: owned(["歌手", "上榜次数", "主要榜单"]),
        rows: rankings
            .iter()
            .map(|artist| {
                vec![
                    artist.artist_name.clone(),
                    artist.appearance_count.to_string(),
                    artist.membership_display(),
                ]
            })
            .collect(),
        sortable: true,
    });

    let top_bar = Widget::Bar(BarChart {
        title: "歌手上榜次数排名".to_owned(),
        x_label: "歌手".to_owned(),
        y_label: "上榜次数".to_owned(),
        categories: owned(top_ten.iter().map(|a| a.artist_name.as_str())),
        values: top_ten.iter().map(|a| a.appearance_count as f64).collect(),
        color_scale: ColorScale::Plasma,
        height: CHART_HEIGHT,
    });

    let distribution = datasets.get_artist_distribution();
    let distribution_pie = Widget::Pie(PieChart {
        title: "歌手跨榜单分布".to_owned(),
        labels: distribution.keys().map(|k| k.to_string()).collect(),
        values: distribution.values().map(|v| *v as f64).collect(),
        hole: 0.0,
        palette: Palette::Rainbow,
    });

    Tab {
        id: "artists".to_owned(),
        title: "🎤 歌手分析".to_owned(),
        metrics: Vec::new(),
        panels: vec![
            Panel::full(Some("热门歌手排行榜"), table),
            Panel::half(Some("歌手上榜次数TOP10"), top_bar),
            Panel::half(Some("多榜单歌手分布"), distribution_pie),
        ],
    }
}

fn trends_tab(datasets: &ChartDatasetProvider) -> Tab {
    let genres = datasets.get_genre_stats();
    let releases = datasets.get_release_type_stats();
    let genre_names = owned(genres.iter().map(|g| g.genre_name.as_str()));

    let genre_bar = Widget::Bar(BarChart {
        title: "各音乐类型歌曲数量".to_owned(),
        x_label: "音乐类型".to_owned(),
        y_label: "歌曲数量".to_owned(),
        categories: genre_names.clone(),
        values: genres.iter().map(|g| g.song_count as f64).collect(),
        color_scale: ColorScale::Sunset,
        height: CHART_HEIGHT,
    });

    let genre_line = Widget::Line(LineChart {
        title: "各音乐类型平均播放量".to_owned(),
        x_label: "音乐类型".to_owned(),
        y_label: "平均播放量(万)".to_owned(),
        categories: genre_names,
        values: genres.iter().map(|g| g.avg_play_count_ten_thousand).collect(),
        color: PINK.to_owned(),
        line_width: 4.0,
        spline: true,
        height: CHART_HEIGHT,
    });

    let release_combo = Widget::Combo(ComboChart {
        title: "不同发布类型的歌曲数量及增长率".to_owned(),
        categories: owned(releases.iter().map(|r| r.release_type.as_str())),
        bars: Series {
            name: "数量".to_owned(),
            values: releases.iter().map(|r| r.count as f64).collect(),
            color: PURPLE.to_owned(),
        },
        line: Series {
            name: "增长率%".to_owned(),
            values: releases.iter().map(|r| r.growth_rate_percent).collect(),
            color: PINK.to_owned(),
        },
        line_width: 3.0,
        y_title: "歌曲数量".to_owned(),
        y2_title: "增长率%".to_owned(),
        height: CHART_HEIGHT,
    });

    Tab {
        id: "trends".to_owned(),
        title: "📈 趋势洞察".to_owned(),
        metrics: Vec::new(),
        panels: vec![
            Panel::half(Some("音乐类型热度分析"), genre_bar),
            Panel::half(None, genre_line),
            Panel::full(Some("发布时间分析"), release_combo),
        ],
    }
}

fn details_tab(datasets: &ChartDatasetProvider) -> Result<Tab, ParseError> {
    let details = datasets.get_detail_table();
    let ranked = ranked_play_counts(details)?;

    let table = Widget::Table(TableView {
        columns: owned(["榜单名称", "收藏量", "转发量", "评论量", "歌曲数量", "播放次数"]),
        rows: details
            .iter()
            .map(|row| {
                vec![
                    row.chart_name.clone(),
                    row.favorites_display.clone(),
                    row.shares_display.clone(),
                    row.comments_display.clone(),
                    row.song_count.to_string(),
                    row.play_count_display.clone(),
                ]
            })
            .collect(),
        sortable: false,
    });

    let ranking_bar = Widget::Bar(BarChart {
        title: "播放次数排行榜".to_owned(),
        x_label: "榜单名称".to_owned(),
        y_label: "播放次数(亿)".to_owned(),
        categories: owned(ranked.iter().map(|r| r.record.chart_name.as_str())),
        values: ranked.iter().map(|r| r.play_count_hundred_million).collect(),
        color_scale: ColorScale::Thermal,
        height: RANKING_CHART_HEIGHT,
    });

    Ok(Tab {
        id: "details".to_owned(),
        title: "🔍 数据详情".to_owned(),
        metrics: Vec::new(),
        panels: vec![
            Panel::full(Some("榜单数据详情表"), table),
            Panel::full(Some("播放量排行榜"), ranking_bar),
        ],
    })
}
