//! Widget descriptions and their Plotly figure encoding.

use serde::Serialize;
use serde_json::{json, Value};

pub const PINK: &str = "#e84393";
pub const PURPLE: &str = "#6c5ce7";

/// Continuous color scales used to color bars by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScale {
    Viridis,
    Plasma,
    Sunset,
    Thermal,
}

impl ColorScale {
    fn stops(&self) -> &'static [&'static str] {
        match self {
            ColorScale::Viridis => &[
                "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779",
                "#6ece58", "#b5de2b", "#fde725",
            ],
            ColorScale::Plasma => &[
                "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953",
                "#fb9f3a", "#fdca26", "#f0f921",
            ],
            ColorScale::Sunset => &[
                "rgb(243, 231, 155)",
                "rgb(250, 196, 132)",
                "rgb(248, 160, 126)",
                "rgb(235, 127, 134)",
                "rgb(206, 102, 147)",
                "rgb(160, 89, 160)",
                "rgb(92, 83, 165)",
            ],
            ColorScale::Thermal => &[
                "rgb(3, 35, 51)",
                "rgb(13, 48, 100)",
                "rgb(53, 50, 155)",
                "rgb(93, 62, 153)",
                "rgb(126, 77, 143)",
                "rgb(158, 89, 135)",
                "rgb(193, 100, 121)",
                "rgb(225, 113, 97)",
                "rgb(246, 139, 69)",
                "rgb(251, 173, 60)",
                "rgb(246, 211, 70)",
                "rgb(231, 250, 90)",
            ],
        }
    }

    /// Plotly colorscale: evenly spaced `[position, color]` pairs over 0..=1.
    pub fn to_plotly(&self) -> Value {
        let stops = self.stops();
        let last = (stops.len() - 1) as f64;
        Value::Array(
            stops
                .iter()
                .enumerate()
                .map(|(i, color)| json!([i as f64 / last, color]))
                .collect(),
        )
    }
}

/// Discrete palettes for pie slices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    RdBu,
    Rainbow,
}

impl Palette {
    pub fn colors(&self) -> &'static [&'static str] {
        match self {
            Palette::RdBu => &[
                "rgb(103,0,31)",
                "rgb(178,24,43)",
                "rgb(214,96,77)",
                "rgb(244,165,130)",
                "rgb(253,219,199)",
                "rgb(247,247,247)",
                "rgb(209,229,240)",
                "rgb(146,197,222)",
                "rgb(67,147,195)",
                "rgb(33,102,172)",
                "rgb(5,48,97)",
            ],
            Palette::Rainbow => &[
                "rgb(150,0,90)",
                "rgb(0,0,200)",
                "rgb(0,25,255)",
                "rgb(0,152,255)",
                "rgb(44,255,150)",
                "rgb(151,255,0)",
                "rgb(255,234,0)",
                "rgb(255,111,0)",
                "rgb(255,0,0)",
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    pub color: String,
}

/// Bars colored by their own value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub color_scale: ColorScale,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Fraction of the radius cut out of the middle; 0 draws a full pie.
    pub hole: f64,
    pub palette: Palette,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StackedBarChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub color: String,
    pub line_width: f64,
    pub spline: bool,
    pub height: u32,
}

/// Bars on the primary axis with a line on a secondary, right-hand axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComboChart {
    pub title: String,
    pub categories: Vec<String>,
    pub bars: Series,
    pub line: Series,
    pub line_width: f64,
    pub y_title: String,
    pub y2_title: String,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub sortable: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    Bar(BarChart),
    Pie(PieChart),
    StackedBar(StackedBarChart),
    Line(LineChart),
    Combo(ComboChart),
    Table(TableView),
}

fn centered_title(text: &str) -> Value {
    json!({ "text": text, "x": 0.5 })
}

impl Widget {
    /// Plotly figure (`data` + `layout`) for chart widgets; `None` for tables,
    /// which are rendered as plain HTML.
    pub fn to_plotly(&self) -> Option<Value> {
        let figure = match self {
            Widget::Bar(bar) => json!({
                "data": [{
                    "type": "bar",
                    "x": bar.categories,
                    "y": bar.values,
                    "marker": {
                        "color": bar.values,
                        "colorscale": bar.color_scale.to_plotly(),
                        "showscale": true,
                        "colorbar": { "title": { "text": bar.y_label } },
                    },
                }],
                "layout": {
                    "title": centered_title(&bar.title),
                    "xaxis": { "title": { "text": bar.x_label } },
                    "yaxis": { "title": { "text": bar.y_label } },
                    "height": bar.height,
                },
            }),
            Widget::Pie(pie) => json!({
                "data": [{
                    "type": "pie",
                    "labels": pie.labels,
                    "values": pie.values,
                    "hole": pie.hole,
                    "marker": { "colors": pie.palette.colors() },
                }],
                "layout": {
                    "title": centered_title(&pie.title),
                },
            }),
            Widget::StackedBar(stacked) => {
                let traces: Vec<Value> = stacked
                    .series
                    .iter()
                    .map(|series| {
                        json!({
                            "type": "bar",
                            "name": series.name,
                            "x": stacked.categories,
                            "y": series.values,
                            "marker": { "color": series.color },
                        })
                    })
                    .collect();
                json!({
                    "data": traces,
                    "layout": {
                        "barmode": "stack",
                        "title": { "text": stacked.title },
                        "xaxis": { "title": { "text": stacked.x_title } },
                        "yaxis": { "title": { "text": stacked.y_title } },
                        "height": stacked.height,
                    },
                })
            }
            Widget::Line(line) => {
                let shape = if line.spline { "spline" } else { "linear" };
                json!({
                    "data": [{
                        "type": "scatter",
                        "mode": "lines+markers",
                        "x": line.categories,
                        "y": line.values,
                        "line": {
                            "color": line.color,
                            "width": line.line_width,
                            "shape": shape,
                        },
                    }],
                    "layout": {
                        "title": { "text": line.title },
                        "xaxis": { "title": { "text": line.x_label } },
                        "yaxis": { "title": { "text": line.y_label } },
                        "height": line.height,
                    },
                })
            }
            Widget::Combo(combo) => json!({
                "data": [
                    {
                        "type": "bar",
                        "name": combo.bars.name,
                        "x": combo.categories,
                        "y": combo.bars.values,
                        "marker": { "color": combo.bars.color },
                    },
                    {
                        "type": "scatter",
                        "name": combo.line.name,
                        "x": combo.categories,
                        "y": combo.line.values,
                        "yaxis": "y2",
                        "mode": "lines+markers",
                        "line": { "color": combo.line.color, "width": combo.line_width },
                    },
                ],
                "layout": {
                    "title": { "text": combo.title },
                    "yaxis": { "title": { "text": combo.y_title } },
                    "yaxis2": {
                        "title": { "text": combo.y2_title },
                        "overlaying": "y",
                        "side": "right",
                    },
                    "height": combo.height,
                },
            }),
            Widget::Table(_) => return None,
        };
        Some(figure)
    }
}
