//! Self-contained HTML rendering of a [`Dashboard`].

use std::fmt::Write;

use super::layout::{Dashboard, Panel, PanelWidth, Tab};
use super::widgets::{TableView, Widget};
use crate::dataset::HeadlineMetric;

pub const DEFAULT_PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Clone, Debug)]
pub struct PageOptions {
    pub plotly_js_url: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        PageOptions {
            plotly_js_url: DEFAULT_PLOTLY_JS_URL.to_owned(),
        }
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// JSON placed inside a `<script>` element must not close it early.
fn script_safe_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

pub fn render_page(dashboard: &Dashboard, options: &PageOptions) -> String {
    let mut figures = serde_json::Map::new();
    let mut tab_buttons = String::new();
    let mut tab_panels = String::new();
    let mut chart_index = 0usize;

    for (i, tab) in dashboard.tabs.iter().enumerate() {
        let active = if i == 0 { " active" } else { "" };
        let _ = write!(
            tab_buttons,
            r#"<button class="tab-button{active}" data-tab="{id}">{title}</button>"#,
            id = html_escape(&tab.id),
            title = html_escape(&tab.title),
        );
        tab_panels.push_str(&render_tab(tab, active, &mut chart_index, &mut figures));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
    <script src="{plotly}"></script>
</head>
<body>
    <div class="main-header">{icon} {title}</div>
    <nav class="tabs">{tab_buttons}</nav>
    {tab_panels}
    <hr>
    {footer}
    <script type="application/json" id="figures">{figures}</script>
    <script>{js}</script>
</body>
</html>"#,
        title = html_escape(&dashboard.title),
        icon = html_escape(&dashboard.icon),
        css = inline_css(),
        plotly = html_escape(&options.plotly_js_url),
        tab_buttons = tab_buttons,
        tab_panels = tab_panels,
        footer = render_footer(dashboard),
        figures = script_safe_json(&serde_json::Value::Object(figures)),
        js = inline_javascript(),
    )
}

fn render_tab(
    tab: &Tab,
    active: &str,
    chart_index: &mut usize,
    figures: &mut serde_json::Map<String, serde_json::Value>,
) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<section class="tab-panel{active}" id="tab-{id}">"#,
        id = html_escape(&tab.id)
    );

    if !tab.metrics.is_empty() {
        out.push_str(r#"<div class="metrics">"#);
        for metric in tab.metrics.iter() {
            out.push_str(&render_metric(metric));
        }
        out.push_str("</div>");
    }

    out.push_str(r#"<div class="panels">"#);
    for panel in tab.panels.iter() {
        out.push_str(&render_panel(panel, chart_index, figures));
    }
    out.push_str("</div></section>");
    out
}

fn render_metric(metric: &HeadlineMetric) -> String {
    format!(
        r#"<div class="metric-card"><h3>{title}</h3><h1>{value}</h1><p>{caption}</p></div>"#,
        title = html_escape(&metric.title),
        value = html_escape(&metric.value_display),
        caption = html_escape(&metric.caption),
    )
}

fn render_panel(
    panel: &Panel,
    chart_index: &mut usize,
    figures: &mut serde_json::Map<String, serde_json::Value>,
) -> String {
    let width = match panel.width {
        PanelWidth::Half => "half",
        PanelWidth::Full => "full",
    };
    let heading = panel
        .heading
        .as_deref()
        .map(|h| format!(r#"<div class="sub-header">{}</div>"#, html_escape(h)))
        .unwrap_or_default();

    let body = match (&panel.widget, panel.widget.to_plotly()) {
        (Widget::Table(table), _) => render_table(table),
        (_, Some(figure)) => {
            let id = format!("chart-{}", *chart_index);
            *chart_index += 1;
            figures.insert(id.clone(), figure);
            format!(r#"<div class="chart" id="{id}"></div>"#)
        }
        (_, None) => String::new(),
    };

    format!(r#"<div class="panel {width}">{heading}{body}</div>"#)
}

fn render_table(table: &TableView) -> String {
    let class = if table.sortable {
        "data-table sortable"
    } else {
        "data-table"
    };
    let mut out = format!(r#"<div class="table-wrap"><table class="{class}"><thead><tr>"#);
    for column in table.columns.iter() {
        let _ = write!(out, "<th>{}</th>", html_escape(column));
    }
    out.push_str("</tr></thead><tbody>");
    for row in table.rows.iter() {
        out.push_str("<tr>");
        for cell in row.iter() {
            let _ = write!(out, "<td>{}</td>", html_escape(cell));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table></div>");
    out
}

fn render_footer(dashboard: &Dashboard) -> String {
    let footer = &dashboard.footer;
    format!(
        r#"<div class="footer"><p>{title} | 数据来源：{source}</p><p>数据时间：{month} | 技术支持：{tech}</p></div>"#,
        title = html_escape(&footer.title),
        source = html_escape(&footer.data_source),
        month = html_escape(&footer.snapshot_month),
        tech = html_escape(&footer.tech_stack),
    )
}

fn inline_css() -> &'static str {
    r#"
body { font-family: -apple-system, "PingFang SC", "Microsoft YaHei", sans-serif; margin: 0 2rem; background: #fafafa; }
.main-header { font-size: 3.5rem; font-weight: bold; color: #e84393; text-align: center; margin: 1rem 0 2rem; text-shadow: 2px 2px 4px rgba(0,0,0,0.3); }
.sub-header { font-size: 1.8rem; font-weight: bold; color: #6c5ce7; margin-top: 2rem; margin-bottom: 1rem; }
.metric-card { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); border-radius: 10px; padding: 20px; color: white; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
.metrics { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
.tabs { display: flex; gap: 0.5rem; border-bottom: 2px solid #eee; }
.tab-button { border: none; background: none; font-size: 1.1rem; padding: 0.6rem 1rem; cursor: pointer; }
.tab-button.active { border-bottom: 3px solid #e84393; color: #e84393; }
.tab-panel { display: none; }
.tab-panel.active { display: block; }
.panels { display: flex; flex-wrap: wrap; gap: 1rem; }
.panel.half { flex: 1 1 calc(50% - 1rem); min-width: 360px; }
.panel.full { flex: 1 1 100%; }
.table-wrap { max-height: 400px; overflow-y: auto; }
.data-table { width: 100%; border-collapse: collapse; }
.data-table th, .data-table td { padding: 0.4rem 0.8rem; border-bottom: 1px solid #ddd; text-align: left; }
.data-table.sortable th { cursor: pointer; }
.footer { text-align: center; color: #666; padding: 20px; }
"#
}

fn inline_javascript() -> &'static str {
    r#"
(function () {
    var figures = JSON.parse(document.getElementById('figures').textContent);
    function draw(panel) {
        panel.querySelectorAll('.chart').forEach(function (el) {
            var figure = figures[el.id];
            if (!figure || el.dataset.drawn) { return; }
            Plotly.newPlot(el, figure.data, figure.layout, { responsive: true });
            el.dataset.drawn = '1';
        });
    }
    document.querySelectorAll('.tab-button').forEach(function (button) {
        button.addEventListener('click', function () {
            document.querySelectorAll('.tab-button, .tab-panel').forEach(function (el) {
                el.classList.remove('active');
            });
            button.classList.add('active');
            var panel = document.getElementById('tab-' + button.dataset.tab);
            panel.classList.add('active');
            draw(panel);
        });
    });
    document.querySelectorAll('table.sortable').forEach(function (table) {
        table.querySelectorAll('th').forEach(function (th, column) {
            var descending = true;
            th.addEventListener('click', function () {
                var body = table.tBodies[0];
                var rows = Array.prototype.slice.call(body.rows);
                rows.sort(function (a, b) {
                    var x = a.cells[column].textContent, y = b.cells[column].textContent;
                    var nx = parseFloat(x), ny = parseFloat(y);
                    var order = (!isNaN(nx) && !isNaN(ny)) ? nx - ny : x.localeCompare(y);
                    return descending ? -order : order;
                });
                descending = !descending;
                rows.forEach(function (row) { body.appendChild(row); });
            });
        });
    });
    var first = document.querySelector('.tab-panel.active');
    if (first) { draw(first); }
})();
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ChartDatasetProvider;

    fn page() -> String {
        let dashboard = Dashboard::build(&ChartDatasetProvider::new()).unwrap();
        render_page(&dashboard, &PageOptions::default())
    }

    #[test]
    fn escapes_html() {
        assert_eq!(
            html_escape(r#"<a href="x">R&B's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;B&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn page_has_title_tabs_and_footer() {
        let html = page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>网易云音乐榜单数据分析大屏</title>"));
        assert_eq!(html.matches(r#"class="tab-button"#).count(), 4);
        assert_eq!(html.matches(r#"<section class="tab-panel"#).count(), 4);
        assert!(html.contains("数据时间：2025年11月"));
        assert!(html.contains(DEFAULT_PLOTLY_JS_URL));
    }

    #[test]
    fn one_container_per_chart_and_table() {
        let html = page();

        assert_eq!(html.matches(r#"<div class="chart" id="chart-"#).count(), 9);
        assert_eq!(html.matches("<table class=").count(), 2);
        assert_eq!(html.matches(r#"class="metric-card""#).count(), 4);
        assert!(html.contains(r#"<table class="data-table sortable">"#));
    }

    #[test]
    fn embedded_json_cannot_close_script() {
        let mut dashboard = Dashboard::build(&ChartDatasetProvider::new()).unwrap();
        if let Widget::Bar(bar) = &mut dashboard.tabs[0].panels[0].widget {
            bar.categories[0] = "</script><script>alert(1)</script>".to_string();
        }

        let html = render_page(&dashboard, &PageOptions::default());

        assert!(!html.contains("</script><script>alert(1)"));
        assert!(html.contains(r#"<\/script><script>alert(1)<\/script>"#));
    }
}
