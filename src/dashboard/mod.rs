mod html;
mod layout;
mod widgets;

pub use html::{render_page, PageOptions, DEFAULT_PLOTLY_JS_URL};
pub use layout::{Dashboard, Footer, Panel, PanelWidth, Tab};
pub use widgets::{
    BarChart, ColorScale, ComboChart, LineChart, Palette, PieChart, Series, StackedBarChart,
    TableView, Widget,
};
