//! Charts module - static chart rendering

mod renderer;

pub use renderer::{
    render_bar_chart, render_scatter_chart, ChartError, BAR_CHART_FILE, SCATTER_CHART_FILE,
};
