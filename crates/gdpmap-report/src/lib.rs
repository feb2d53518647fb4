//! Chart rendering for mapped GDP.
//!
//! - **SVG**: a tile choropleth, one labelled tile per country
//! - **JSON**: the chart model itself, for other plotting tools

mod chart;
mod json;
mod render;
mod svg;

pub use chart::{
    ChartSeries, ChoroplethChart, MISSING_LABEL, NO_DATA_LABEL, SeriesKind, chart_title,
    gdp_label,
};
pub use json::JsonRenderer;
pub use render::{ChartRenderer, output_file_name, write_chart};
pub use svg::{SvgOptions, SvgRenderer};
