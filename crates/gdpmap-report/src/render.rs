use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::chart::ChoroplethChart;

/// Draws a chart into a byte stream.
pub trait ChartRenderer {
    /// File extension of the produced artifact, without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, chart: &ChoroplethChart, out: &mut dyn Write) -> Result<()>;
}

/// Default artifact name for a year.
pub fn output_file_name(year: &str, extension: &str) -> String {
    format!("isp_gdp_world_code_{year}.{extension}")
}

/// Render `chart` into `output_dir`, creating the directory when needed.
pub fn write_chart(
    renderer: &dyn ChartRenderer,
    chart: &ChoroplethChart,
    output_dir: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;
    let path = output_dir.join(output_file_name(&chart.year, renderer.extension()));
    let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    renderer
        .render(chart, &mut writer)
        .with_context(|| format!("render {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    info!(year = %chart.year, path = %path.display(), "wrote chart");
    Ok(path)
}
