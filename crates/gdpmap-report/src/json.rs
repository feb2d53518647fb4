use std::io::Write;

use anyhow::Result;

use crate::chart::ChoroplethChart;
use crate::render::ChartRenderer;

/// Writes the chart model as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ChartRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, chart: &ChoroplethChart, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, chart)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}
