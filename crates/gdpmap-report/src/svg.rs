//! SVG tile choropleth.

use std::io::Write;

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::chart::{ChoroplethChart, SeriesKind};
use crate::render::ChartRenderer;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const MISSING_FILL: &str = "#bdbdbd";
const NO_DATA_FILL: &str = "#fdd49e";
const LOW_FILL: (u8, u8, u8) = (0xde, 0xeb, 0xf7);
const HIGH_FILL: (u8, u8, u8) = (0x08, 0x30, 0x6b);

/// Tile grid geometry.
#[derive(Debug, Clone, Copy)]
pub struct SvgOptions {
    pub columns: usize,
    pub tile_width: u32,
    pub tile_height: u32,
    pub gap: u32,
    pub margin: u32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            columns: 16,
            tile_width: 56,
            tile_height: 36,
            gap: 4,
            margin: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer {
    pub options: SvgOptions,
}

impl SvgRenderer {
    pub fn new(options: SvgOptions) -> Self {
        Self { options }
    }
}

impl ChartRenderer for SvgRenderer {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, chart: &ChoroplethChart, out: &mut dyn Write) -> Result<()> {
        let opts = self.options;
        let columns = opts.columns.max(1);
        let tiles = chart.tiles();
        let rows = tiles.len().div_ceil(columns).max(1);
        let pitch_x = opts.tile_width + opts.gap;
        let pitch_y = opts.tile_height + opts.gap;
        let title_height = 40;
        let legend_height = 3 * 22 + 10;
        let grid_top = opts.margin + title_height;
        let legend_top = grid_top + rows as u32 * pitch_y + 10;
        let width = 2 * opts.margin + columns as u32 * pitch_x;
        let height = legend_top + legend_height + opts.margin;
        let range = chart.value_range();

        let mut writer = Writer::new_with_indent(out, b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        let mut root = BytesStart::new("svg");
        root.push_attribute(("xmlns", SVG_NS));
        root.push_attribute(("width", width.to_string().as_str()));
        root.push_attribute(("height", height.to_string().as_str()));
        root.push_attribute(("viewBox", format!("0 0 {width} {height}").as_str()));
        writer.write_event(Event::Start(root))?;

        write_text_element(&mut writer, "title", &[], &chart.title)?;
        write_text_element(
            &mut writer,
            "text",
            &[
                ("class", "title"),
                ("x", &opts.margin.to_string()),
                ("y", &(opts.margin + 20).to_string()),
                ("font-family", "sans-serif"),
                ("font-size", "18"),
            ],
            &chart.title,
        )?;

        let mut grid = BytesStart::new("g");
        grid.push_attribute(("class", "tiles"));
        writer.write_event(Event::Start(grid))?;
        for (idx, (code, kind, value)) in tiles.iter().enumerate() {
            let x = opts.margin + (idx % columns) as u32 * pitch_x;
            let y = grid_top + (idx / columns) as u32 * pitch_y;
            let fill = tile_fill(*kind, *value, range);
            let tooltip = tile_tooltip(chart, code, *kind, *value);

            let mut group = BytesStart::new("g");
            group.push_attribute(("id", format!("country-{code}").as_str()));
            group.push_attribute(("class", kind_class(*kind)));
            writer.write_event(Event::Start(group))?;
            write_text_element(&mut writer, "title", &[], &tooltip)?;
            write_rect(&mut writer, x, y, opts.tile_width, opts.tile_height, &fill)?;
            let label_fill = if is_dark(*kind, *value, range) {
                "#ffffff"
            } else {
                "#222222"
            };
            write_text_element(
                &mut writer,
                "text",
                &[
                    ("x", &(x + opts.tile_width / 2).to_string()),
                    ("y", &(y + opts.tile_height / 2 + 5).to_string()),
                    ("text-anchor", "middle"),
                    ("font-family", "sans-serif"),
                    ("font-size", "13"),
                    ("fill", label_fill),
                ],
                &code.to_uppercase(),
            )?;
            writer.write_event(Event::End(BytesEnd::new("g")))?;
        }
        writer.write_event(Event::End(BytesEnd::new("g")))?;

        let mut legend = BytesStart::new("g");
        legend.push_attribute(("class", "legend"));
        writer.write_event(Event::Start(legend))?;
        for (idx, series) in chart.series.iter().enumerate() {
            let y = legend_top + idx as u32 * 22;
            let swatch = match series.kind {
                SeriesKind::Gdp => rgb_hex(HIGH_FILL),
                SeriesKind::Missing => MISSING_FILL.to_string(),
                SeriesKind::NoData => NO_DATA_FILL.to_string(),
            };
            write_rect(&mut writer, opts.margin, y, 16, 16, &swatch)?;
            let label = format!("{} ({})", series.label, series.values.len());
            write_text_element(
                &mut writer,
                "text",
                &[
                    ("x", &(opts.margin + 24).to_string()),
                    ("y", &(y + 13).to_string()),
                    ("font-family", "sans-serif"),
                    ("font-size", "13"),
                ],
                &label,
            )?;
        }
        writer.write_event(Event::End(BytesEnd::new("g")))?;

        writer.write_event(Event::End(BytesEnd::new("svg")))?;
        Ok(())
    }
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    let mut start = BytesStart::new(name);
    for attribute in attributes {
        start.push_attribute(*attribute);
    }
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_rect<W: Write>(
    writer: &mut Writer<W>,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    fill: &str,
) -> Result<()> {
    let mut rect = BytesStart::new("rect");
    rect.push_attribute(("x", x.to_string().as_str()));
    rect.push_attribute(("y", y.to_string().as_str()));
    rect.push_attribute(("width", width.to_string().as_str()));
    rect.push_attribute(("height", height.to_string().as_str()));
    rect.push_attribute(("rx", "3"));
    rect.push_attribute(("fill", fill));
    writer.write_event(Event::Empty(rect))?;
    Ok(())
}

fn kind_class(kind: SeriesKind) -> &'static str {
    match kind {
        SeriesKind::Gdp => "gdp",
        SeriesKind::Missing => "missing",
        SeriesKind::NoData => "no-data",
    }
}

fn tile_tooltip(chart: &ChoroplethChart, code: &str, kind: SeriesKind, value: Option<f64>) -> String {
    let name = chart.names.get(code).map_or(code, String::as_str);
    match (kind, value) {
        (SeriesKind::Gdp, Some(value)) => format!("{name}: {value:.2}"),
        (SeriesKind::Missing, _) => format!("{name}: missing from World Bank data"),
        _ => format!("{name}: no GDP data"),
    }
}

/// Position of `value` within `range`, 0.0 when the range is empty.
fn shade(value: f64, range: Option<(f64, f64)>) -> f64 {
    match range {
        Some((low, high)) if high > low => ((value - low) / (high - low)).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

fn tile_fill(kind: SeriesKind, value: Option<f64>, range: Option<(f64, f64)>) -> String {
    match (kind, value) {
        (SeriesKind::Gdp, Some(value)) => rgb_hex(mix(LOW_FILL, HIGH_FILL, shade(value, range))),
        (SeriesKind::Missing, _) => MISSING_FILL.to_string(),
        _ => NO_DATA_FILL.to_string(),
    }
}

fn is_dark(kind: SeriesKind, value: Option<f64>, range: Option<(f64, f64)>) -> bool {
    matches!((kind, value), (SeriesKind::Gdp, Some(v)) if shade(v, range) > 0.5)
}

fn mix(low: (u8, u8, u8), high: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let channel = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    (
        channel(low.0, high.0),
        channel(low.1, high.1),
        channel(low.2, high.2),
    )
}

fn rgb_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_spans_low_to_high() {
        assert_eq!(shade(10.0, Some((10.0, 12.0))), 0.0);
        assert_eq!(shade(12.0, Some((10.0, 12.0))), 1.0);
        assert_eq!(shade(11.0, Some((11.0, 11.0))), 0.0);
    }

    #[test]
    fn fills_follow_series() {
        let range = Some((10.0, 12.0));
        assert_eq!(tile_fill(SeriesKind::Gdp, Some(12.0), range), "#08306b");
        assert_eq!(tile_fill(SeriesKind::Gdp, Some(10.0), range), "#deebf7");
        assert_eq!(tile_fill(SeriesKind::Missing, None, range), MISSING_FILL);
        assert_eq!(tile_fill(SeriesKind::NoData, None, range), NO_DATA_FILL);
    }
}
