use std::fs;

use gdpmap_model::{GdpMapping, PlotCountries};
use gdpmap_report::{
    ChartRenderer, ChoroplethChart, JsonRenderer, MISSING_LABEL, NO_DATA_LABEL, SvgRenderer,
    output_file_name, write_chart,
};

fn mapping() -> GdpMapping {
    let mut mapping = GdpMapping::new("2010");
    mapping.values.insert("us".to_string(), 10.5);
    mapping.missing.insert("xk".to_string());
    mapping
}

#[test]
fn json_chart_snapshot() {
    let chart = ChoroplethChart::from_mapping(&mapping());
    insta::assert_json_snapshot!(chart, @r#"
    {
      "title": "GDP by country for 2010 (log scale), unified by common country code",
      "year": "2010",
      "series": [
        {
          "label": "GDP For 2010",
          "kind": "gdp",
          "values": {
            "us": 10.5
          }
        },
        {
          "label": "Missing from World Bank Data",
          "kind": "missing",
          "values": {
            "xk": null
          }
        },
        {
          "label": "No GDP Data",
          "kind": "no-data",
          "values": {}
        }
      ]
    }
    "#);
}

#[test]
fn svg_has_a_tile_per_country_and_a_legend() {
    let countries: PlotCountries = [("us", "United States"), ("xk", "Kosovo")]
        .into_iter()
        .collect();
    let chart = ChoroplethChart::from_mapping(&mapping()).with_names(&countries);
    let mut out = Vec::new();
    SvgRenderer::default()
        .render(&chart, &mut out)
        .expect("render svg");
    let svg = String::from_utf8(out).expect("utf8");

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("id=\"country-us\" class=\"gdp\""));
    assert!(svg.contains("id=\"country-xk\" class=\"missing\""));
    assert!(svg.contains("United States: 10.50"));
    assert!(svg.contains("GDP For 2010 (1)"));
    assert!(svg.contains(&format!("{MISSING_LABEL} (1)")));
    assert!(svg.contains(&format!("{NO_DATA_LABEL} (0)")));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn write_chart_uses_year_in_file_name() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output_dir = dir.path().join("maps");
    let chart = ChoroplethChart::from_mapping(&mapping());

    let svg_path = write_chart(&SvgRenderer::default(), &chart, &output_dir).expect("write svg");
    let json_path = write_chart(&JsonRenderer, &chart, &output_dir).expect("write json");

    assert_eq!(svg_path, output_dir.join("isp_gdp_world_code_2010.svg"));
    assert_eq!(json_path, output_dir.join(output_file_name("2010", "json")));
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("read json"))
            .expect("parse json");
    assert_eq!(json["series"][0]["values"]["us"], 10.5);
}
