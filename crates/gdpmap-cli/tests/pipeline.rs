use std::fs;
use std::path::PathBuf;

use gdpmap_cli::pipeline::{load_plot_countries, reconcile_plot, run_years};
use gdpmap_model::{CodeInfo, GdpInfo, PrefilterMode};
use gdpmap_standards::{MapConfig, OutputFormat, PlotConfig};
use tempfile::TempDir;

const CODES: &str = "\
ISO3166-1-Alpha-2,ISO3166-1-Alpha-3
US,USA
BR,BRA
SO,SOM
XK,XKX
";

const GDP: &str = "\
Country Name,Country Code,2000,2010
United States,USA,10250000000000,14990000000000
Brazil,BRA,655400000000.5,
Somalia,SOM,,
";

const COUNTRIES: &str = "\
code,name
us,United States
br,Brazil
so,Somalia
xk,Kosovo
zz,Nowhere
";

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn config(dir: &TempDir, format: OutputFormat) -> MapConfig {
    let mut config = MapConfig::rooted_at(dir.path());
    config.codes = CodeInfo::new(write(dir, "codes.csv", CODES));
    config.gdp = GdpInfo::new(write(dir, "gdp.csv", GDP));
    config.plot = PlotConfig {
        countries: Some(write(dir, "countries.csv", COUNTRIES)),
        prefilter: PrefilterMode::CaseInsensitive,
    };
    config.output.format = format;
    config
}

#[test]
fn maps_each_year_and_writes_charts() {
    let dir = TempDir::new().expect("tempdir");
    let config = config(&dir, OutputFormat::Both);

    let results = run_years(&config, &["2000", "2010"], true).expect("run");
    assert_eq!(results.len(), 2);

    let y2000 = &results[0].mapping;
    assert_eq!(y2000.year, "2000");
    assert_eq!(y2000.values.len(), 2);
    assert_eq!(y2000.values["br"], 655_400_000_000f64.log10());
    assert_eq!(
        y2000.missing.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["xk", "zz"]
    );
    assert_eq!(
        y2000.no_data.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["so"]
    );

    let y2010 = &results[1].mapping;
    assert_eq!(y2010.values.len(), 1);
    assert!(y2010.no_data.contains("br"));

    let out = dir.path().join("output");
    for year in ["2000", "2010"] {
        assert!(out.join(format!("isp_gdp_world_code_{year}.svg")).is_file());
        assert!(out.join(format!("isp_gdp_world_code_{year}.json")).is_file());
    }
    assert_eq!(results[0].outputs.len(), 2);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let config = config(&dir, OutputFormat::Svg);
    let results = run_years(&config, &["2010"], false).expect("run");
    assert!(results[0].outputs.is_empty());
    assert!(!dir.path().join("output").exists());
}

#[test]
fn rejects_years_outside_range_before_loading() {
    let dir = TempDir::new().expect("tempdir");
    let mut config = config(&dir, OutputFormat::Svg);
    config.gdp.gdpfile = dir.path().join("absent.csv");
    let err = run_years(&config, &["1959"], true).unwrap_err();
    assert!(err.to_string().contains("1959"));
}

#[test]
fn rejects_years_with_surrounding_whitespace() {
    let dir = TempDir::new().expect("tempdir");
    let config = config(&dir, OutputFormat::Svg);
    let err = run_years(&config, &["2010 "], false).unwrap_err();
    assert!(err.to_string().contains("outside the dataset range"));
}

#[test]
fn reconcile_reports_codes_outside_code_file() {
    let dir = TempDir::new().expect("tempdir");
    let config = config(&dir, OutputFormat::Svg);
    let output = reconcile_plot(&config).expect("reconcile");
    assert_eq!(output.plot_countries, 5);
    assert_eq!(output.reconciliation.matched.len(), 3);
    assert_eq!(
        output
            .reconciliation
            .unmatched
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>(),
        vec!["xk"]
    );
    assert!(output.not_in_code_file.contains("zz"));
}

#[test]
fn built_in_registry_is_used_without_country_file() {
    let countries = load_plot_countries(&PlotConfig::default()).expect("registry");
    assert!(countries.contains("us"));
    assert!(countries.len() > 100);
}
