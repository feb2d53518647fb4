use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info_span};

use gdpmap_cli::pipeline::{DEFAULT_YEARS, ReconcileOutput, YearOutput, reconcile_plot, run_years};
use gdpmap_model::PrefilterMode;
use gdpmap_standards::{MapConfig, OutputFormat, WORLD_COUNTRIES, default_data_root};

use crate::cli::{MapArgs, OutputFormatArg, PrefilterArg, SourceArgs};
use crate::summary::apply_table_style;

pub fn run_countries() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Country"]);
    apply_table_style(&mut table);
    for (code, name) in WORLD_COUNTRIES {
        table.add_row(vec![*code, *name]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_map(args: &MapArgs) -> Result<Vec<YearOutput>> {
    let mut config = load_config(&args.source)?;
    if let Some(dir) = &args.output_dir {
        config.output.dir = dir.clone();
    }
    if let Some(format) = args.format {
        config.output.format = match format {
            OutputFormatArg::Svg => OutputFormat::Svg,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Both => OutputFormat::Both,
        };
    }
    let years: Vec<&str> = if args.years.is_empty() {
        DEFAULT_YEARS.to_vec()
    } else {
        args.years.iter().map(String::as_str).collect()
    };
    let span = info_span!("map", years = years.len(), dry_run = args.dry_run);
    let _guard = span.enter();
    run_years(&config, &years, !args.dry_run)
}

pub fn run_reconcile(args: &SourceArgs) -> Result<ReconcileOutput> {
    let config = load_config(args)?;
    reconcile_plot(&config)
}

/// Configuration file (or defaults under the data root) with flag overrides
/// applied.
fn load_config(args: &SourceArgs) -> Result<MapConfig> {
    let mut config = match &args.config {
        Some(path) => MapConfig::load(path)
            .with_context(|| format!("load configuration {}", path.display()))?,
        None => MapConfig::rooted_at(&default_data_root()),
    };
    if let Some(path) = &args.codes_file {
        config.codes.codefile = path.clone();
    }
    if let Some(path) = &args.gdp_file {
        config.gdp.gdpfile = path.clone();
    }
    if let Some(path) = &args.countries {
        config.plot.countries = Some(path.clone());
    }
    if let Some(prefilter) = args.prefilter {
        config.plot.prefilter = match prefilter {
            PrefilterArg::CaseInsensitive => PrefilterMode::CaseInsensitive,
            PrefilterArg::UpperCase => PrefilterMode::UpperCase,
        };
    }
    debug!(
        codes = %config.codes.codefile.display(),
        gdp = %config.gdp.gdpfile.display(),
        prefilter = config.plot.prefilter.as_str(),
        "resolved configuration"
    );
    Ok(config)
}
