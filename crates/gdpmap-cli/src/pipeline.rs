//! Map-and-render pipeline shared by the `map` and `reconcile` commands.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use gdpmap_ingest::{Dialect, read_plot_countries};
use gdpmap_map::GdpSources;
use gdpmap_model::{GdpMapping, PlotCountries, Reconciliation};
use gdpmap_report::{ChartRenderer, ChoroplethChart, JsonRenderer, SvgRenderer, write_chart};
use gdpmap_standards::{MapConfig, PlotConfig, world_countries};

/// Years charted when none are requested.
pub const DEFAULT_YEARS: &[&str] = &["1960", "1980", "2000", "2010"];

/// Result of mapping one year.
#[derive(Debug)]
pub struct YearOutput {
    pub mapping: GdpMapping,
    /// Charts written for the year, in render order.
    pub outputs: Vec<PathBuf>,
}

/// Reconciliation of the plot countries with the GDP file's codes.
#[derive(Debug)]
pub struct ReconcileOutput {
    pub plot_countries: usize,
    pub reconciliation: Reconciliation,
    /// Plot codes the code file does not list at all.
    pub not_in_code_file: BTreeSet<String>,
}

/// The configured plot country file, or the built-in registry.
pub fn load_plot_countries(plot: &PlotConfig) -> Result<PlotCountries> {
    match &plot.countries {
        Some(path) => read_plot_countries(path, Dialect::default())
            .with_context(|| format!("load plot countries from {}", path.display())),
        None => Ok(world_countries()),
    }
}

/// Map every year over one load of the input files and render the charts
/// the configuration asks for. Nothing is written when `write` is false.
pub fn run_years<S: AsRef<str>>(
    config: &MapConfig,
    years: &[S],
    write: bool,
) -> Result<Vec<YearOutput>> {
    for year in years {
        config.gdp.check_year(year.as_ref())?;
    }
    let plot_countries = load_plot_countries(&config.plot)?;
    let sources = GdpSources::load(&config.gdp, &config.codes).context("load GDP sources")?;
    let mappings = sources
        .map_years(&plot_countries, years, config.plot.prefilter)
        .context("map GDP")?;

    let renderers = renderers(config);
    let mut results = Vec::with_capacity(mappings.len());
    for mapping in mappings {
        let span = info_span!("render", year = %mapping.year);
        let _guard = span.enter();
        let mut outputs = Vec::new();
        if write {
            let chart = ChoroplethChart::from_mapping(&mapping).with_names(&plot_countries);
            for renderer in &renderers {
                outputs.push(write_chart(renderer.as_ref(), &chart, &config.output.dir)?);
            }
        }
        results.push(YearOutput { mapping, outputs });
    }
    Ok(results)
}

/// Reconcile the plot countries found in the code file against the GDP
/// file's code vocabulary.
pub fn reconcile_plot(config: &MapConfig) -> Result<ReconcileOutput> {
    let plot_countries = load_plot_countries(&config.plot)?;
    let sources = GdpSources::load(&config.gdp, &config.codes).context("load GDP sources")?;
    let (known, not_in_code_file) = sources.prefilter(&plot_countries, config.plot.prefilter);
    let reconciliation = sources
        .reconciler()
        .reconcile(&known, sources.targets())
        .context("reconcile plot countries")?;
    info!(
        matched = reconciliation.matched.len(),
        unmatched = reconciliation.unmatched.len(),
        not_in_code_file = not_in_code_file.len(),
        "reconciled plot countries"
    );
    Ok(ReconcileOutput {
        plot_countries: plot_countries.len(),
        reconciliation,
        not_in_code_file,
    })
}

fn renderers(config: &MapConfig) -> Vec<Box<dyn ChartRenderer>> {
    let mut renderers: Vec<Box<dyn ChartRenderer>> = Vec::new();
    if config.output.format.wants_svg() {
        renderers.push(Box::new(SvgRenderer::default()));
    }
    if config.output.format.wants_json() {
        renderers.push(Box::new(JsonRenderer));
    }
    renderers
}
