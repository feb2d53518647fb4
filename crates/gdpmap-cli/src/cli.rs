//! CLI argument definitions for `gdpmap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gdpmap",
    version,
    about = "Map World Bank GDP onto world map country codes",
    long_about = "Reconcile world map country codes with World Bank GDP country codes\n\
                  and render log-scaled GDP per country as a choropleth.\n\n\
                  Reads gdpmap.toml when given with --config; flags override it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render one GDP map per requested year.
    Map(MapArgs),

    /// Show how world map codes reconcile with the GDP file's codes.
    Reconcile(SourceArgs),

    /// List the built-in world map countries.
    Countries,
}

/// Input files and matching rules shared by the data commands.
#[derive(Args)]
pub struct SourceArgs {
    /// Configuration file (default: built-in defaults under $GDPMAP_DATA_DIR).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Country code file mapping map codes to GDP codes.
    #[arg(long = "codes-file", value_name = "PATH")]
    pub codes_file: Option<PathBuf>,

    /// World Bank GDP file.
    #[arg(long = "gdp-file", value_name = "PATH")]
    pub gdp_file: Option<PathBuf>,

    /// `code,name` file replacing the built-in world map countries.
    #[arg(long = "countries", value_name = "PATH")]
    pub countries: Option<PathBuf>,

    /// How map codes are looked up in the code file before reconciling.
    #[arg(long = "prefilter", value_enum)]
    pub prefilter: Option<PrefilterArg>,
}

#[derive(Args)]
pub struct MapArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Year to map; repeat for several (default: 1960, 1980, 2000, 2010).
    #[arg(long = "year", value_name = "YEAR")]
    pub years: Vec<String>,

    /// Output directory for rendered charts.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Chart format to write.
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Map and summarize without writing charts.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Svg,
    Json,
    Both,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PrefilterArg {
    /// Match code file keys in any case.
    CaseInsensitive,
    /// Upper-case map codes and match code file keys as stored.
    UpperCase,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
