//! `gdpmap.toml` loading.
//!
//! Every section is optional:
//!
//! ```toml
//! [codes]
//! codefile = "isp_country_codes.csv"
//! plot_codes = "ISO3166-1-Alpha-2"
//! data_codes = "ISO3166-1-Alpha-3"
//!
//! [gdp]
//! gdpfile = "isp_gdp.csv"
//! min_year = 1960
//! max_year = 2015
//!
//! [plot]
//! countries = "countries.csv"   # omit for the built-in registry
//! prefilter = "case-insensitive"
//!
//! [output]
//! dir = "output"
//! format = "svg"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use gdpmap_model::{CodeInfo, GdpInfo, GdpMapError, PrefilterMode, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    pub codes: CodeInfo,
    pub gdp: GdpInfo,
    pub plot: PlotConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// `code,name` file replacing the built-in registry.
    pub countries: Option<PathBuf>,
    pub prefilter: PrefilterMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            format: OutputFormat::default(),
        }
    }
}

/// Chart artifact formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
    Both,
}

impl OutputFormat {
    pub fn wants_svg(self) -> bool {
        matches!(self, Self::Svg | Self::Both)
    }

    pub fn wants_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

impl MapConfig {
    /// Defaults with data files and output placed under `root`.
    pub fn rooted_at(root: &Path) -> Self {
        Self::default().resolve_paths(root)
    }

    /// Read a configuration file. Relative paths inside it resolve against
    /// the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| GdpMapError::io(path, e))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let config = Self::from_toml_str(&text, base).map_err(|error| match error {
            GdpMapError::InvalidConfig { message, .. } => GdpMapError::InvalidConfig {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;
        debug!(path = %path.display(), "loaded map configuration");
        Ok(config)
    }

    pub fn from_toml_str(text: &str, base: &Path) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| GdpMapError::InvalidConfig {
            path: base.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(config.resolve_paths(base))
    }

    fn resolve_paths(mut self, base: &Path) -> Self {
        self.codes = self.codes.rooted_at(base);
        self.gdp = self.gdp.rooted_at(base);
        if let Some(countries) = self.plot.countries.take() {
            self.plot.countries = Some(rooted(base, countries));
        }
        self.output.dir = rooted(base, std::mem::take(&mut self.output.dir));
        self
    }
}

fn rooted(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = MapConfig::from_toml_str("", Path::new("/data")).expect("parse");
        assert_eq!(
            config.codes.codefile,
            PathBuf::from("/data/isp_country_codes.csv")
        );
        assert_eq!(config.gdp.gdpfile, PathBuf::from("/data/isp_gdp.csv"));
        assert_eq!(config.plot.prefilter, PrefilterMode::CaseInsensitive);
        assert_eq!(config.output.dir, PathBuf::from("/data/output"));
        assert_eq!(config.output.format, OutputFormat::Svg);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = MapConfig::from_toml_str("[codes]\ncodefil = \"x.csv\"\n", Path::new("."))
            .unwrap_err();
        assert!(matches!(err, GdpMapError::InvalidConfig { .. }));
    }
}
