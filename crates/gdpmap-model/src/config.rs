//! Configuration records describing the two delimited input files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GdpMapError, Result};

pub const DEFAULT_CODE_FILE: &str = "isp_country_codes.csv";
pub const DEFAULT_GDP_FILE: &str = "isp_gdp.csv";

/// Location and shape of the country code file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodeInfo {
    pub codefile: PathBuf,
    pub separator: char,
    pub quote: char,
    /// Field holding the plot library's code.
    pub plot_codes: String,
    /// Field holding the GDP source's code.
    pub data_codes: String,
}

impl Default for CodeInfo {
    fn default() -> Self {
        Self {
            codefile: PathBuf::from(DEFAULT_CODE_FILE),
            separator: ',',
            quote: '"',
            plot_codes: "ISO3166-1-Alpha-2".to_string(),
            data_codes: "ISO3166-1-Alpha-3".to_string(),
        }
    }
}

impl CodeInfo {
    pub fn new(codefile: impl Into<PathBuf>) -> Self {
        Self {
            codefile: codefile.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_fields(mut self, plot_codes: &str, data_codes: &str) -> Self {
        self.plot_codes = plot_codes.to_string();
        self.data_codes = data_codes.to_string();
        self
    }

    #[must_use]
    pub fn with_dialect(mut self, separator: char, quote: char) -> Self {
        self.separator = separator;
        self.quote = quote;
        self
    }

    /// Resolve a relative code file path against `base`.
    #[must_use]
    pub fn rooted_at(mut self, base: &Path) -> Self {
        if self.codefile.is_relative() {
            self.codefile = base.join(&self.codefile);
        }
        self
    }
}

/// Location and shape of the GDP file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GdpInfo {
    pub gdpfile: PathBuf,
    pub separator: char,
    pub quote: char,
    pub min_year: u16,
    pub max_year: u16,
    pub country_name: String,
    pub country_code: String,
}

impl Default for GdpInfo {
    fn default() -> Self {
        Self {
            gdpfile: PathBuf::from(DEFAULT_GDP_FILE),
            separator: ',',
            quote: '"',
            min_year: 1960,
            max_year: 2015,
            country_name: "Country Name".to_string(),
            country_code: "Country Code".to_string(),
        }
    }
}

impl GdpInfo {
    pub fn new(gdpfile: impl Into<PathBuf>) -> Self {
        Self {
            gdpfile: gdpfile.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_years(mut self, min_year: u16, max_year: u16) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    #[must_use]
    pub fn with_dialect(mut self, separator: char, quote: char) -> Self {
        self.separator = separator;
        self.quote = quote;
        self
    }

    #[must_use]
    pub fn rooted_at(mut self, base: &Path) -> Self {
        if self.gdpfile.is_relative() {
            self.gdpfile = base.join(&self.gdpfile);
        }
        self
    }

    /// Check that `year` is a number within `min_year..=max_year`, spelled
    /// exactly as the GDP file's column header.
    pub fn check_year(&self, year: &str) -> Result<()> {
        let out_of_range = || GdpMapError::YearOutOfRange {
            year: year.to_string(),
            min: self.min_year,
            max: self.max_year,
        };
        let value: u16 = year.parse().map_err(|_| out_of_range())?;
        if (self.min_year..=self.max_year).contains(&value) {
            Ok(())
        } else {
            Err(out_of_range())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_world_bank_export() {
        let codes = CodeInfo::default();
        assert_eq!(codes.plot_codes, "ISO3166-1-Alpha-2");
        assert_eq!(codes.data_codes, "ISO3166-1-Alpha-3");
        let gdp = GdpInfo::default();
        assert_eq!(gdp.country_code, "Country Code");
        assert_eq!((gdp.min_year, gdp.max_year), (1960, 2015));
    }

    #[test]
    fn year_range_is_inclusive() {
        let gdp = GdpInfo::default();
        assert!(gdp.check_year("1960").is_ok());
        assert!(gdp.check_year("2015").is_ok());
        assert!(matches!(
            gdp.check_year("2016"),
            Err(GdpMapError::YearOutOfRange { .. })
        ));
        assert!(gdp.check_year("twenty").is_err());
        assert!(gdp.check_year("2010 ").is_err());
    }

    #[test]
    fn rooted_paths_keep_absolute_files() {
        let base = Path::new("/data");
        let relative = CodeInfo::new("codes.csv").rooted_at(base);
        assert_eq!(relative.codefile, PathBuf::from("/data/codes.csv"));
        let absolute = GdpInfo::new("/tmp/gdp.csv").rooted_at(base);
        assert_eq!(absolute.gdpfile, PathBuf::from("/tmp/gdp.csv"));
    }
}
