//! Log-scaled GDP per plot country for a requested year.

use std::collections::BTreeSet;

use tracing::{debug, info, info_span};

use gdpmap_ingest::{build_country_code_converter, read_gdp_table};
use gdpmap_model::{
    CodeConverter, CodeInfo, GdpInfo, GdpMapError, GdpMapping, GdpTable, PlotCountries,
    PrefilterMode, Result,
};

use crate::reconcile::{Reconciler, TargetCodes};

/// The code converter and GDP table, loaded once and shared by every year
/// mapped from them.
#[derive(Debug, Clone)]
pub struct GdpSources {
    converter: CodeConverter,
    reconciler: Reconciler,
    table: GdpTable,
    targets: TargetCodes,
}

impl GdpSources {
    pub fn load(gdpinfo: &GdpInfo, codeinfo: &CodeInfo) -> Result<Self> {
        let table = read_gdp_table(gdpinfo)?;
        let converter = build_country_code_converter(codeinfo)?;
        Ok(Self::from_tables(converter, table))
    }

    pub fn from_tables(converter: CodeConverter, table: GdpTable) -> Self {
        let reconciler = Reconciler::new(&converter);
        let targets = TargetCodes::new(table.codes());
        Self {
            converter,
            reconciler,
            table,
            targets,
        }
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    /// Codes of the GDP table, the target vocabulary for reconciliation.
    pub fn targets(&self) -> &TargetCodes {
        &self.targets
    }

    /// Whether `plot_code` appears in the code file under `mode`.
    pub fn in_code_file(&self, plot_code: &str, mode: PrefilterMode) -> bool {
        match mode {
            PrefilterMode::CaseInsensitive => self.reconciler.knows(plot_code),
            PrefilterMode::UpperCase => self.converter.contains(&plot_code.to_uppercase()),
        }
    }

    /// Split `plot_countries` into the countries present in the code file and
    /// the codes that are not.
    pub fn prefilter(
        &self,
        plot_countries: &PlotCountries,
        mode: PrefilterMode,
    ) -> (PlotCountries, BTreeSet<String>) {
        let mut known = PlotCountries::new();
        let mut absent = BTreeSet::new();
        for (code, name) in plot_countries.iter() {
            if self.in_code_file(code, mode) {
                known.insert(code, name);
            } else {
                absent.insert(code.to_string());
            }
        }
        (known, absent)
    }

    /// Partition `plot_countries` by GDP availability in `year`.
    pub fn map_year(
        &self,
        plot_countries: &PlotCountries,
        year: &str,
        mode: PrefilterMode,
    ) -> Result<GdpMapping> {
        let span = info_span!("map_year", year, prefilter = mode.as_str());
        let _guard = span.enter();

        let mut mapping = GdpMapping::new(year);
        for plot_code in plot_countries.codes() {
            if !self.in_code_file(plot_code, mode) {
                debug!(plot_code, "not in code file");
                mapping.missing.insert(plot_code.to_string());
                continue;
            }
            let Some(record) = self
                .reconciler
                .resolve(plot_code, &self.targets)?
                .and_then(|data_code| self.table.get(data_code))
            else {
                debug!(plot_code, "no GDP row for data code");
                mapping.missing.insert(plot_code.to_string());
                continue;
            };
            let raw = record
                .year_value(year)
                .ok_or_else(|| GdpMapError::MissingYear {
                    code: plot_code.to_string(),
                    year: year.to_string(),
                })?;
            if raw.is_empty() {
                debug!(plot_code, "no GDP value for year");
                mapping.no_data.insert(plot_code.to_string());
            } else {
                let value = log_gdp(plot_code, year, raw)?;
                mapping.values.insert(plot_code.to_string(), value);
            }
        }
        info!(
            year,
            mapped = mapping.values.len(),
            missing = mapping.missing.len(),
            no_data = mapping.no_data.len(),
            "mapped GDP"
        );
        Ok(mapping)
    }

    /// Map several years over the same loaded tables.
    pub fn map_years<S: AsRef<str>>(
        &self,
        plot_countries: &PlotCountries,
        years: &[S],
        mode: PrefilterMode,
    ) -> Result<Vec<GdpMapping>> {
        years
            .iter()
            .map(|year| self.map_year(plot_countries, year.as_ref(), mode))
            .collect()
    }
}

/// Load both files and map `plot_countries` for `year` with the
/// case-insensitive pre-filter.
pub fn map_gdp_by_code(
    gdpinfo: &GdpInfo,
    codeinfo: &CodeInfo,
    plot_countries: &PlotCountries,
    year: &str,
) -> Result<GdpMapping> {
    GdpSources::load(gdpinfo, codeinfo)?.map_year(
        plot_countries,
        year,
        PrefilterMode::CaseInsensitive,
    )
}

/// log10 of a GDP value truncated toward zero.
pub fn log_gdp(code: &str, year: &str, raw: &str) -> Result<f64> {
    let invalid = || GdpMapError::InvalidGdp {
        code: code.to_string(),
        year: year.to_string(),
        value: raw.to_string(),
    };
    let value: f64 = raw.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    let truncated = value.trunc();
    if truncated <= 0.0 {
        return Err(GdpMapError::NonPositiveGdp {
            code: code.to_string(),
            year: year.to_string(),
            value: raw.to_string(),
        });
    }
    Ok(truncated.log10())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_before_taking_log() {
        let value = log_gdp("us", "2010", "1234.9").expect("log");
        assert_eq!(value, 1234f64.log10());
        assert_ne!(value, 1234.9f64.log10());
    }

    #[test]
    fn rejects_non_numeric_values() {
        let err = log_gdp("us", "2010", "n/a").unwrap_err();
        assert!(matches!(err, GdpMapError::InvalidGdp { .. }));
        assert!(log_gdp("us", "2010", "inf").is_err());
    }

    #[test]
    fn rejects_values_without_logarithm() {
        let err = log_gdp("us", "2010", "0.5").unwrap_err();
        assert!(matches!(err, GdpMapError::NonPositiveGdp { .. }));
        assert!(log_gdp("us", "2010", "-10").is_err());
    }
}
