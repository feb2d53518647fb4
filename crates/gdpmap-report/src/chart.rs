//! Chart model handed to renderers.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use gdpmap_model::{GdpMapping, PlotCountries};

pub const MISSING_LABEL: &str = "Missing from World Bank Data";
pub const NO_DATA_LABEL: &str = "No GDP Data";

pub fn chart_title(year: &str) -> String {
    format!("GDP by country for {year} (log scale), unified by common country code")
}

pub fn gdp_label(year: &str) -> String {
    format!("GDP For {year}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeriesKind {
    Gdp,
    Missing,
    NoData,
}

/// A named series. Codes in the missing and no-data series carry no value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub kind: SeriesKind,
    pub values: BTreeMap<String, Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethChart {
    pub title: String,
    pub year: String,
    /// GDP, missing and no-data series, in that order.
    pub series: [ChartSeries; 3],
    /// Display names by plot code.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub names: BTreeMap<String, String>,
}

impl ChoroplethChart {
    pub fn from_mapping(mapping: &GdpMapping) -> Self {
        let year = mapping.year.as_str();
        let gdp = ChartSeries {
            label: gdp_label(year),
            kind: SeriesKind::Gdp,
            values: mapping
                .values
                .iter()
                .map(|(code, value)| (code.clone(), Some(*value)))
                .collect(),
        };
        Self {
            title: chart_title(year),
            year: year.to_string(),
            series: [
                gdp,
                placeholder_series(MISSING_LABEL, SeriesKind::Missing, &mapping.missing),
                placeholder_series(NO_DATA_LABEL, SeriesKind::NoData, &mapping.no_data),
            ],
            names: BTreeMap::new(),
        }
    }

    /// Attach display names for the codes present in the chart.
    #[must_use]
    pub fn with_names(mut self, countries: &PlotCountries) -> Self {
        self.names = self
            .series
            .iter()
            .flat_map(|series| series.values.keys())
            .filter_map(|code| {
                countries
                    .name(code)
                    .map(|name| (code.clone(), name.to_string()))
            })
            .collect();
        self
    }

    pub fn gdp(&self) -> &ChartSeries {
        &self.series[0]
    }

    /// Smallest and largest GDP value, if any country has one.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.gdp()
            .values
            .values()
            .flatten()
            .fold(None, |range, &value| match range {
                None => Some((value, value)),
                Some((low, high)) => Some((f64::min(low, value), f64::max(high, value))),
            })
    }

    /// Every charted code with its series kind and value, ordered by code.
    pub fn tiles(&self) -> Vec<(&str, SeriesKind, Option<f64>)> {
        let mut tiles: Vec<_> = self
            .series
            .iter()
            .flat_map(|series| {
                series
                    .values
                    .iter()
                    .map(|(code, value)| (code.as_str(), series.kind, *value))
            })
            .collect();
        tiles.sort_by(|a, b| a.0.cmp(b.0));
        tiles
    }
}

fn placeholder_series(label: &str, kind: SeriesKind, codes: &BTreeSet<String>) -> ChartSeries {
    ChartSeries {
        label: label.to_string(),
        kind,
        values: codes.iter().map(|code| (code.clone(), None)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> GdpMapping {
        let mut mapping = GdpMapping::new("2010");
        mapping.values.insert("us".to_string(), 13.0);
        mapping.values.insert("fr".to_string(), 12.0);
        mapping.missing.insert("xk".to_string());
        mapping.no_data.insert("so".to_string());
        mapping
    }

    #[test]
    fn builds_three_named_series() {
        let chart = ChoroplethChart::from_mapping(&mapping());
        let labels: Vec<_> = chart.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["GDP For 2010", MISSING_LABEL, NO_DATA_LABEL]);
        assert_eq!(
            chart.title,
            "GDP by country for 2010 (log scale), unified by common country code"
        );
        assert_eq!(chart.series[1].values.get("xk"), Some(&None));
    }

    #[test]
    fn tiles_are_sorted_across_series() {
        let chart = ChoroplethChart::from_mapping(&mapping());
        let codes: Vec<_> = chart.tiles().iter().map(|tile| tile.0).collect();
        assert_eq!(codes, vec!["fr", "so", "us", "xk"]);
        assert_eq!(chart.value_range(), Some((12.0, 13.0)));
    }

    #[test]
    fn names_only_cover_charted_codes() {
        let countries: PlotCountries = [("us", "United States"), ("de", "Germany")]
            .into_iter()
            .collect();
        let chart = ChoroplethChart::from_mapping(&mapping()).with_names(&countries);
        assert_eq!(chart.names.len(), 1);
        assert_eq!(chart.names["us"], "United States");
    }
}
