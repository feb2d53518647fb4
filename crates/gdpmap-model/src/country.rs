//! Country tables read from the plot library and the GDP source.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::lookup::fold_code;

/// Plot library country codes with their display names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlotCountries {
    countries: BTreeMap<String, String>,
}

impl PlotCountries {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding just one country.
    pub fn single(code: impl Into<String>, name: impl Into<String>) -> Self {
        let mut countries = Self::new();
        countries.insert(code, name);
        countries
    }

    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        self.countries.insert(code.into(), name.into());
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.countries.get(code).map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.countries.contains_key(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.countries
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PlotCountries {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut countries = Self::new();
        for (code, name) in iter {
            countries.insert(code, name);
        }
        countries
    }
}

/// Plot code to data code, both spelled as in the code file.
///
/// Iterates in the order codes first appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeConverter {
    codes: IndexMap<String, String>,
}

impl CodeConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pair, returning the data code it replaced if the plot code
    /// was already present.
    pub fn insert(
        &mut self,
        plot_code: impl Into<String>,
        data_code: impl Into<String>,
    ) -> Option<String> {
        self.codes.insert(plot_code.into(), data_code.into())
    }

    /// Exact-case lookup.
    pub fn get(&self, plot_code: &str) -> Option<&str> {
        self.codes.get(plot_code).map(String::as_str)
    }

    pub fn contains(&self, plot_code: &str) -> bool {
        self.codes.contains_key(plot_code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.codes
            .iter()
            .map(|(plot, data)| (plot.as_str(), data.as_str()))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CodeConverter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut converter = Self::new();
        for (plot, data) in iter {
            converter.insert(plot, data);
        }
        converter
    }
}

/// One GDP file row keyed by header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GdpRecord {
    fields: BTreeMap<String, String>,
}

impl GdpRecord {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// The value for a year column; `None` when the column does not exist.
    pub fn year_value(&self, year: &str) -> Option<&str> {
        self.get(year)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for GdpRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// GDP records keyed by case-folded data code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GdpTable {
    records: BTreeMap<String, GdpRecord>,
}

impl GdpTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under the folded form of `code`. A later row for the same
    /// folded code replaces the earlier one.
    pub fn insert(&mut self, code: &str, record: GdpRecord) -> Option<GdpRecord> {
        self.records.insert(fold_code(code), record)
    }

    pub fn get(&self, code: &str) -> Option<&GdpRecord> {
        self.records.get(&fold_code(code))
    }

    /// Folded codes of every row.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converter_keeps_first_position_and_last_value() {
        let mut converter = CodeConverter::new();
        assert_eq!(converter.insert("us", "USA"), None);
        converter.insert("br", "BRA");
        assert_eq!(converter.insert("us", "US1"), Some("USA".to_string()));
        let pairs: Vec<_> = converter.iter().collect();
        assert_eq!(pairs, vec![("us", "US1"), ("br", "BRA")]);
    }

    #[test]
    fn gdp_table_folds_codes() {
        let mut table = GdpTable::new();
        table.insert("USA", [("2010", "1")].into_iter().collect());
        assert!(table.get("usa").is_some());
        assert_eq!(table.codes().collect::<Vec<_>>(), vec!["usa"]);
    }

    #[test]
    fn plot_countries_serialize_as_map() {
        let countries = PlotCountries::single("us", "United States");
        let json = serde_json::to_string(&countries).expect("serialize");
        assert_eq!(json, r#"{"us":"United States"}"#);
    }
}
