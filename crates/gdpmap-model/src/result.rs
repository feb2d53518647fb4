use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Outcome of joining plot codes against a data vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// Plot code to data code, each in its source spelling.
    pub matched: BTreeMap<String, String>,
    /// Plot codes whose data code is not in the target vocabulary.
    pub unmatched: BTreeSet<String>,
}

impl Reconciliation {
    pub fn len(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty() && self.unmatched.is_empty()
    }
}

/// Log-scaled GDP per plot code for one year, plus the codes that could not
/// be plotted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GdpMapping {
    pub year: String,
    /// Plot code to log10 of the truncated GDP value.
    pub values: BTreeMap<String, f64>,
    /// Codes with no data code in the code file or the GDP table.
    pub missing: BTreeSet<String>,
    /// Codes found in the GDP table with an empty value for the year.
    pub no_data: BTreeSet<String>,
}

impl GdpMapping {
    pub fn new(year: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            ..Self::default()
        }
    }

    /// Number of plot codes across all three partitions.
    pub fn len(&self) -> usize {
        self.values.len() + self.missing.len() + self.no_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_counts_every_partition() {
        let mut mapping = GdpMapping::new("2010");
        mapping.values.insert("us".to_string(), 13.0);
        mapping.missing.insert("xk".to_string());
        mapping.no_data.insert("so".to_string());
        assert_eq!(mapping.len(), 3);
        assert!(!mapping.is_empty());
    }
}
