//! Case-insensitive join of plot codes against a data vocabulary.

use std::collections::HashMap;

use tracing::{debug, warn};

use gdpmap_ingest::build_country_code_converter;
use gdpmap_model::{
    CaseFoldedSet, CodeConverter, CodeInfo, GdpMapError, PlotCountries, Reconciliation, Result,
    fold_code,
};

/// Valid codes of a target vocabulary, compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct TargetCodes {
    codes: CaseFoldedSet,
}

impl TargetCodes {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            codes: CaseFoldedSet::new(codes),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }
}

/// Folded index over a code converter.
///
/// Every plot code handed to [`Reconciler::reconcile`] or
/// [`Reconciler::resolve`] must have an entry in the converter, in any case.
/// A code without one is rejected with [`GdpMapError::UnknownCode`].
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    index: HashMap<String, String>,
}

impl Reconciler {
    /// Index `converter` by folded plot code. When two plot codes fold to
    /// the same key, the one later in file order wins.
    pub fn new(converter: &CodeConverter) -> Self {
        let mut index = HashMap::with_capacity(converter.len());
        for (plot_code, data_code) in converter.iter() {
            let key = fold_code(plot_code);
            if let Some(previous) = index.insert(key, data_code.to_string())
                && previous != data_code
            {
                warn!(
                    plot_code,
                    previous = %previous,
                    data_code,
                    "plot codes differing only in case map to different data codes"
                );
            }
        }
        Self { index }
    }

    /// Whether the converter has an entry for `plot_code` in any case.
    pub fn knows(&self, plot_code: &str) -> bool {
        self.index.contains_key(&fold_code(plot_code))
    }

    /// Data code for `plot_code` when it is one of `targets`.
    ///
    /// The returned code is spelled as in the code file.
    pub fn resolve(&self, plot_code: &str, targets: &TargetCodes) -> Result<Option<&str>> {
        let data_code = self
            .index
            .get(&fold_code(plot_code))
            .ok_or_else(|| GdpMapError::UnknownCode {
                code: plot_code.to_string(),
            })?;
        if targets.contains(data_code) {
            Ok(Some(data_code.as_str()))
        } else {
            Ok(None)
        }
    }

    /// Split `plot_countries` into codes matched in `targets` and the rest.
    pub fn reconcile(
        &self,
        plot_countries: &PlotCountries,
        targets: &TargetCodes,
    ) -> Result<Reconciliation> {
        let mut result = Reconciliation::default();
        for plot_code in plot_countries.codes() {
            match self.resolve(plot_code, targets)? {
                Some(data_code) => {
                    result
                        .matched
                        .insert(plot_code.to_string(), data_code.to_string());
                }
                None => {
                    result.unmatched.insert(plot_code.to_string());
                }
            }
        }
        debug!(
            matched = result.matched.len(),
            unmatched = result.unmatched.len(),
            "reconciled plot countries"
        );
        Ok(result)
    }
}

/// Load the code file named by `codeinfo` and reconcile `plot_countries`
/// against `target_codes`.
pub fn reconcile_countries_by_code<I, S>(
    codeinfo: &CodeInfo,
    plot_countries: &PlotCountries,
    target_codes: I,
) -> Result<Reconciliation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let converter = build_country_code_converter(codeinfo)?;
    Reconciler::new(&converter).reconcile(plot_countries, &TargetCodes::new(target_codes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter(pairs: &[(&str, &str)]) -> CodeConverter {
        pairs.iter().copied().collect()
    }

    #[test]
    fn matches_regardless_of_case() {
        let reconciler = Reconciler::new(&converter(&[("BR", "bra"), ("us", "USA")]));
        let plot: PlotCountries = [("br", "Brazil"), ("US", "United States")]
            .into_iter()
            .collect();
        let result = reconciler
            .reconcile(&plot, &TargetCodes::new(["BRA", "usa"]))
            .expect("reconcile");
        assert_eq!(result.matched.get("br").map(String::as_str), Some("bra"));
        assert_eq!(result.matched.get("US").map(String::as_str), Some("USA"));
        assert!(result.unmatched.is_empty());
    }

    #[test]
    fn codes_missing_from_target_are_unmatched() {
        let reconciler = Reconciler::new(&converter(&[("xk", "XKX")]));
        let plot = PlotCountries::single("xk", "Kosovo");
        let result = reconciler
            .reconcile(&plot, &TargetCodes::new(["USA"]))
            .expect("reconcile");
        assert!(result.matched.is_empty());
        assert!(result.unmatched.contains("xk"));
    }

    #[test]
    fn unknown_plot_code_is_rejected() {
        let reconciler = Reconciler::new(&converter(&[("us", "USA")]));
        let plot = PlotCountries::single("zz", "Nowhere");
        let err = reconciler
            .reconcile(&plot, &TargetCodes::new(["USA"]))
            .unwrap_err();
        assert!(matches!(err, GdpMapError::UnknownCode { code } if code == "zz"));
    }

    #[test]
    fn folded_collision_keeps_later_entry() {
        let reconciler = Reconciler::new(&converter(&[("gb", "GBR"), ("GB", "UK1")]));
        let targets = TargetCodes::new(["GBR", "UK1"]);
        assert_eq!(reconciler.resolve("Gb", &targets).expect("resolve"), Some("UK1"));
    }
}
