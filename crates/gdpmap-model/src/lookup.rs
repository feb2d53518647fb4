use std::collections::HashSet;

/// Case-fold a country code for comparison.
///
/// Codes are ISO-style ASCII identifiers, so simple lowercasing stands in
/// for full Unicode case folding (`"ß"` and `"SS"` stay distinct).
pub fn fold_code(code: &str) -> String {
    code.to_lowercase()
}

/// Set of codes compared without regard to case.
#[derive(Debug, Clone, Default)]
pub struct CaseFoldedSet {
    folded: HashSet<String>,
}

impl CaseFoldedSet {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            folded: codes.into_iter().map(|code| fold_code(code.as_ref())).collect(),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.folded.contains(&fold_code(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_ignore_case() {
        let set = CaseFoldedSet::new(["USA", "bra", "Fra"]);
        assert!(set.contains("usa"));
        assert!(set.contains("BRA"));
        assert!(set.contains("fRA"));
        assert!(!set.contains("can"));
    }
}
