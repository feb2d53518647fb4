use serde::{Deserialize, Serialize};

/// How the GDP mapper decides that a plot code exists in the code file
/// before reconciling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrefilterMode {
    /// Compare case-folded plot codes with case-folded code file keys.
    #[default]
    CaseInsensitive,
    /// Upper-case the plot code and compare it with the keys as stored.
    ///
    /// Only finds codes that the code file spells in upper case.
    UpperCase,
}

impl PrefilterMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CaseInsensitive => "case-insensitive",
            Self::UpperCase => "upper-case",
        }
    }
}
