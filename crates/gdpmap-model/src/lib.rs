pub mod config;
pub mod country;
pub mod error;
pub mod lookup;
pub mod options;
pub mod result;

pub use config::{CodeInfo, GdpInfo};
pub use country::{CodeConverter, GdpRecord, GdpTable, PlotCountries};
pub use error::{GdpMapError, Result};
pub use lookup::{CaseFoldedSet, fold_code};
pub use options::PrefilterMode;
pub use result::{GdpMapping, Reconciliation};
