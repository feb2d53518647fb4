#![deny(unsafe_code)]

pub mod gdp;
pub mod reconcile;

pub use gdp::{GdpSources, log_gdp, map_gdp_by_code};
pub use reconcile::{Reconciler, TargetCodes, reconcile_countries_by_code};
