#![deny(unsafe_code)]

pub mod codes;
pub mod csv_utils;
pub mod gdp;
pub mod plot;

pub use codes::build_country_code_converter;
pub use csv_utils::{CsvRow, Dialect, read_csv_rows};
pub use gdp::read_gdp_table;
pub use plot::{PLOT_CODE_FIELD, PLOT_NAME_FIELD, read_plot_countries};
