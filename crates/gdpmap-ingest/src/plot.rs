//! Plot country sets supplied as a file instead of the built-in registry.

use std::path::Path;

use tracing::debug;

use gdpmap_model::{PlotCountries, Result};

use crate::csv_utils::{Dialect, read_csv_rows};

pub const PLOT_CODE_FIELD: &str = "code";
pub const PLOT_NAME_FIELD: &str = "name";

/// Read a `code,name` file into a plot country set.
pub fn read_plot_countries(path: &Path, dialect: Dialect) -> Result<PlotCountries> {
    let rows = read_csv_rows(path, dialect)?;
    let mut countries = PlotCountries::new();
    for row in &rows {
        let code = row.require(path, PLOT_CODE_FIELD)?;
        let name = row.require(path, PLOT_NAME_FIELD)?;
        countries.insert(code, name);
    }
    debug!(path = %path.display(), countries = countries.len(), "loaded plot countries");
    Ok(countries)
}
