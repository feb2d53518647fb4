//! GDP table loading.

use tracing::debug;

use gdpmap_model::{GdpInfo, GdpRecord, GdpTable, Result};

use crate::csv_utils::{Dialect, read_csv_rows};

/// Load the GDP file into a table keyed by case-folded country code.
pub fn read_gdp_table(gdpinfo: &GdpInfo) -> Result<GdpTable> {
    let path = gdpinfo.gdpfile.as_path();
    let rows = read_csv_rows(path, Dialect::new(gdpinfo.separator, gdpinfo.quote))?;

    let mut table = GdpTable::new();
    for row in rows {
        let code = row.require(path, &gdpinfo.country_code)?.to_string();
        table.insert(&code, GdpRecord::new(row.fields));
    }
    debug!(path = %path.display(), countries = table.len(), "loaded gdp table");
    Ok(table)
}
