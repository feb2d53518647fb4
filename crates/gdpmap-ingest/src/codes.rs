//! Code converter loading.

use tracing::{debug, warn};

use gdpmap_model::{CodeConverter, CodeInfo, Result};

use crate::csv_utils::{Dialect, read_csv_rows};

/// Load the plot code to data code mapping described by `codeinfo`.
///
/// Codes keep the spelling they have in the file. Every row must carry both
/// configured fields; a repeated plot code keeps the last row's data code.
pub fn build_country_code_converter(codeinfo: &CodeInfo) -> Result<CodeConverter> {
    let path = codeinfo.codefile.as_path();
    let rows = read_csv_rows(path, Dialect::new(codeinfo.separator, codeinfo.quote))?;

    let mut converter = CodeConverter::new();
    for row in &rows {
        let plot_code = row.require(path, &codeinfo.plot_codes)?;
        let data_code = row.require(path, &codeinfo.data_codes)?;
        if let Some(previous) = converter.insert(plot_code, data_code) {
            warn!(
                path = %path.display(),
                plot_code,
                previous = %previous,
                data_code,
                "duplicate plot code in code file"
            );
        }
    }
    debug!(
        path = %path.display(),
        rows = rows.len(),
        codes = converter.len(),
        "loaded code converter"
    );
    Ok(converter)
}
