//! Shared CSV reading for the code, GDP and plot country files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use gdpmap_model::{GdpMapError, Result};

/// Field delimiter and quote character of a delimited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub separator: char,
    pub quote: char,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            separator: ',',
            quote: '"',
        }
    }
}

impl Dialect {
    pub fn new(separator: char, quote: char) -> Self {
        Self { separator, quote }
    }

    fn byte(path: &Path, role: &str, value: char) -> Result<u8> {
        u8::try_from(value)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| GdpMapError::InvalidConfig {
                path: path.to_path_buf(),
                message: format!("{role} {value:?} is not a single ASCII character"),
            })
    }
}

/// A data row keyed by header, with its 1-based position among data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub row: usize,
    pub fields: BTreeMap<String, String>,
}

impl CsvRow {
    /// Value of `field`, or a missing-field error naming `path`.
    pub fn require(&self, path: &Path, field: &str) -> Result<&str> {
        self.fields
            .get(field)
            .map(String::as_str)
            .ok_or_else(|| GdpMapError::missing_field(path, field, self.row))
    }
}

/// Read a delimited file with a header row into row maps.
///
/// Header cells lose any byte order mark and surrounding whitespace; values
/// are trimmed unless they hold only whitespace, which is kept verbatim so
/// it never reads as an empty cell. A row shorter than the header simply lacks the trailing
/// fields, so lookups report them as missing.
pub fn read_csv_rows(path: &Path, dialect: Dialect) -> Result<Vec<CsvRow>> {
    let delimiter = Dialect::byte(path, "separator", dialect.separator)?;
    let quote = Dialect::byte(path, "quote", dialect.quote)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .quote(quote)
        .from_path(path)
        .map_err(|error| csv_error(path, error))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| csv_error(path, error))?
        .iter()
        .map(|header| header.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|error| csv_error(path, error))?;
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(key, value)| (key.clone(), trim_cell(value).to_string()))
            .collect();
        rows.push(CsvRow {
            row: idx + 1,
            fields,
        });
    }
    Ok(rows)
}

fn trim_cell(value: &str) -> &str {
    match value.trim() {
        "" => value,
        trimmed => trimmed,
    }
}

fn csv_error(path: &Path, error: csv::Error) -> GdpMapError {
    let path: PathBuf = path.to_path_buf();
    if !error.is_io_error() {
        return GdpMapError::csv(path, error);
    }
    match error.into_kind() {
        csv::ErrorKind::Io(source) => GdpMapError::io(path, source),
        other => GdpMapError::csv(path, format!("{other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn strips_bom_and_trims_cells() {
        let file = write_temp("\u{feff}Code , Name\n us , United States \n");
        let rows = read_csv_rows(file.path(), Dialect::default()).expect("read rows");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].fields.get("Code").map(String::as_str), Some("us"));
        assert_eq!(
            rows[0].fields.get("Name").map(String::as_str),
            Some("United States")
        );
    }

    #[test]
    fn whitespace_only_cells_are_not_empty() {
        let file = write_temp("Code,2010,2011\nUSA,   ,\n");
        let rows = read_csv_rows(file.path(), Dialect::default()).expect("read rows");
        assert_eq!(rows[0].fields.get("2010").map(String::as_str), Some("   "));
        assert_eq!(rows[0].fields.get("2011").map(String::as_str), Some(""));
    }

    #[test]
    fn short_rows_report_missing_fields() {
        let file = write_temp("a,b\n1,2\n3\n");
        let rows = read_csv_rows(file.path(), Dialect::default()).expect("read rows");
        assert_eq!(rows[1].row, 2);
        let err = rows[1].require(file.path(), "b").unwrap_err();
        assert!(matches!(err, GdpMapError::MissingField { row: 2, .. }));
    }

    #[test]
    fn rejects_non_ascii_separator() {
        let file = write_temp("a\n1\n");
        let err = read_csv_rows(file.path(), Dialect::new('§', '"')).unwrap_err();
        assert!(matches!(err, GdpMapError::InvalidConfig { .. }));
    }
}
