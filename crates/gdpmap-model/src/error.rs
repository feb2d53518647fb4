//! Error type shared by the loading and mapping crates.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GdpMapError {
    /// Source file missing or unreadable.
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// A configured field is absent from a row (schema mismatch).
    #[error("field '{field}' missing from row {row} of {path}")]
    MissingField {
        path: PathBuf,
        field: String,
        row: usize,
    },

    /// A plot code with no entry in the code converter.
    #[error("unknown country code '{code}': no entry in the code converter")]
    UnknownCode { code: String },

    /// The requested year has no column in the GDP file.
    #[error("no column for year {year} in the GDP row of {code}")]
    MissingYear { code: String, year: String },

    #[error("invalid GDP value '{value}' for {code} in {year}")]
    InvalidGdp {
        code: String,
        year: String,
        value: String,
    },

    #[error("GDP value '{value}' for {code} in {year} has no logarithm")]
    NonPositiveGdp {
        code: String,
        year: String,
        value: String,
    },

    #[error("year '{year}' is outside the dataset range {min}..={max}")]
    YearOutOfRange { year: String, min: u16, max: u16 },

    #[error("invalid configuration {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },
}

impl GdpMapError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: impl std::fmt::Display) -> Self {
        Self::Csv {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn missing_field(path: impl Into<PathBuf>, field: &str, row: usize) -> Self {
        Self::MissingField {
            path: path.into(),
            field: field.to_string(),
            row,
        }
    }
}

pub type Result<T> = std::result::Result<T, GdpMapError>;
