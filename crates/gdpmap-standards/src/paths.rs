//! Data directory resolution.

use std::path::PathBuf;

/// Environment variable for overriding the data directory.
pub const DATA_DIR_ENV_VAR: &str = "GDPMAP_DATA_DIR";

/// Directory holding the default code and GDP files.
///
/// Resolution order:
/// 1. `GDPMAP_DATA_DIR` environment variable
/// 2. the current directory
pub fn default_data_root() -> PathBuf {
    if let Ok(root) = std::env::var(DATA_DIR_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(".")
}
