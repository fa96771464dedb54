use std::{fs, path::Path};

use country_table_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead {
            path: path.to_path_buf(),
            source,
        })
    }
}
