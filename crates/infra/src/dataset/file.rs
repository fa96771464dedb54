use std::path::{Path, PathBuf};

use country_table_ports::dataset::{CountryRecordDto, CountrySource};
use country_table_shared_kernel::{ErrorContext, Result};

use crate::persistence::FileReader;

/// Encoding of a dataset file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl DatasetFormat {
    /// Picks the format from the file extension; anything unrecognised is JSON.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Dataset read from a user-supplied file with the bundled document shape.
#[derive(Debug, Clone)]
pub struct FileDataset {
    path: PathBuf,
    format: DatasetFormat,
}

impl FileDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = DatasetFormat::from_path(&path);
        Self { path, format }
    }

    pub fn with_format(path: impl Into<PathBuf>, format: DatasetFormat) -> Self {
        Self { path: path.into(), format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> DatasetFormat {
        self.format
    }
}

impl CountrySource for FileDataset {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<CountryRecordDto>> {
        let text = FileReader::read_to_string(&self.path)?;
        let records = match self.format {
            DatasetFormat::Json => super::parse_json(&text),
            #[cfg(feature = "yaml")]
            DatasetFormat::Yaml => super::parse_yaml(&text),
        }
        .with_context(|| format!("parsing dataset {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "loaded dataset file");
        Ok(records)
    }
}
