// crates/infra/src/dataset.rs
mod bundled;
mod file;

use country_table_ports::dataset::{CountryDocument, CountryRecordDto};
use country_table_shared_kernel::Result;
use serde::Deserialize;

pub use bundled::BundledDataset;
pub use file::{DatasetFormat, FileDataset};

/// Accepted document layouts: the `{ "countries": [...] }` wrapper or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentShape {
    Wrapped(CountryDocument),
    Bare(Vec<CountryRecordDto>),
}

impl DocumentShape {
    fn into_records(self) -> Vec<CountryRecordDto> {
        match self {
            Self::Wrapped(doc) => doc.countries,
            Self::Bare(records) => records,
        }
    }
}

fn parse_json(text: &str) -> Result<Vec<CountryRecordDto>> {
    let shape: DocumentShape = serde_json::from_str(text)?;
    Ok(shape.into_records())
}

#[cfg(feature = "yaml")]
fn parse_yaml(text: &str) -> Result<Vec<CountryRecordDto>> {
    let shape: DocumentShape = serde_yaml::from_str(text)?;
    Ok(shape.into_records())
}
