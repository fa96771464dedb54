// crates/ports/src/dataset.rs
use country_table_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// DTO representing one record as a dataset provider hands it over.
///
/// The continent stays textual here; mapping onto the domain enum (and
/// rejecting unknown codes) is the use case's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecordDto {
    pub id: String,
    pub name: String,
    pub name_un: String,
    pub code: String,
    pub continent: String,
    pub has_states: bool,
}

/// Top-level document shape: `{ "countries": [ ... ] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryDocument {
    pub countries: Vec<CountryRecordDto>,
}

/// Port for loading the read-only country dataset.
pub trait CountrySource: Send + Sync {
    /// Short human-readable origin, used in logs and errors.
    fn origin(&self) -> String;

    /// Records in dataset order.
    fn load(&self) -> Result<Vec<CountryRecordDto>>;
}
