use country_table_ports::dataset::{CountryRecordDto, CountrySource};
use country_table_shared_kernel::Result;

/// Country records compiled into the binary.
const BUNDLED_JSON: &str = include_str!("../../data/countries.json");

/// The packaged, read-only dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledDataset;

impl CountrySource for BundledDataset {
    fn origin(&self) -> String {
        "bundled".to_string()
    }

    fn load(&self) -> Result<Vec<CountryRecordDto>> {
        let records = super::parse_json(BUNDLED_JSON)?;
        tracing::debug!(records = records.len(), "loaded bundled dataset");
        Ok(records)
    }
}
