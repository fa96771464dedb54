use std::collections::HashSet;

use country_table_domain::{Continent, Country, Filters, Page, ViewState, pipeline};
use country_table_ports::dataset::{CountryRecordDto, CountrySource};
use country_table_shared_kernel::{ApplicationError, ErrorContext, Result};

/// The validated, read-only dataset for one process lifetime.
#[derive(Debug, Clone)]
pub struct Catalog {
    origin: String,
    countries: Vec<Country>,
}

impl Catalog {
    /// Builds a catalog from domain records, rejecting duplicate ids.
    pub fn new(origin: impl Into<String>, countries: Vec<Country>) -> Result<Self> {
        let origin = origin.into();
        if let Some(id) = first_duplicate_id(&countries) {
            return Err(ApplicationError::InvalidDataset { origin, reason: format!("duplicate id '{id}'") }.into());
        }
        Ok(Self { origin, countries })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Number of records passing `filters`.
    pub fn count(&self, filters: &Filters) -> usize {
        filters.count(&self.countries)
    }

    /// Runs the filter → sort → slice pipeline for `view`.
    pub fn page(&self, view: &ViewState) -> Page<'_> {
        pipeline::transform(&self.countries, view)
    }

    /// Every continent in selector order with its record count.
    pub fn continent_counts(&self) -> Vec<(Continent, usize)> {
        Continent::ALL
            .into_iter()
            .map(|c| (c, self.countries.iter().filter(|r| r.continent == c).count()))
            .collect()
    }
}

/// Loads the dataset through a [`CountrySource`] and maps it onto the domain.
pub struct LoadCatalog<'a> {
    source: &'a dyn CountrySource,
}

impl<'a> LoadCatalog<'a> {
    pub fn new(source: &'a dyn CountrySource) -> Self {
        Self { source }
    }

    pub fn run(&self) -> Result<Catalog> {
        let origin = self.source.origin();
        let records = self
            .source
            .load()
            .with_context(|| format!("loading dataset from {origin}"))?;

        let countries = records
            .into_iter()
            .map(|dto| dto_to_domain(dto, &origin))
            .collect::<Result<Vec<_>>>()?;

        let catalog = Catalog::new(origin, countries)?;
        tracing::info!(origin = catalog.origin(), records = catalog.len(), "dataset ready");
        Ok(catalog)
    }
}

fn first_duplicate_id(countries: &[Country]) -> Option<String> {
    let mut seen = HashSet::with_capacity(countries.len());
    countries
        .iter()
        .find(|c| !seen.insert(c.id.as_str()))
        .map(|c| c.id.to_string())
}

fn dto_to_domain(dto: CountryRecordDto, origin: &str) -> Result<Country> {
    let continent = Continent::from_code(&dto.continent).ok_or_else(|| ApplicationError::InvalidDataset {
        origin: origin.to_string(),
        reason: format!("record '{}' has unknown continent code '{}'", dto.id, dto.continent),
    })?;
    Ok(Country::new(dto.id, dto.name, dto.name_un, dto.code, continent, dto.has_states))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use country_table_domain::{ContinentFilter, HasStatesFilter};
    use country_table_shared_kernel::CountryTableError;

    use super::*;

    #[derive(Default)]
    struct StubSource {
        records: Mutex<Vec<CountryRecordDto>>,
    }

    impl StubSource {
        fn with(records: &[(&str, &str, &str, bool)]) -> Self {
            let dtos = records
                .iter()
                .map(|(id, name, continent, has_states)| CountryRecordDto {
                    id: (*id).into(),
                    name: (*name).into(),
                    name_un: (*name).into(),
                    code: name[..2].to_uppercase(),
                    continent: (*continent).into(),
                    has_states: *has_states,
                })
                .collect();
            Self { records: Mutex::new(dtos) }
        }
    }

    impl CountrySource for StubSource {
        fn origin(&self) -> String {
            "stub".into()
        }

        fn load(&self) -> Result<Vec<CountryRecordDto>> {
            Ok(self.records.lock().unwrap().clone())
        }
    }

    #[test]
    fn run_maps_records_in_order() {
        let stub = StubSource::with(&[("1", "France", "EU", true), ("2", "Chad", "af", false)]);
        let catalog = LoadCatalog::new(&stub).run().expect("run succeeds");

        assert_eq!(catalog.origin(), "stub");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.countries()[1].continent, Continent::Africa);
        assert_eq!(catalog.countries()[0].code.as_str(), "FR");
    }

    #[test]
    fn unknown_continent_is_rejected() {
        let stub = StubSource::with(&[("1", "Atlantis", "XX", false)]);
        let err = LoadCatalog::new(&stub).run().unwrap_err();
        assert!(matches!(
            err,
            CountryTableError::Application(ApplicationError::InvalidDataset { ref reason, .. }) if reason.contains("XX")
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let stub = StubSource::with(&[("7", "Chad", "AF", false), ("7", "Peru", "SA", false)]);
        let err = LoadCatalog::new(&stub).run().unwrap_err();
        assert!(err.to_string().contains("duplicate id '7'"));
    }

    #[test]
    fn counts_and_pages() {
        let stub = StubSource::with(&[
            ("1", "France", "EU", true),
            ("2", "Chad", "AF", false),
            ("3", "Benin", "AF", false),
        ]);
        let catalog = LoadCatalog::new(&stub).run().unwrap();

        let africa = Filters::new(ContinentFilter::Only(Continent::Africa), HasStatesFilter::All);
        assert_eq!(catalog.count(&africa), 2);

        let page = catalog.page(&ViewState { filters: africa, ..ViewState::default() });
        assert_eq!(page.total, 2);

        let counts = catalog.continent_counts();
        assert_eq!(counts[0], (Continent::Africa, 2));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 3);
    }
}
