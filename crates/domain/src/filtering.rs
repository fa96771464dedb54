// crates/domain/src/filtering.rs
use std::{fmt, str::FromStr};

use country_table_shared_kernel::{DomainError, DomainResult};

use crate::model::{Continent, Country};

/// Continent selector value. `All` matches every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContinentFilter {
    #[default]
    All,
    Only(Continent),
}

impl ContinentFilter {
    #[inline]
    pub fn matches(self, continent: Continent) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == continent,
        }
    }

    pub fn continent(self) -> Option<Continent> {
        match self {
            Self::All => None,
            Self::Only(c) => Some(c),
        }
    }
}

impl From<Continent> for ContinentFilter {
    fn from(c: Continent) -> Self {
        Self::Only(c)
    }
}

impl FromStr for ContinentFilter {
    type Err = DomainError;

    /// Empty input and `all` select every continent.
    fn from_str(s: &str) -> DomainResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed.parse().map(Self::Only)
    }
}

impl fmt::Display for ContinentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(c) => write!(f, "{} ({})", c.display_name(), c.code()),
        }
    }
}

/// Has-states selector value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HasStatesFilter {
    #[default]
    All,
    Yes,
    No,
}

impl HasStatesFilter {
    /// The textual form compared against `has_states.to_string()`.
    pub const fn value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Yes => Some("true"),
            Self::No => Some("false"),
        }
    }

    #[inline]
    pub fn matches(self, has_states: bool) -> bool {
        self.value().is_none_or(|v| v == bool_text(has_states))
    }
}

#[inline]
pub(crate) const fn bool_text(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

impl FromStr for HasStatesFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "true" | "yes" | "y" => Ok(Self::Yes),
            "false" | "no" | "n" => Ok(Self::No),
            _ => Err(DomainError::InvalidHasStates { value: s.to_string() }),
        }
    }
}

impl fmt::Display for HasStatesFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "All",
            Self::Yes => "Yes",
            Self::No => "No",
        })
    }
}

/// Both selector values. Filtering only narrows a view of the dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Filters {
    pub continent: ContinentFilter,
    pub has_states: HasStatesFilter,
}

impl Filters {
    pub fn new(continent: ContinentFilter, has_states: HasStatesFilter) -> Self {
        Self { continent, has_states }
    }

    /// True when neither selector narrows the dataset.
    pub fn is_empty(&self) -> bool {
        self.continent == ContinentFilter::All && self.has_states == HasStatesFilter::All
    }

    #[inline]
    pub fn matches(&self, country: &Country) -> bool {
        self.continent.matches(country.continent) && self.has_states.matches(country.has_states)
    }

    /// Records passing both selectors, in dataset order.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a Country>
    where
        I: IntoIterator<Item = &'a Country>,
    {
        records.into_iter().filter(|c| self.matches(c)).collect()
    }

    pub fn count(&self, records: &[Country]) -> usize {
        records.iter().filter(|c| self.matches(c)).count()
    }
}
