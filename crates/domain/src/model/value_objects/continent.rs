use std::{fmt, str::FromStr};

use country_table_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Continent a country belongs to, serialized as its two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Continent {
    #[serde(rename = "AF")]
    Africa,
    #[serde(rename = "NA")]
    NorthAmerica,
    #[serde(rename = "OC")]
    Oceania,
    #[serde(rename = "AN")]
    Antarctica,
    #[serde(rename = "AS")]
    Asia,
    #[serde(rename = "EU")]
    Europe,
    #[serde(rename = "SA")]
    SouthAmerica,
}

impl Continent {
    /// Selector order.
    pub const ALL: [Self; 7] = [
        Self::Africa,
        Self::NorthAmerica,
        Self::Oceania,
        Self::Antarctica,
        Self::Asia,
        Self::Europe,
        Self::SouthAmerica,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Africa => "AF",
            Self::NorthAmerica => "NA",
            Self::Oceania => "OC",
            Self::Antarctica => "AN",
            Self::Asia => "AS",
            Self::Europe => "EU",
            Self::SouthAmerica => "SA",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::NorthAmerica => "North America",
            Self::Oceania => "Oceania",
            Self::Antarctica => "Antarctica",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::SouthAmerica => "South America",
        }
    }

    /// Looks up a continent by its code, ignoring ASCII case.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.into_iter().find(|c| c.code().eq_ignore_ascii_case(code))
    }

    /// Looks up a continent by display name; spaces, `-` and `_` are interchangeable.
    pub fn from_display_name(name: &str) -> Option<Self> {
        let wanted = normalize_name(name);
        Self::ALL
            .into_iter()
            .find(|c| normalize_name(c.display_name()) == wanted)
    }

    pub(crate) fn expected_values() -> String {
        Self::ALL
            .iter()
            .map(|c| format!("{} ({})", c.code(), c.display_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for Continent {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::from_code(s)
            .or_else(|| Self::from_display_name(s))
            .ok_or_else(|| DomainError::InvalidContinent {
                value: s.to_string(),
                expected: Self::expected_values(),
            })
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
