use country_table_shared_kernel::{CountryCode, CountryId};
use serde::{Deserialize, Serialize};

use crate::model::Continent;

/// One immutable entry of the country dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: CountryId,
    pub name: String,
    /// UN-style display name; this is what the table shows and sorts on.
    pub name_un: String,
    pub code: CountryCode,
    pub continent: Continent,
    pub has_states: bool,
}

impl Country {
    pub fn new(
        id: impl Into<CountryId>,
        name: impl Into<String>,
        name_un: impl Into<String>,
        code: impl Into<CountryCode>,
        continent: Continent,
        has_states: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_un: name_un.into(),
            code: code.into(),
            continent,
            has_states,
        }
    }

    /// `Yes` / `No`, as shown in the Has States column.
    pub fn has_states_label(&self) -> &'static str {
        if self.has_states { "Yes" } else { "No" }
    }
}
