// domain sorting utilities
use std::{cmp::Ordering, fmt, str::FromStr};

use country_table_shared_kernel::{DomainError, DomainResult};
use feruca::{Collator, Tailoring};

use crate::{filtering::bool_text, model::Country};

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Compares the UN-style name.
    Name,
    /// Compares the continent code text.
    Continent,
    /// Compares the `true`/`false` text of the flag.
    HasStates,
}

impl SortKey {
    pub const ALL: [Self; 3] = [Self::Name, Self::Continent, Self::HasStates];

    /// Collated comparison of the column's text form.
    pub fn compare(self, a: &Country, b: &Country) -> Ordering {
        self.compare_with(&mut text_collator(), a, b)
    }

    fn compare_with(self, collator: &mut Collator, a: &Country, b: &Country) -> Ordering {
        match self {
            Self::Name => collator.collate(a.name_un.as_str(), b.name_un.as_str()),
            Self::Continent => collator.collate(a.continent.code(), b.continent.code()),
            Self::HasStates => collator.collate(bool_text(a.has_states), bool_text(b.has_states)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Continent => "continent",
            Self::HasStates => "has-states",
        }
    }

    /// Column header text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Continent => "Continent",
            Self::HasStates => "Has States",
        }
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" | "nameun" | "name-un" => Ok(Self::Name),
            "continent" => Ok(Self::Continent),
            "has-states" | "has_states" | "hasstates" | "states" => Ok(Self::HasStates),
            _ => Err(DomainError::InvalidSortSpec { spec: format!("unknown sort key: {}", s.trim()) }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ソート順序
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(desc: bool) -> Self {
        if desc { Self::Descending } else { Self::Ascending }
    }
}

/// ソート仕様を表す値オブジェクト
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    key: SortKey,
    order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Ascending)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Descending)
    }

    pub fn key(&self) -> SortKey {
        self.key
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Header click: the active column flips from ascending to descending,
    /// anything else starts ascending.
    pub fn toggled(current: Option<Self>, key: SortKey) -> Self {
        match current {
            Some(spec) if spec.key == key && spec.order == SortOrder::Ascending => Self::descending(key),
            _ => Self::ascending(key),
        }
    }

    #[inline]
    pub fn compare(&self, a: &Country, b: &Country) -> Ordering {
        self.order.apply(self.key.compare(a, b))
    }

    /// Stable in-place sort; ties keep their incoming order.
    pub fn apply(&self, rows: &mut [&Country]) {
        let mut collator = text_collator();
        rows.sort_by(|a, b| self.order.apply(self.key.compare_with(&mut collator, a, b)));
    }
}

/// CLDR root collation with punctuation kept significant; identical keys fall back to byte order.
/// Accented names sort next to their unaccented neighbours ("Côte d'Ivoire" before "Croatia").
fn text_collator() -> Collator {
    Collator::new(Tailoring::default(), false, true)
}

impl FromStr for SortSpec {
    type Err = DomainError;

    /// `key` or `key:asc` / `key:desc`.
    fn from_str(s: &str) -> DomainResult<Self> {
        let (key_str, order_str) = s.split_once(':').map_or((s, None), |(k, o)| (k, Some(o.trim())));
        if key_str.trim().is_empty() {
            return Err(DomainError::InvalidSortSpec { spec: "empty sort spec".into() });
        }
        let key = key_str.parse()?;
        let order = match order_str.map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => SortOrder::Ascending,
            Some("desc") => SortOrder::Descending,
            Some(other) => {
                return Err(DomainError::InvalidSortSpec { spec: format!("unknown direction: {other}") });
            }
        };
        Ok(Self::new(key, order))
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key.as_str(), self.order.as_str())
    }
}
