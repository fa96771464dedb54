// crates/domain/src/pagination.rs
use std::{fmt, num::NonZeroUsize, ops::Range, str::FromStr};

use country_table_shared_kernel::{DomainError, DomainResult};

use crate::model::Country;

/// Rows-per-page choices offered by the page size selector.
pub const PAGE_SIZE_PRESETS: [usize; 3] = [5, 10, 25];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of rows shown per page. `Unlimited` renders the whole filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSize {
    Rows(NonZeroUsize),
    Unlimited,
}

impl PageSize {
    /// Any positive row count. Zero yields `None`.
    pub fn rows(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(Self::Rows)
    }

    /// A row count restricted to [`PAGE_SIZE_PRESETS`].
    pub fn preset(n: usize) -> DomainResult<Self> {
        if PAGE_SIZE_PRESETS.contains(&n) {
            if let Some(size) = Self::rows(n) {
                return Ok(size);
            }
        }
        Err(DomainError::InvalidPageSize { value: n.to_string(), allowed: presets_text() })
    }

    pub fn limit(self) -> Option<usize> {
        match self {
            Self::Rows(n) => Some(n.get()),
            Self::Unlimited => None,
        }
    }

    /// Index range of `page` within `total` rows, clamped to `0..total`.
    pub fn bounds(self, page: usize, total: usize) -> Range<usize> {
        match self {
            Self::Rows(n) => {
                let start = page.saturating_mul(n.get()).min(total);
                let end = start.saturating_add(n.get()).min(total);
                start..end
            }
            Self::Unlimited if page == 0 => 0..total,
            Self::Unlimited => total..total,
        }
    }

    /// Pages needed for `total` rows; zero when there is nothing to show.
    pub fn page_count(self, total: usize) -> usize {
        match self {
            Self::Rows(n) => total.div_ceil(n.get()),
            Self::Unlimited => usize::from(total > 0),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::Rows(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

fn presets_text() -> String {
    PAGE_SIZE_PRESETS
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for PageSize {
    type Err = DomainError;

    /// A preset row count, or `all` for the unpaginated view.
    fn from_str(s: &str) -> DomainResult<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::Unlimited);
        }
        let n = trimmed
            .parse::<usize>()
            .map_err(|_| DomainError::InvalidPageSize { value: trimmed.to_string(), allowed: presets_text() })?;
        Self::preset(n)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows(n) => write!(f, "{n}"),
            Self::Unlimited => f.write_str("All"),
        }
    }
}

/// One rendered page of the transform pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub rows: Vec<&'a Country>,
    /// Matches across all pages.
    pub total: usize,
    /// Zero-based page index.
    pub page: usize,
    pub page_size: PageSize,
}

impl<'a> Page<'a> {
    /// Slices `sorted` down to `page`; out-of-range pages come back empty.
    pub fn slice(sorted: &[&'a Country], page: usize, page_size: PageSize) -> Self {
        let total = sorted.len();
        let rows = sorted[page_size.bounds(page, total)].to_vec();
        Self { rows, total, page, page_size }
    }

    pub fn page_count(&self) -> usize {
        self.page_size.page_count(self.total)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1) < self.page_count()
    }

    /// 1-based inclusive row numbers shown on this page, `None` for an empty page.
    pub fn display_range(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let start = self.page_size.bounds(self.page, self.total).start;
        Some((start + 1, start + self.rows.len()))
    }
}
