// crates/domain/src/view.rs
//! View state and the events that replace it.
//!
//! [`ViewState::reduce`] is the whole update rule of the table: every user
//! interaction becomes a [`ViewEvent`], and the next state is derived from the
//! current one plus the number of records matching the (possibly new) filters.

use crate::{
    filtering::{ContinentFilter, Filters, HasStatesFilter},
    pagination::PageSize,
    sort::{SortKey, SortSpec},
};

/// Selection, sort and page parameters controlling what is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ViewState {
    pub filters: Filters,
    pub sort: Option<SortSpec>,
    /// Zero-based page index.
    pub page: usize,
    pub page_size: PageSize,
}

/// One user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    SetContinent(ContinentFilter),
    SetHasStates(HasStatesFilter),
    /// Header click with the toggle rule of [`SortSpec::toggled`].
    SortBy(SortKey),
    SetSort(Option<SortSpec>),
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    GoToPage(usize),
    SetPageSize(PageSize),
    Reset,
}

impl ViewState {
    pub fn new(filters: Filters, sort: Option<SortSpec>, page: usize, page_size: PageSize) -> Self {
        Self { filters, sort, page, page_size }
    }

    /// Derives the state following `event`.
    ///
    /// `total_for` counts the records matching a filter set; it is consulted
    /// for page navigation and to pull the page index back to zero when a
    /// filter change leaves the current page empty.
    pub fn reduce<F>(&self, event: ViewEvent, total_for: F) -> Self
    where
        F: Fn(&Filters) -> usize,
    {
        let mut next = *self;
        match event {
            ViewEvent::SetContinent(continent) => {
                next.filters.continent = continent;
                next.clamp_page_after_filter(total_for(&next.filters));
            }
            ViewEvent::SetHasStates(has_states) => {
                next.filters.has_states = has_states;
                next.clamp_page_after_filter(total_for(&next.filters));
            }
            ViewEvent::SortBy(key) => next.sort = Some(SortSpec::toggled(self.sort, key)),
            ViewEvent::SetSort(sort) => next.sort = sort,
            ViewEvent::NextPage => {
                let pages = next.page_size.page_count(total_for(&next.filters));
                if next.page.saturating_add(1) < pages {
                    next.page += 1;
                }
            }
            ViewEvent::PreviousPage => next.page = next.page.saturating_sub(1),
            ViewEvent::FirstPage => next.page = 0,
            ViewEvent::LastPage => {
                next.page = next.page_size.page_count(total_for(&next.filters)).saturating_sub(1);
            }
            ViewEvent::GoToPage(page) => next.page = page,
            ViewEvent::SetPageSize(size) => {
                next.page_size = size;
                next.page = 0;
            }
            ViewEvent::Reset => next = Self { page_size: self.page_size, ..Self::default() },
        }
        next
    }

    fn clamp_page_after_filter(&mut self, total: usize) {
        if self.page > 0 && self.page_size.bounds(self.page, total).is_empty() {
            self.page = 0;
        }
    }
}
