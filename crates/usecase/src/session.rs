// crates/usecase/src/session.rs
use country_table_domain::{Page, ViewEvent, ViewState};

use crate::catalog::Catalog;

/// Per-session view over a catalog.
///
/// Each [`ViewEvent`] replaces the view state and the visible page is
/// recomputed from scratch; nothing is cached between events.
#[derive(Debug, Clone)]
pub struct ViewSession<'a> {
    catalog: &'a Catalog,
    state: ViewState,
    applied: usize,
}

impl<'a> ViewSession<'a> {
    pub fn new(catalog: &'a Catalog, initial: ViewState) -> Self {
        Self { catalog, state: initial, applied: 0 }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Events applied so far.
    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn page(&self) -> Page<'a> {
        self.catalog.page(&self.state)
    }

    pub fn apply(&mut self, event: ViewEvent) -> Page<'a> {
        let catalog = self.catalog;
        let next = self.state.reduce(event, |filters| catalog.count(filters));
        tracing::debug!(
            ?event,
            page = next.page,
            page_size = %next.page_size,
            sort = ?next.sort,
            changed = next != self.state,
            "view event applied"
        );
        self.state = next;
        self.applied += 1;
        self.page()
    }
}
