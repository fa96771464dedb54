// crates/domain/src/pipeline.rs
//! filter → sort → slice over an in-memory record sequence.

use crate::{
    filtering::Filters,
    model::Country,
    pagination::{Page, PageSize},
    sort::SortSpec,
    view::ViewState,
};

/// Records matching `filters`, in dataset order.
pub fn filter<'a>(records: &'a [Country], filters: &Filters) -> Vec<&'a Country> {
    filters.apply(records)
}

/// Sorts in place when a spec is given; otherwise leaves dataset order alone.
pub fn sort(rows: &mut [&Country], spec: Option<&SortSpec>) {
    if let Some(spec) = spec {
        spec.apply(rows);
    }
}

pub fn paginate<'a>(rows: &[&'a Country], page: usize, page_size: PageSize) -> Page<'a> {
    Page::slice(rows, page, page_size)
}

/// Filtered and sorted rows, before slicing.
pub fn arrange<'a>(records: &'a [Country], view: &ViewState) -> Vec<&'a Country> {
    let mut rows = filter(records, &view.filters);
    sort(&mut rows, view.sort.as_ref());
    rows
}

/// The page `view` selects, plus the total match count.
pub fn transform<'a>(records: &'a [Country], view: &ViewState) -> Page<'a> {
    let rows = arrange(records, view);
    paginate(&rows, view.page, view.page_size)
}
