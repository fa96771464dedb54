use country_table_domain::{Page, SortKey, SortOrder, SortSpec, ViewState};

/// Escapes a delimited field when it contains the separator, quotes or a line break.
pub(crate) fn escape_field(field: &str, sep: char) -> String {
    if field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub(crate) fn escape_markdown(cell: &str) -> String {
    cell.replace('|', "\\|")
}

/// `a–b of T`, or `0–0 of T` when the page shows nothing.
pub(crate) fn range_label(page: &Page<'_>) -> String {
    let (start, end) = page.display_range().unwrap_or((0, 0));
    format!("{start}–{end} of {}", page.total)
}

/// `Rows per page: N   a–b of T   (page p/q)`.
pub(crate) fn footer(page: &Page<'_>) -> String {
    format!(
        "Rows per page: {}   {}   (page {}/{})",
        page.page_size,
        range_label(page),
        page.page.saturating_add(1),
        page.page_count().max(1)
    )
}

pub(crate) fn sort_label(sort: Option<&SortSpec>) -> String {
    sort.map_or_else(|| "none".to_string(), ToString::to_string)
}

pub(crate) fn view_summary(view: &ViewState) -> String {
    format!(
        "Continent: {} · Has States: {} · Sort: {}",
        view.filters.continent,
        view.filters.has_states,
        sort_label(view.sort.as_ref())
    )
}

/// Column header carrying the active sort arrow.
pub(crate) fn header_label(key: SortKey, sort: Option<&SortSpec>) -> String {
    match sort {
        Some(spec) if spec.key() == key => {
            let arrow = match spec.order() {
                SortOrder::Ascending => '▲',
                SortOrder::Descending => '▼',
            };
            format!("{} {arrow}", key.label())
        }
        _ => key.label().to_string(),
    }
}
