// src/presentation/structured.rs
use std::io::Write;

use country_table_domain::{Country, HasStatesFilter, ViewState};
use country_table_shared_kernel::Result;
use serde::Serialize;

use super::PageView;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SortReport {
    pub key: &'static str,
    pub order: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ViewReport {
    /// Continent code, `None` for all continents.
    pub continent: Option<&'static str>,
    pub has_states: Option<bool>,
    pub sort: Option<SortReport>,
    /// 1-based.
    pub page: usize,
    /// `None` when pagination is off.
    pub page_size: Option<usize>,
    pub page_count: usize,
}

impl ViewReport {
    pub(super) fn from_view(view: &ViewState, page_count: usize) -> Self {
        Self {
            continent: view.filters.continent.continent().map(|c| c.code()),
            has_states: match view.filters.has_states {
                HasStatesFilter::All => None,
                HasStatesFilter::Yes => Some(true),
                HasStatesFilter::No => Some(false),
            },
            sort: view.sort.map(|s| SortReport { key: s.key().as_str(), order: s.order().as_str() }),
            page: view.page.saturating_add(1),
            page_size: view.page_size.limit(),
            page_count,
        }
    }
}

#[derive(Debug, Serialize)]
struct Report<'r> {
    version: &'static str,
    view: ViewReport,
    total: usize,
    rows: &'r [&'r Country],
}

fn report<'r>(ctx: &'r PageView<'_, '_>) -> Report<'r> {
    Report {
        version: crate::VERSION,
        view: ViewReport::from_view(ctx.view, ctx.page.page_count()),
        total: ctx.page.total,
        rows: &ctx.page.rows,
    }
}

pub(super) fn write_json<W: Write>(out: &mut W, ctx: &PageView<'_, '_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &report(ctx))?;
    writeln!(out)?;
    Ok(())
}

#[cfg(feature = "yaml")]
pub(super) fn write_yaml<W: Write>(out: &mut W, ctx: &PageView<'_, '_>) -> Result<()> {
    serde_yaml::to_writer(&mut *out, &report(ctx))?;
    Ok(())
}
