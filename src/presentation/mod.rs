// src/presentation/mod.rs
//! Renderers for one page of the country table.

mod continents;
mod delimited;
mod jsonl;
mod markdown;
mod structured;
mod table;
pub(crate) mod utils;
mod writer;

use std::io::Write;

use country_table_domain::{Page, ViewState};
use country_table_shared_kernel::Result;

pub use continents::write_continents;
pub use writer::OutputWriter;

use crate::config::OutputFormat;

/// Everything a renderer reads for one page.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'v, 'a> {
    pub page: &'v Page<'a>,
    pub view: &'v ViewState,
    /// Draw the table with ASCII borders.
    pub ascii: bool,
}

impl<'v, 'a> PageView<'v, 'a> {
    pub fn new(page: &'v Page<'a>, view: &'v ViewState) -> Self {
        Self { page, view, ascii: false }
    }

    #[must_use]
    pub fn ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }
}

/// Writes `ctx` in `format`.
///
/// # Errors
///
/// Fails when the sink rejects a write or serialization fails.
pub fn render<W: Write>(out: &mut W, format: OutputFormat, ctx: &PageView<'_, '_>) -> Result<()> {
    match format {
        OutputFormat::Table => table::write_table(out, ctx),
        OutputFormat::Csv => delimited::write_delimited(out, ctx, ','),
        OutputFormat::Tsv => delimited::write_delimited(out, ctx, '\t'),
        OutputFormat::Md => markdown::write_markdown(out, ctx),
        OutputFormat::Json => structured::write_json(out, ctx),
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => structured::write_yaml(out, ctx),
        OutputFormat::Jsonl => jsonl::write_jsonl(out, ctx),
    }
}
