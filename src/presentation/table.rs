// src/presentation/table.rs
use std::io::Write;

use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Table,
    presets::{ASCII_FULL, UTF8_FULL},
};
use country_table_domain::SortKey;
use country_table_shared_kernel::Result;

use super::{PageView, utils};

pub(super) fn write_table<W: Write>(out: &mut W, ctx: &PageView<'_, '_>) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(if ctx.ascii { ASCII_FULL } else { UTF8_FULL })
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(
            SortKey::ALL
                .iter()
                .map(|&key| Cell::new(utils::header_label(key, ctx.view.sort.as_ref()))),
        );

    for country in &ctx.page.rows {
        table.add_row(vec![
            Cell::new(&country.name_un),
            Cell::new(country.continent.code()),
            Cell::new(country.has_states_label()),
        ]);
    }
    for index in 1..SortKey::ALL.len() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Center);
        }
    }

    writeln!(out, "{table}")?;
    if ctx.page.is_empty() {
        writeln!(out, "(no matching countries)")?;
    }
    writeln!(out, "{}", utils::footer(ctx.page))?;
    writeln!(out, "{}", utils::view_summary(ctx.view))?;
    Ok(())
}
