use std::io::Write;

use country_table_domain::SortKey;
use country_table_shared_kernel::Result;

use super::{PageView, utils};

pub(super) fn write_markdown<W: Write>(out: &mut W, ctx: &PageView<'_, '_>) -> Result<()> {
    writeln!(out, "### Countries")?;
    writeln!(out)?;

    let headers: Vec<String> = SortKey::ALL
        .iter()
        .map(|&key| utils::header_label(key, ctx.view.sort.as_ref()))
        .collect();
    writeln!(out, "| {} |", headers.join(" | "))?;
    writeln!(out, "|:---|:---:|:---:|")?;

    for country in &ctx.page.rows {
        writeln!(
            out,
            "| {} | {} | {} |",
            utils::escape_markdown(&country.name_un),
            country.continent.code(),
            country.has_states_label()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "_{}_", utils::footer(ctx.page))?;
    Ok(())
}
