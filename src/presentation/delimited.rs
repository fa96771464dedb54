use std::io::Write;

use country_table_shared_kernel::Result;

use super::{PageView, utils::escape_field};

const HEADER: [&str; 6] = ["id", "name", "name_un", "code", "continent", "has_states"];

pub(super) fn write_delimited<W: Write>(out: &mut W, ctx: &PageView<'_, '_>, sep: char) -> Result<()> {
    let sep_text = sep.to_string();
    writeln!(out, "{}", HEADER.join(&sep_text))?;

    for country in &ctx.page.rows {
        let fields = [
            escape_field(&country.id, sep),
            escape_field(&country.name, sep),
            escape_field(&country.name_un, sep),
            escape_field(&country.code, sep),
            country.continent.code().to_string(),
            country.has_states.to_string(),
        ];
        writeln!(out, "{}", fields.join(&sep_text))?;
    }
    Ok(())
}
