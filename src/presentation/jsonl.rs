use std::io::Write;

use country_table_shared_kernel::Result;
use serde_json::{Value, json};

use super::{PageView, structured::ViewReport};

/// One `country` object per row, then a closing `page` object.
pub(super) fn write_jsonl<W: Write>(out: &mut W, ctx: &PageView<'_, '_>) -> Result<()> {
    for country in &ctx.page.rows {
        let mut value = serde_json::to_value(country)?;
        if let Value::Object(obj) = &mut value {
            obj.insert("type".to_string(), "country".into());
        }
        writeln!(out, "{value}")?;
    }

    let page = json!({
        "type": "page",
        "version": crate::VERSION,
        "total": ctx.page.total,
        "view": ViewReport::from_view(ctx.view, ctx.page.page_count()),
    });
    writeln!(out, "{page}")?;
    Ok(())
}
