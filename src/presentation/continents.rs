use std::io::Write;

use country_table_domain::Continent;
use country_table_shared_kernel::Result;

/// Prints the continent selector options with their record counts.
///
/// # Errors
///
/// Fails when the sink rejects a write.
pub fn write_continents<W: Write>(out: &mut W, counts: &[(Continent, usize)]) -> Result<()> {
    writeln!(out, "{:<4} {:<15} {:>5}", "CODE", "CONTINENT", "COUNT")?;
    for (continent, count) in counts {
        writeln!(out, "{:<4} {:<15} {count:>5}", continent.code(), continent.display_name())?;
    }
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    writeln!(out, "{:<4} {:<15} {total:>5}", "", "All")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_in_given_order_with_total() {
        let counts = [(Continent::Africa, 2), (Continent::SouthAmerica, 1)];
        let mut buf = Vec::new();
        write_continents(&mut buf, &counts).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("AF   Africa"));
        assert!(lines[2].starts_with("SA   South America"));
        assert!(lines[3].trim_end().ends_with('3'));
    }
}
