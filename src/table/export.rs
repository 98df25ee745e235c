use std::io::Write;

use anyhow::{Context, Result};

use super::model::Table;

/// Output flavours of the table's export buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma separated, quoted where needed ("csv" button).
    #[default]
    Csv,
    /// Tab separated ("copy" button, pastes into spreadsheets).
    Tsv,
}

impl ExportFormat {
    fn delimiter(self) -> u8 {
        match self {
            ExportFormat::Csv => b',',
            ExportFormat::Tsv => b'\t',
        }
    }
}

/// Write the header and the rows visible in `mask`, in `order`.
///
/// This is what the user sees on screen: filtering hides rows, sorting
/// reorders them, and export reproduces both.
pub fn write_visible<W: Write>(
    table: &Table,
    mask: &[bool],
    order: &[usize],
    format: ExportFormat,
    out: W,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(format.delimiter())
        .flexible(true)
        .from_writer(out);

    writer
        .write_record(&table.header)
        .context("writing header row")?;
    for row in table.visible_in_order(mask, order) {
        writer.write_record(row).context("writing row")?;
    }
    writer.flush().context("flushing export")?;
    Ok(())
}

/// [`write_visible`] into a string.
pub fn export_to_string(
    table: &Table,
    mask: &[bool],
    order: &[usize],
    format: ExportFormat,
) -> Result<String> {
    let mut buf = Vec::new();
    write_visible(table, mask, order, format, &mut buf)?;
    String::from_utf8(buf).context("export is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_visible_rows_in_display_order() {
        let t = Table::from_strs(
            &["Item", "Qty"],
            &[&["rice, 5kg", "10"], &["soap", "4"], &["water", "30"]],
        );
        let out = export_to_string(&t, &[true, false, true], &[2, 1, 0], ExportFormat::Csv)
            .unwrap();
        assert_eq!(out, "Item,Qty\nwater,30\n\"rice, 5kg\",10\n");
    }

    #[test]
    fn tsv_uses_tabs() {
        let t = Table::from_strs(&["a", "b"], &[&["1", "2"]]);
        let out = export_to_string(&t, &[true], &[0], ExportFormat::Tsv).unwrap();
        assert_eq!(out, "a\tb\n1\t2\n");
    }
}
