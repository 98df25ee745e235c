use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::model::{Row, Table};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a rendered table snapshot from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – first record is the header row
/// * `.tsv`  – same, tab separated (what the table's "copy" button yields)
/// * `.json` – `{ "header": [...], "rows": [[...], ...] }`
pub fn load_file(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV file")?;
            read_delimited(file, b',')
        }
        "tsv" => {
            let file = std::fs::File::open(path).context("opening TSV file")?;
            read_delimited(file, b'\t')
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_json(&text)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Delimited text
// ---------------------------------------------------------------------------

/// Read a header row and data rows from delimited text.
///
/// Rows are not required to match the header width; the snapshot keeps them
/// as they are so the table operations can report short rows themselves.
pub fn read_delimited<R: Read>(reader: R, delimiter: u8) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let header: Row = reader
        .headers()
        .context("reading header row")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("row {row_no}"))?;
        rows.push(record.iter().map(|c| c.trim().to_string()).collect());
    }

    log::debug!("loaded table with {} columns, {} rows", header.len(), rows.len());
    Ok(Table::new(header, rows))
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// { "header": ["Name", "Status"], "rows": [["Ana", "active"], ...] }
/// ```
///
/// Numbers, booleans and nulls in cells are kept as their display text.
pub fn parse_json(text: &str) -> Result<Table> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let obj = root.as_object().context("Expected top-level JSON object")?;

    let header = json_row(obj.get("header"), "header")?;
    let rows = obj
        .get("rows")
        .and_then(|v| v.as_array())
        .context("missing or invalid 'rows' array")?
        .iter()
        .enumerate()
        .map(|(i, r)| json_row(Some(r), &format!("rows[{i}]")))
        .collect::<Result<Vec<Row>>>()?;

    Ok(Table::new(header, rows))
}

fn json_row(val: Option<&JsonValue>, what: &str) -> Result<Row> {
    let arr = val
        .and_then(|v| v.as_array())
        .with_context(|| format!("'{what}' is not an array"))?;
    Ok(arr.iter().map(json_cell_text).collect())
}

fn json_cell_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_csv_with_ragged_rows() {
        let text = "Name,Status\nAna, active\nBen\n";
        let t = read_delimited(text.as_bytes(), b',').unwrap();
        assert_eq!(t.header, vec!["Name", "Status"]);
        assert_eq!(t.rows[0], vec!["Ana", "active"]);
        assert_eq!(t.rows[1], vec!["Ben"]);
        assert!(!t.is_rectangular());
    }

    #[test]
    fn reads_json_cells_as_text() {
        let text = r#"{
            "header": ["Center", "Capacity"],
            "rows": [["North", 120], ["South", null]]
        }"#;
        let t = parse_json(text).unwrap();
        assert_eq!(t.rows[0], vec!["North", "120"]);
        assert_eq!(t.rows[1], vec!["South", ""]);
    }

    #[test]
    fn rejects_json_without_rows() {
        assert!(parse_json(r#"{"header":["a"]}"#).is_err());
    }
}
