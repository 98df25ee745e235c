use log::{debug, warn};

use super::model::{Mask, Table};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Filter predicate: case-insensitive substring on one column
// ---------------------------------------------------------------------------

/// Which column to look at and what to look for in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub column: usize,
    pub query: String,
}

impl FilterSpec {
    pub fn new(column: usize, query: impl Into<String>) -> Self {
        FilterSpec {
            column,
            query: query.into(),
        }
    }
}

/// Upper-cased needle; `None` means "no filter" (show all).
fn needle(query: &str) -> Option<String> {
    if query.is_empty() {
        None
    } else {
        Some(query.to_uppercase())
    }
}

/// Both sides are folded to upper case, the way the dashboard's own table
/// filter compares them.
fn contains_ci(text: &str, needle: &str) -> bool {
    text.to_uppercase().contains(needle)
}

/// Visibility mask for `spec` over the data rows of `table`.
///
/// A row is visible when its cell at `spec.column` contains `spec.query`,
/// ignoring case. An empty query shows every row. Fails with
/// `InvalidColumn` if any row lacks the column.
pub fn filter_rows(table: &Table, spec: &FilterSpec) -> Result<Mask> {
    let cells = table.column(spec.column)?;
    let mask: Mask = match needle(&spec.query) {
        None => vec![true; cells.len()],
        Some(n) => cells.iter().map(|c| contains_ci(c, &n)).collect(),
    };
    debug!(
        "filter column {} by {:?}: {}/{} rows visible",
        spec.column,
        spec.query,
        mask.iter().filter(|v| **v).count(),
        mask.len()
    );
    Ok(mask)
}

/// Like [`filter_rows`], but never fails.
///
/// * Empty query → every row visible, short or not
/// * Row too short to have `spec.column` → hidden
pub fn filter_rows_lenient(table: &Table, spec: &FilterSpec) -> Mask {
    let Some(n) = needle(&spec.query) else {
        return vec![true; table.len()];
    };
    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| match row.get(spec.column) {
            Some(cell) => contains_ci(cell, &n),
            None => {
                warn!(
                    "row {i} has {} cells, hiding it for column {} filter",
                    row.len(),
                    spec.column
                );
                false
            }
        })
        .collect()
}

/// Table-wide search: a row is visible when any of its cells contains
/// `query`, ignoring case.
pub fn search_rows(table: &Table, query: &str) -> Mask {
    let Some(n) = needle(query) else {
        return vec![true; table.len()];
    };
    table
        .rows
        .iter()
        .map(|row| row.iter().any(|c| contains_ci(c, &n)))
        .collect()
}

/// Combine two masks: visible only where both are.
pub fn intersect(a: &[bool], b: &[bool]) -> Mask {
    a.iter().zip(b).map(|(x, y)| *x && *y).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;

    fn evacuees() -> Table {
        Table::from_strs(
            &["Name", "Status", "Center"],
            &[
                &["Ana Reyes", "active", "North Gym"],
                &["Ben Cruz", "relocated", "South Hall"],
                &["Carla Diaz", "Active", "North Gym"],
            ],
        )
    }

    #[test]
    fn matches_substring_ignoring_case() {
        let mask = filter_rows(&evacuees(), &FilterSpec::new(1, "ACT")).unwrap();
        assert_eq!(mask, vec![true, false, true]);
    }

    #[test]
    fn folds_to_upper_case() {
        let t = Table::from_strs(&["Street"], &[&["STRASSE 4"], &["Gasse 2"]]);
        let mask = filter_rows(&t, &FilterSpec::new(0, "straße")).unwrap();
        assert_eq!(mask, vec![true, false]);
        assert_eq!(search_rows(&t, "ß"), vec![true, true]);
    }

    #[test]
    fn empty_query_shows_everything() {
        let mask = filter_rows(&evacuees(), &FilterSpec::new(2, "")).unwrap();
        assert_eq!(mask, vec![true; 3]);
    }

    #[test]
    fn short_second_row_is_invalid_column() {
        let t = Table::from_strs(&["a", "b"], &[&["1", "2"], &["3"]]);
        let err = filter_rows(&t, &FilterSpec::new(1, "x")).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidColumn { column: 1, row: 1, .. }));
    }

    #[test]
    fn lenient_hides_short_rows() {
        let t = Table::from_strs(&["a", "b"], &[&["1", "x2"], &["3"]]);
        assert_eq!(filter_rows_lenient(&t, &FilterSpec::new(1, "x")), vec![true, false]);
        assert_eq!(filter_rows_lenient(&t, &FilterSpec::new(1, "")), vec![true, true]);
    }

    #[test]
    fn search_looks_at_every_column() {
        let mask = search_rows(&evacuees(), "south");
        assert_eq!(mask, vec![false, true, false]);
        assert_eq!(intersect(&mask, &[true, false, true]), vec![false; 3]);
    }

    #[test]
    fn filter_is_idempotent() {
        let t = evacuees();
        let spec = FilterSpec::new(0, "a");
        assert_eq!(filter_rows(&t, &spec).unwrap(), filter_rows(&t, &spec).unwrap());
    }
}
