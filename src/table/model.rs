use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// Table – a snapshot of a rendered grid
// ---------------------------------------------------------------------------

/// One data row: cell texts in column order.
pub type Row = Vec<String>;

/// Visibility of each data row, in row order.
pub type Mask = Vec<bool>;

/// Data-row indices in display order.
pub type Permutation = Vec<usize>;

/// Header row plus data rows, captured from the display layer at render time.
///
/// Rows are expected to have as many cells as the header, but a snapshot is
/// taken as-is; operations that need a column check every row they touch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Row,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(header: Row, rows: Vec<Row>) -> Self {
        Table { header, rows }
    }

    /// Convenience constructor for literal tables.
    pub fn from_strs(header: &[&str], rows: &[&[&str]]) -> Self {
        Table {
            header: header.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    /// Number of columns, as given by the header.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether every data row has exactly the header's cell count.
    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|r| r.len() == width)
    }

    /// Cell text at (`row`, `column`), or `InvalidColumn` if the row is too
    /// short. A row past the end counts as having no cells.
    pub fn cell(&self, row: usize, column: usize) -> Result<&str> {
        let cells = self.rows.get(row).map(Vec::as_slice).unwrap_or(&[]);
        cells
            .get(column)
            .map(String::as_str)
            .ok_or(DashboardError::InvalidColumn {
                column,
                row,
                width: cells.len(),
            })
    }

    /// Collect the text of `column` for every data row, failing on the first
    /// row that lacks it.
    pub fn column(&self, column: usize) -> Result<Vec<&str>> {
        (0..self.rows.len()).map(|i| self.cell(i, column)).collect()
    }

    /// Rows in `order`, leaving `self` untouched.
    pub fn reordered(&self, order: &[usize]) -> Table {
        Table {
            header: self.header.clone(),
            rows: apply_permutation(&self.rows, order),
        }
    }

    /// Rows in `order` that are also visible in `mask`. Indices past the
    /// row count or the mask are skipped.
    pub fn visible_in_order(&self, mask: &[bool], order: &[usize]) -> Vec<&Row> {
        order
            .iter()
            .filter(|&&i| mask.get(i).copied().unwrap_or(false))
            .filter_map(|&i| self.rows.get(i))
            .collect()
    }
}

/// Clone `items` into the order given by `order`. Indices past the end of
/// `items` are skipped.
pub fn apply_permutation<T: Clone>(items: &[T], order: &[usize]) -> Vec<T> {
    order.iter().filter_map(|&i| items.get(i).cloned()).collect()
}

/// The permutation that leaves `len` rows where they are.
pub fn identity(len: usize) -> Permutation {
    (0..len).collect()
}
