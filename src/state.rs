use crate::error::Result;
use crate::table::filter::intersect;
use crate::table::model::identity;
use crate::table::{
    filter_rows, search_rows, sort_rows, Direction, FilterSpec, Mask, Permutation, Row, SortSpec,
    Table,
};

// ---------------------------------------------------------------------------
// Table view state
// ---------------------------------------------------------------------------

/// What the user has done to one table: the column filter, the search box,
/// the clicked sort header, and the resulting visible rows.
///
/// The table operations are pure; this is where the click-to-sort toggle
/// and the cached results live.
pub struct TableView {
    /// Snapshot of the rendered table.
    pub table: Table,

    /// Per-column filter, if any.
    pub filter: Option<FilterSpec>,

    /// Table-wide search text ("" = none).
    pub search: String,

    /// Current sort, if a header has been clicked.
    pub sort: Option<SortSpec>,

    /// Row visibility under `filter` and `search` (cached).
    pub mask: Mask,

    /// Display order under `sort` (cached).
    pub order: Permutation,
}

impl TableView {
    pub fn new(table: Table) -> Self {
        let n = table.len();
        Self {
            table,
            filter: None,
            search: String::new(),
            sort: None,
            mask: vec![true; n],
            order: identity(n),
        }
    }

    /// Sort by `column` as a header click would: ascending on first click,
    /// flip on repeated click of the same column, ascending again when the
    /// column changes.
    pub fn click_header(&mut self, column: usize) -> Result<Direction> {
        let direction = match self.sort {
            Some(current) if current.column == column => current.direction.flipped(),
            _ => Direction::Ascending,
        };
        let spec = SortSpec { column, direction };
        self.order = sort_rows(&self.table, &spec)?;
        self.sort = Some(spec);
        Ok(direction)
    }

    /// Set the column filter and recompute visibility. On error nothing
    /// changes.
    pub fn set_filter(&mut self, spec: FilterSpec) -> Result<()> {
        self.mask = self.compute_mask(Some(&spec), &self.search)?;
        self.filter = Some(spec);
        Ok(())
    }

    pub fn clear_filter(&mut self) -> Result<()> {
        self.mask = self.compute_mask(None, &self.search)?;
        self.filter = None;
        Ok(())
    }

    /// Set the search text and recompute visibility. On error nothing
    /// changes.
    pub fn set_search(&mut self, query: impl Into<String>) -> Result<()> {
        let query = query.into();
        self.mask = self.compute_mask(self.filter.as_ref(), &query)?;
        self.search = query;
        Ok(())
    }

    /// Recompute `mask` from the stored filter and search.
    pub fn refilter(&mut self) -> Result<()> {
        self.mask = self.compute_mask(self.filter.as_ref(), &self.search)?;
        Ok(())
    }

    fn compute_mask(&self, filter: Option<&FilterSpec>, search: &str) -> Result<Mask> {
        let by_column = match filter {
            Some(spec) => filter_rows(&self.table, spec)?,
            None => vec![true; self.table.len()],
        };
        Ok(intersect(&by_column, &search_rows(&self.table, search)))
    }

    /// Rows as displayed: visible ones, in sort order.
    pub fn visible_rows(&self) -> Vec<&Row> {
        self.table.visible_in_order(&self.mask, &self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;

    fn view() -> TableView {
        TableView::new(Table::from_strs(
            &["Center", "Status"],
            &[&["North", "open"], &["East", "full"], &["West", "open"]],
        ))
    }

    fn names(v: &TableView) -> Vec<&str> {
        v.visible_rows().into_iter().map(|r| r[0].as_str()).collect()
    }

    #[test]
    fn header_clicks_toggle_direction() {
        let mut v = view();
        assert_eq!(v.click_header(0).unwrap(), Direction::Ascending);
        assert_eq!(names(&v), vec!["East", "North", "West"]);
        assert_eq!(v.click_header(0).unwrap(), Direction::Descending);
        assert_eq!(names(&v), vec!["West", "North", "East"]);
        assert_eq!(v.click_header(1).unwrap(), Direction::Ascending);
        assert_eq!(v.click_header(0).unwrap(), Direction::Ascending);
    }

    #[test]
    fn filter_and_search_combine() {
        let mut v = view();
        v.set_filter(FilterSpec::new(1, "open")).unwrap();
        assert_eq!(names(&v), vec!["North", "West"]);
        v.set_search("we").unwrap();
        assert_eq!(names(&v), vec!["West"]);
        v.clear_filter().unwrap();
        v.set_search("").unwrap();
        assert_eq!(names(&v), vec!["North", "East", "West"]);
    }

    #[test]
    fn bad_column_keeps_previous_state() {
        let mut v = view();
        v.click_header(0).unwrap();
        let before = v.order.clone();
        assert!(matches!(
            v.click_header(7),
            Err(DashboardError::InvalidColumn { .. })
        ));
        assert_eq!(v.order, before);
        assert_eq!(v.sort, Some(SortSpec::ascending(0)));
    }

    #[test]
    fn rejected_filter_is_not_stored() {
        let mut v = view();
        v.set_filter(FilterSpec::new(1, "open")).unwrap();
        assert!(matches!(
            v.set_filter(FilterSpec::new(7, "x")),
            Err(DashboardError::InvalidColumn { column: 7, .. })
        ));
        assert_eq!(v.filter, Some(FilterSpec::new(1, "open")));
        assert_eq!(names(&v), vec!["North", "West"]);

        v.set_search("north").unwrap();
        assert_eq!(v.search, "north");
        assert_eq!(names(&v), vec!["North"]);
    }
}
