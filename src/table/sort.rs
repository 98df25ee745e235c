use std::cmp::Ordering;
use std::fmt;

use log::debug;

use super::model::{identity, Permutation, Table};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Sort order: one column, one direction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => write!(f, "asc"),
            Direction::Descending => write!(f, "desc"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: usize,
    pub direction: Direction,
}

impl SortSpec {
    pub fn ascending(column: usize) -> Self {
        SortSpec {
            column,
            direction: Direction::Ascending,
        }
    }

    pub fn descending(column: usize) -> Self {
        SortSpec {
            column,
            direction: Direction::Descending,
        }
    }
}

/// Display order of the data rows of `table` sorted by the text in
/// `spec.column`.
///
/// Keys are compared as lowercased strings, so "10" sorts before "9". The
/// sort is stable in both directions: rows with equal keys keep their
/// original relative order. Tables with fewer than two rows come back as
/// the identity without looking at the column.
pub fn sort_rows(table: &Table, spec: &SortSpec) -> Result<Permutation> {
    if table.len() < 2 {
        return Ok(identity(table.len()));
    }

    let keys: Vec<String> = table
        .column(spec.column)?
        .into_iter()
        .map(str::to_lowercase)
        .collect();

    let mut order = identity(keys.len());
    // slice::sort_by is stable; descending reverses the comparison, not the
    // result, so ties stay in input order.
    order.sort_by(|&a, &b| compare(&keys[a], &keys[b], spec.direction));

    debug!(
        "sorted {} rows by column {} {}",
        order.len(),
        spec.column,
        spec.direction
    );
    Ok(order)
}

fn compare(a: &str, b: &str, direction: Direction) -> Ordering {
    match direction {
        Direction::Ascending => a.cmp(b),
        Direction::Descending => b.cmp(a),
    }
}
