/// Table layer: snapshot type, filtering, sorting, loading and export.
///
/// Architecture:
/// ```text
///  rendered grid (.csv / .tsv / .json)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read header + rows → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │  filter   │      │   sort    │
///   └──────────┘      └──────────┘
///     mask (Vec<bool>)   permutation (Vec<usize>)
///        │                  │
///        └────────┬─────────┘
///                 ▼
///           ┌──────────┐
///           │  export   │  visible rows in display order → csv / tsv
///           └──────────┘
/// ```
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;

pub use filter::{filter_rows, filter_rows_lenient, search_rows, FilterSpec};
pub use model::{apply_permutation, Mask, Permutation, Row, Table};
pub use sort::{sort_rows, Direction, SortSpec};
