use thiserror::Error;

/// Everything the table and chart transforms can reject.
///
/// Each operation either returns its full result or one of these; there is
/// no partial mask, permutation or chart.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("column {column} does not exist in row {row} (row has {width} cells)")]
    InvalidColumn {
        column: usize,
        row: usize,
        width: usize,
    },

    #[error("category chart has no data points")]
    EmptySeries,

    #[error("record {index}: field '{field}' is missing or has the wrong type")]
    MalformedRecord { index: usize, field: &'static str },

    #[error("chart data is not valid JSON: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("chart data has unexpected shape, expected {expected}")]
    UnexpectedShape { expected: &'static str },

    #[error("value for label '{label}' is not a number")]
    NonNumericValue { label: String },

    #[error("chart kind '{kind}' cannot be built from this series")]
    UnsupportedKind { kind: &'static str },

    #[error("element '{element}' has no '{attribute}' attribute")]
    MissingAttribute { element: String, attribute: String },

    #[error("palette has no entries")]
    EmptyPalette,

    #[error("'{input}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate { input: String },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
