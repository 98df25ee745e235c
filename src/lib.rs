//! Table and chart glue for the relief operations dashboard.
//!
//! Two independent pieces:
//! * [`table`] – filter and sort over a rendered grid of text cells
//! * [`chart`] – turn server-embedded JSON into renderer-agnostic chart specs
//!
//! plus the palette, chart presets, click-to-sort view state and form rules
//! that sit around them.

pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod state;
pub mod table;
pub mod validation;

pub use error::{DashboardError, Result};
