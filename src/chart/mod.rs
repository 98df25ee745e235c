//! Chart layer: decode server-embedded chart data and build chart specs.

pub mod builder;
pub mod series;
pub mod spec;

pub use builder::{build_category_chart, build_grouped_bar_chart, grouped_bar_from_records};
pub use series::{ChartSeries, OccupancyRecord};
pub use spec::{ChartKind, ChartOptions, ChartSpec, Dataset, LegendPosition, Paint};

use std::collections::BTreeMap;

use log::debug;

use crate::config::{ChartPreset, DashboardConfig};
use crate::error::{DashboardError, Result};

/// A chart element found on the page: its id and its attributes
/// (name → raw text).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartElement {
    pub id: String,
    pub attributes: BTreeMap<String, String>,
}

impl ChartElement {
    pub fn new(id: impl Into<String>) -> Self {
        ChartElement {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Decode `raw` and build the chart `preset` describes.
pub fn build_chart(preset: &ChartPreset, raw: &str) -> Result<ChartSpec> {
    let series = ChartSeries::from_attribute(raw)?;
    let spec = match (preset.kind, series) {
        (ChartKind::GroupedBar, ChartSeries::Occupancy(records)) => {
            build_grouped_bar_chart(&records)?
        }
        (kind, ChartSeries::Category(pairs)) if kind.is_category() => {
            build_category_chart(kind, &pairs, &preset.palette())?
        }
        (ChartKind::GroupedBar, ChartSeries::Category(_)) => {
            return Err(DashboardError::UnexpectedShape {
                expected: "an array of center records",
            })
        }
        _ => {
            return Err(DashboardError::UnexpectedShape {
                expected: "an object of label → number",
            })
        }
    };
    Ok(match &preset.title {
        Some(title) => spec.with_title(title.clone()),
        None => spec,
    })
}

/// One-time page initialization: build a chart for every element that has a
/// preset, in element order, from the attribute the preset names. Elements
/// without a preset are skipped. The first failure aborts and is returned.
pub fn init_charts(
    config: &DashboardConfig,
    elements: &[ChartElement],
) -> Result<Vec<(String, ChartSpec)>> {
    let mut charts = Vec::new();
    for element in elements {
        let Some(preset) = config.preset(&element.id) else {
            debug!("no chart preset for element '{}', skipping", element.id);
            continue;
        };
        let raw = element
            .attribute(&preset.data_attribute)
            .ok_or_else(|| DashboardError::MissingAttribute {
                element: element.id.clone(),
                attribute: preset.data_attribute.clone(),
            })?;
        let spec = build_chart(preset, raw)?;
        charts.push((element.id.clone(), spec));
    }
    debug!("initialized {} charts", charts.len());
    Ok(charts)
}
