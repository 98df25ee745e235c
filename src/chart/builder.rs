use log::debug;
use serde_json::Value as JsonValue;

use super::series::OccupancyRecord;
use super::spec::{ChartKind, ChartOptions, ChartSpec, Dataset, LegendPosition, Paint};
use crate::color::{Palette, BLUE, TEAL};
use crate::error::{DashboardError, Result};

pub const OCCUPANCY_LABEL: &str = "Current Occupancy";
pub const CAPACITY_LABEL: &str = "Capacity";

/// Pie or doughnut over `label → value` pairs.
///
/// Labels keep the order of `series`. Slice `i` gets palette entry
/// `i % palette.len()`.
pub fn build_category_chart(
    kind: ChartKind,
    series: &[(String, f64)],
    palette: &Palette,
) -> Result<ChartSpec> {
    if !kind.is_category() {
        return Err(DashboardError::UnsupportedKind {
            kind: "grouped_bar",
        });
    }
    if series.is_empty() {
        return Err(DashboardError::EmptySeries);
    }

    let (labels, values): (Vec<String>, Vec<f64>) = series.iter().cloned().unzip();
    let (fill, stroke) = palette.assign(labels.len());

    debug!(
        "{kind} chart: {} slices, palette of {}",
        labels.len(),
        palette.len()
    );

    Ok(ChartSpec {
        kind,
        labels,
        datasets: vec![Dataset {
            label: String::new(),
            values,
            fill: Paint::PerValue(fill),
            stroke: Paint::PerValue(stroke),
        }],
        options: ChartOptions {
            legend: LegendPosition::Right,
            ..ChartOptions::default()
        },
    })
}

/// Occupancy vs. capacity per center, straight from the decoded attribute.
///
/// Fails with `MalformedRecord` on the first record missing `name`,
/// `occupancy` or `capacity`, or holding the wrong type there.
pub fn build_grouped_bar_chart(records: &[JsonValue]) -> Result<ChartSpec> {
    let records = records
        .iter()
        .enumerate()
        .map(|(i, r)| OccupancyRecord::from_json(i, r))
        .collect::<Result<Vec<_>>>()?;
    Ok(grouped_bar_from_records(&records))
}

/// Same as [`build_grouped_bar_chart`] for records that are already typed.
pub fn grouped_bar_from_records(records: &[OccupancyRecord]) -> ChartSpec {
    let labels = records.iter().map(|r| r.name.clone()).collect();
    let occupancy = records.iter().map(|r| r.occupancy).collect();
    let capacity = records.iter().map(|r| r.capacity).collect();

    debug!("grouped bar chart: {} centers", records.len());

    ChartSpec {
        kind: ChartKind::GroupedBar,
        labels,
        datasets: vec![
            Dataset {
                label: OCCUPANCY_LABEL.to_string(),
                values: occupancy,
                fill: Paint::Uniform(TEAL.fill),
                stroke: Paint::Uniform(TEAL.stroke),
            },
            Dataset {
                label: CAPACITY_LABEL.to_string(),
                values: capacity,
                fill: Paint::Uniform(BLUE.fill),
                stroke: Paint::Uniform(BLUE.stroke),
            },
        ],
        options: ChartOptions {
            legend: LegendPosition::Top,
            x_axis_title: Some("Evacuation Centers".to_string()),
            y_axis_title: Some("Number of People".to_string()),
            begin_at_zero: true,
            ..ChartOptions::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(items: &[(&str, f64)]) -> Vec<(String, f64)> {
        items.iter().map(|(l, v)| (l.to_string(), *v)).collect()
    }

    #[test]
    fn pie_keeps_order_and_assigns_two_colors() {
        let series = pairs(&[("A", 3.0), ("B", 1.0)]);
        let spec = build_category_chart(ChartKind::Pie, &series, &Palette::status()).unwrap();
        assert_eq!(spec.labels(), ["A", "B"]);
        assert_eq!(spec.datasets().len(), 1);
        let ds = &spec.datasets()[0];
        assert_eq!(ds.values, vec![3.0, 1.0]);
        assert_eq!(ds.fill.len(), 2);
        assert_eq!(ds.stroke.len(), 2);
    }

    #[test]
    fn empty_doughnut_is_rejected() {
        assert!(matches!(
            build_category_chart(ChartKind::Doughnut, &[], &Palette::binary()),
            Err(DashboardError::EmptySeries)
        ));
    }

    #[test]
    fn bar_kind_is_not_a_category_chart() {
        assert!(matches!(
            build_category_chart(ChartKind::GroupedBar, &pairs(&[("A", 1.0)]), &Palette::status()),
            Err(DashboardError::UnsupportedKind { .. })
        ));
    }

    #[test]
    fn single_center() {
        let record = json!({"name": "Center1", "occupancy": 50, "capacity": 100});
        let spec = build_grouped_bar_chart(&[record]).unwrap();
        assert_eq!(spec.kind(), ChartKind::GroupedBar);
        assert_eq!(spec.labels(), ["Center1"]);
        let values: Vec<_> = spec.datasets().iter().map(|d| d.values.clone()).collect();
        assert_eq!(values, vec![vec![50.0], vec![100.0]]);
        assert_eq!(spec.datasets()[0].label, OCCUPANCY_LABEL);
        assert_eq!(spec.datasets()[1].label, CAPACITY_LABEL);
        assert_ne!(spec.datasets()[0].fill, spec.datasets()[1].fill);
    }

    #[test]
    fn missing_capacity_fails_whole_chart() {
        let records = [
            json!({"name": "North", "occupancy": 5, "capacity": 10}),
            json!({"name": "South", "occupancy": 5}),
        ];
        assert!(matches!(
            build_grouped_bar_chart(&records),
            Err(DashboardError::MalformedRecord { index: 1, field: "capacity" })
        ));
    }

    #[test]
    fn negative_values_pass_through() {
        let record = json!({"name": "X", "occupancy": -1, "capacity": 0});
        let spec = build_grouped_bar_chart(&[record]).unwrap();
        assert_eq!(spec.datasets()[0].values, vec![-1.0]);
    }
}
