use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use crate::color::CssColor;

// ---------------------------------------------------------------------------
// ChartKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Doughnut,
    GroupedBar,
}

impl ChartKind {
    /// Chart type name understood by the rendering library.
    pub fn renderer_type(self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
            ChartKind::GroupedBar => "bar",
        }
    }

    pub fn is_category(self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Doughnut)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
            ChartKind::GroupedBar => "grouped_bar",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// Either one colour for every value of a dataset, or one per value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Uniform(CssColor),
    PerValue(Vec<CssColor>),
}

impl Paint {
    /// Number of distinct colour slots this paint assigns.
    pub fn len(&self) -> usize {
        match self {
            Paint::Uniform(_) => 1,
            Paint::PerValue(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One series of values drawn against the chart's labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
    pub fill: Paint,
    pub stroke: Paint,
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
    Right,
    Bottom,
    Left,
}

/// Presentation hints handed to the renderer alongside the data.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartOptions {
    pub title: Option<String>,
    pub legend: LegendPosition,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    pub begin_at_zero: bool,
}

// ---------------------------------------------------------------------------
// ChartSpec
// ---------------------------------------------------------------------------

/// A renderer-agnostic chart: labels along one axis and one or more
/// datasets aligned with them.
///
/// Built by the functions in [`super::builder`]; fields are read-only to
/// callers. [`ChartSpec::with_title`] is the only adjustment allowed before
/// handing it to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub(crate) kind: ChartKind,
    pub(crate) labels: Vec<String>,
    pub(crate) datasets: Vec<Dataset>,
    pub(crate) options: ChartOptions,
}

impl ChartSpec {
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.title = Some(title.into());
        self
    }

    /// The configuration object passed to the chart library's constructor.
    pub fn to_renderer_json(&self) -> JsonValue {
        let datasets: Vec<JsonValue> = self
            .datasets
            .iter()
            .map(|d| {
                let mut ds = json!({
                    "data": d.values,
                    "backgroundColor": d.fill,
                    "borderColor": d.stroke,
                    "borderWidth": 1,
                });
                if !d.label.is_empty() {
                    ds["label"] = json!(d.label);
                }
                ds
            })
            .collect();

        let mut plugins = json!({ "legend": { "position": self.options.legend } });
        if let Some(title) = &self.options.title {
            plugins["title"] = json!({ "display": true, "text": title });
        }

        let mut options = json!({ "responsive": true, "plugins": plugins });
        if self.kind == ChartKind::GroupedBar {
            options["scales"] = json!({
                "y": {
                    "beginAtZero": self.options.begin_at_zero,
                    "title": axis_title(&self.options.y_axis_title),
                },
                "x": { "title": axis_title(&self.options.x_axis_title) },
            });
        }

        json!({
            "type": self.kind.renderer_type(),
            "data": { "labels": self.labels, "datasets": datasets },
            "options": options,
        })
    }
}

fn axis_title(title: &Option<String>) -> JsonValue {
    match title {
        Some(text) => json!({ "display": true, "text": text }),
        None => json!({ "display": false }),
    }
}
