use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::chart::ChartKind;
use crate::color::Palette;

/// How one chart element on the dashboard is turned into a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPreset {
    /// Id of the canvas element the chart is drawn into.
    pub element_id: String,
    /// Attribute holding the server-rendered JSON.
    pub data_attribute: String,
    pub kind: ChartKind,
    /// Number of palette colours cycled over the slices. Ignored for bars.
    #[serde(default = "default_palette_size")]
    pub palette_size: usize,
    #[serde(default)]
    pub title: Option<String>,
}

fn default_palette_size() -> usize {
    4
}

impl ChartPreset {
    pub fn palette(&self) -> Palette {
        Palette::standard(self.palette_size)
    }
}

/// All chart presets known to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub charts: Vec<ChartPreset>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            charts: vec![
                ChartPreset {
                    element_id: "evacueeStatusChart".into(),
                    data_attribute: "data-status".into(),
                    kind: ChartKind::Pie,
                    palette_size: 4,
                    title: Some("Evacuee Status Distribution".into()),
                },
                ChartPreset {
                    element_id: "donationTypesChart".into(),
                    data_attribute: "data-types".into(),
                    kind: ChartKind::Doughnut,
                    palette_size: 2,
                    title: Some("Donation Types Distribution".into()),
                },
                ChartPreset {
                    element_id: "centerOccupancyChart".into(),
                    data_attribute: "data-centers".into(),
                    kind: ChartKind::GroupedBar,
                    palette_size: default_palette_size(),
                    title: Some("Evacuation Center Occupancy".into()),
                },
            ],
        }
    }
}

impl DashboardConfig {
    /// Load presets from a JSON file: `{ "charts": [ {...}, ... ] }`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: DashboardConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::debug!("loaded {} chart presets from {}", config.charts.len(), path.display());
        Ok(config)
    }

    pub fn preset(&self, element_id: &str) -> Option<&ChartPreset> {
        self.charts.iter().find(|c| c.element_id == element_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_dashboard_charts() {
        let config = DashboardConfig::default();
        assert_eq!(config.preset("evacueeStatusChart").unwrap().palette().len(), 4);
        assert_eq!(config.preset("donationTypesChart").unwrap().palette().len(), 2);
        assert_eq!(
            config.preset("centerOccupancyChart").unwrap().kind,
            ChartKind::GroupedBar
        );
        assert!(config.preset("unknown").is_none());
    }

    #[test]
    fn preset_fields_default() {
        let text = r#"{"charts":[
            {"element_id": "genderChart", "data_attribute": "data-gender", "kind": "pie"}
        ]}"#;
        let config: DashboardConfig = serde_json::from_str(text).unwrap();
        let p = &config.charts[0];
        assert_eq!(p.palette_size, 4);
        assert_eq!(p.title, None);
    }
}
