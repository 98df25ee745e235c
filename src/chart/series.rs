use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// Occupancy record – one evacuation center
// ---------------------------------------------------------------------------

/// Current headcount and capacity of one center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyRecord {
    pub name: String,
    pub occupancy: f64,
    pub capacity: f64,
}

impl OccupancyRecord {
    /// Check the structural shape of record `index` and extract it.
    ///
    /// Only presence and type are checked; values are taken as given.
    pub fn from_json(index: usize, value: &JsonValue) -> Result<Self> {
        let malformed = |field| DashboardError::MalformedRecord { index, field };
        let obj = value.as_object().ok_or(malformed("name"))?;

        let name = obj
            .get("name")
            .and_then(JsonValue::as_str)
            .ok_or(malformed("name"))?
            .to_string();
        let occupancy = obj
            .get("occupancy")
            .and_then(JsonValue::as_f64)
            .ok_or(malformed("occupancy"))?;
        let capacity = obj
            .get("capacity")
            .and_then(JsonValue::as_f64)
            .ok_or(malformed("capacity"))?;

        Ok(OccupancyRecord {
            name,
            occupancy,
            capacity,
        })
    }
}

// ---------------------------------------------------------------------------
// ChartSeries – the decoded data attribute
// ---------------------------------------------------------------------------

/// Chart data as embedded in the page by the server.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSeries {
    /// `{"active": 12, "relocated": 3, ...}` in document order.
    Category(Vec<(String, f64)>),
    /// `[{"name": ..., "occupancy": ..., "capacity": ...}, ...]`
    Occupancy(Vec<JsonValue>),
}

impl ChartSeries {
    /// Decode the raw attribute text. Key order of a JSON object is kept.
    pub fn from_attribute(raw: &str) -> Result<Self> {
        let root: JsonValue = serde_json::from_str(raw)?;
        match root {
            JsonValue::Object(map) => Ok(ChartSeries::Category(category_pairs(map)?)),
            JsonValue::Array(records) => Ok(ChartSeries::Occupancy(records)),
            _ => Err(DashboardError::UnexpectedShape {
                expected: "an object of label → number or an array of records",
            }),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ChartSeries::Category(pairs) => pairs.len(),
            ChartSeries::Occupancy(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn category_pairs(map: Map<String, JsonValue>) -> Result<Vec<(String, f64)>> {
    map.into_iter()
        .map(|(label, value)| match value.as_f64() {
            Some(v) => Ok((label, v)),
            None => Err(DashboardError::NonNumericValue { label }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_keeps_document_order() {
        let raw = r#"{"relocated": 2, "active": 7, "missing": 0}"#;
        let s = ChartSeries::from_attribute(raw).unwrap();
        assert_eq!(
            s,
            ChartSeries::Category(vec![
                ("relocated".into(), 2.0),
                ("active".into(), 7.0),
                ("missing".into(), 0.0),
            ])
        );
    }

    #[test]
    fn invalid_json_is_malformed_input() {
        assert!(matches!(
            ChartSeries::from_attribute("{'active': 1"),
            Err(DashboardError::MalformedInput(_))
        ));
    }

    #[test]
    fn scalar_is_unexpected_shape() {
        assert!(matches!(
            ChartSeries::from_attribute("42"),
            Err(DashboardError::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn string_count_is_rejected() {
        match ChartSeries::from_attribute(r#"{"food": "3"}"#) {
            Err(DashboardError::NonNumericValue { label }) => assert_eq!(label, "food"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn record_fields_are_checked_in_order() {
        let bad = serde_json::json!({"name": "Gym", "occupancy": "full", "capacity": 10});
        assert!(matches!(
            OccupancyRecord::from_json(3, &bad),
            Err(DashboardError::MalformedRecord { index: 3, field: "occupancy" })
        ));
        let ok = serde_json::json!({"name": "Gym", "occupancy": 4, "capacity": 10, "id": 9});
        assert_eq!(OccupancyRecord::from_json(0, &ok).unwrap().capacity, 10.0);
    }
}
