use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A sample location on the regular coverage lattice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GridPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Target comparison attached to a coverage cell.
///
/// Only present when a positive target exists for the cell's marketing area
/// and the requested business line. The absence of this record is the
/// explicit "no target" state; it is never encoded as a zero ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetComparison {
    pub business_line: String,
    pub target_value: f64,
    /// Covering vendors of the target business line under current filters.
    pub actual_value: f64,
    /// `actual_value / target_value`; defined iff `target_value > 0`.
    pub performance_ratio: f64,
}

/// Per-grid-point coverage aggregate.
///
/// Breakdowns use ordered maps so serialized output is deterministic across
/// runs with identical inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageCell {
    pub lat: f64,
    pub lng: f64,
    /// Total vendors whose service radius covers this point.
    pub total_vendors: u32,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub by_business_line: BTreeMap<String, u32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub by_grade: BTreeMap<String, u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetComparison>,
}

impl CoverageCell {
    pub fn new(point: GridPoint) -> Self {
        Self {
            lat: point.lat,
            lng: point.lng,
            total_vendors: 0,
            by_business_line: BTreeMap::new(),
            by_grade: BTreeMap::new(),
            area_id: None,
            area_name: None,
            target: None,
        }
    }

    /// Covering-vendor count for one business line, zero when none.
    pub fn business_line_count(&self, business_line: &str) -> u32 {
        self.by_business_line
            .get(business_line)
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell() {
        let cell = CoverageCell::new(GridPoint::new(35.7, 51.4));
        assert_eq!(cell.total_vendors, 0);
        assert_eq!(cell.business_line_count("Restaurant"), 0);
        assert!(cell.target.is_none());
    }

    #[test]
    fn test_no_target_serializes_as_absent_field() {
        let cell = CoverageCell::new(GridPoint::new(35.7, 51.4));
        let json = serde_json::to_string(&cell).unwrap();
        assert!(!json.contains("target"));
        assert!(!json.contains("performance_ratio"));
    }
}
