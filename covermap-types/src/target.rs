use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A coverage target for one (marketing area, business line) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub area_id: String,
    pub business_line: String,
    pub target_count: f64,
}

impl Target {
    pub fn new(
        area_id: impl Into<String>,
        business_line: impl Into<String>,
        target_count: f64,
    ) -> Self {
        Self {
            area_id: area_id.into(),
            business_line: business_line.into(),
            target_count,
        }
    }
}

/// Immutable lookup table of coverage targets.
///
/// Loaded once at startup and never mutated for the process lifetime.
/// A missing entry is a distinct state, not a zero: [`TargetTable::get`]
/// returns `None` both for absent pairs and for non-positive targets, so
/// downstream code never divides by zero.
///
/// # Examples
///
/// ```
/// use covermap_types::{Target, TargetTable};
///
/// let table = TargetTable::from_targets(vec![
///     Target::new("tehran_0", "Restaurant", 12.0),
///     Target::new("tehran_0", "Cafe", 0.0),
/// ]);
/// assert_eq!(table.get("tehran_0", "Restaurant"), Some(12.0));
/// // Zero targets are indistinguishable from missing ones by design.
/// assert_eq!(table.get("tehran_0", "Cafe"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetTable {
    entries: BTreeMap<(String, String), f64>,
}

impl TargetTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_targets(targets: impl IntoIterator<Item = Target>) -> Self {
        let entries = targets
            .into_iter()
            .map(|t| ((t.area_id, t.business_line), t.target_count))
            .collect();
        Self { entries }
    }

    /// Look up a positive target for an (area, business line) pair.
    ///
    /// Returns `None` when no target exists or the stored target is not a
    /// positive finite number.
    pub fn get(&self, area_id: &str, business_line: &str) -> Option<f64> {
        self.entries
            .get(&(area_id.to_string(), business_line.to_string()))
            .copied()
            .filter(|t| t.is_finite() && *t > 0.0)
    }

    /// Raw stored value, including zero and negative entries.
    pub fn get_raw(&self, area_id: &str, business_line: &str) -> Option<f64> {
        self.entries
            .get(&(area_id.to_string(), business_line.to_string()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_target_lookup() {
        let table = TargetTable::from_targets(vec![Target::new("a1", "Restaurant", 5.0)]);
        assert_eq!(table.get("a1", "Restaurant"), Some(5.0));
        assert_eq!(table.get("a1", "Cafe"), None);
        assert_eq!(table.get("a2", "Restaurant"), None);
    }

    #[test]
    fn test_zero_and_negative_targets_are_absent() {
        let table = TargetTable::from_targets(vec![
            Target::new("a1", "Cafe", 0.0),
            Target::new("a1", "Bakery", -3.0),
        ]);
        assert_eq!(table.get("a1", "Cafe"), None);
        assert_eq!(table.get("a1", "Bakery"), None);
        // Raw access still sees the stored values.
        assert_eq!(table.get_raw("a1", "Cafe"), Some(0.0));
    }
}
