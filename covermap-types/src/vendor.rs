use serde::{Deserialize, Serialize};

/// A delivery vendor as provided by the upstream analytics source.
///
/// Coordinates are decimal degrees; `radius_km` is the vendor's service
/// radius in kilometers. `status_id`, `visible` and `open` mirror the
/// upstream flags and are optional because the source frequently omits them.
///
/// # Examples
///
/// ```
/// use covermap_types::Vendor;
///
/// let vendor = Vendor::new("v-100", 35.72, 51.41, 3.0)
///     .with_business_line("Restaurant")
///     .with_grade("A");
/// assert_eq!(vendor.radius_km, 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    /// Upstream vendor code, unique within a city.
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    /// Service radius in kilometers.
    pub radius_km: f64,
}

impl Vendor {
    pub fn new(code: impl Into<String>, lat: f64, lng: f64, radius_km: f64) -> Self {
        Self {
            code: code.into(),
            name: None,
            lat,
            lng,
            business_line: None,
            grade: None,
            status_id: None,
            visible: None,
            open: None,
            radius_km,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_business_line(mut self, business_line: impl Into<String>) -> Self {
        self.business_line = Some(business_line.into());
        self
    }

    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn with_status(mut self, status_id: i64) -> Self {
        self.status_id = Some(status_id);
        self
    }

    pub fn with_flags(mut self, visible: bool, open: bool) -> Self {
        self.visible = Some(visible);
        self.open = Some(open);
        self
    }

    /// Business line label, `"Unknown"` when the source omitted it.
    pub fn business_line_label(&self) -> &str {
        self.business_line.as_deref().unwrap_or("Unknown")
    }

    /// Grade label, `"Ungraded"` when no grade was merged for this vendor.
    pub fn grade_label(&self) -> &str {
        self.grade.as_deref().unwrap_or("Ungraded")
    }

    /// Whether the vendor carries usable coordinates and radius.
    pub fn has_valid_location(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.radius_km.is_finite()
            && self.radius_km > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_default_when_missing() {
        let vendor = Vendor::new("v-1", 35.7, 51.4, 3.0);
        assert_eq!(vendor.business_line_label(), "Unknown");
        assert_eq!(vendor.grade_label(), "Ungraded");
    }

    #[test]
    fn test_invalid_location_detected() {
        let vendor = Vendor::new("v-1", f64::NAN, 51.4, 3.0);
        assert!(!vendor.has_valid_location());
        let vendor = Vendor::new("v-2", 35.7, 51.4, 0.0);
        assert!(!vendor.has_valid_location());
    }

    #[test]
    fn test_serde_roundtrip_skips_absent_fields() {
        let vendor = Vendor::new("v-1", 35.7, 51.4, 3.0);
        let json = serde_json::to_string(&vendor).unwrap();
        assert!(!json.contains("grade"));
        assert!(!json.contains("status_id"));
    }
}
