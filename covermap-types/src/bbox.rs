use serde::{Deserialize, Serialize};

/// Geographic bounding box in decimal degrees.
///
/// Used as the per-city sampling window for coverage grids. The box is
/// axis-aligned in latitude/longitude; no projection is applied.
///
/// # Examples
///
/// ```
/// use covermap_types::BoundingBox;
///
/// let tehran = BoundingBox::new(35.5, 35.85, 51.1, 51.7);
/// assert!(tehran.validate().is_ok());
/// assert!(tehran.contains(35.7, 51.4));
/// assert!(!tehran.contains(36.0, 51.4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Check that the box is finite, ordered, and within geographic range.
    pub fn validate(&self) -> Result<(), String> {
        let values = [self.min_lat, self.max_lat, self.min_lng, self.max_lng];
        if !values.iter().all(|v| v.is_finite()) {
            return Err("Bounding box coordinates must be finite".to_string());
        }
        if self.min_lat >= self.max_lat {
            return Err(format!(
                "min_lat ({}) must be less than max_lat ({})",
                self.min_lat, self.max_lat
            ));
        }
        if self.min_lng >= self.max_lng {
            return Err(format!(
                "min_lng ({}) must be less than max_lng ({})",
                self.min_lng, self.max_lng
            ));
        }
        if !(-90.0..=90.0).contains(&self.min_lat) || !(-90.0..=90.0).contains(&self.max_lat) {
            return Err("Latitude out of range [-90.0, 90.0]".to_string());
        }
        if !(-180.0..=180.0).contains(&self.min_lng) || !(-180.0..=180.0).contains(&self.max_lng) {
            return Err("Longitude out of range [-180.0, 180.0]".to_string());
        }
        Ok(())
    }

    /// Whether a coordinate falls inside the box (edges inclusive).
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }

    /// Latitude of the box center, used for meters-per-degree conversion.
    pub fn mid_lat(&self) -> f64 {
        (self.min_lat + self.max_lat) / 2.0
    }

    /// Approximate area of the box in square degrees.
    pub fn area_deg2(&self) -> f64 {
        (self.max_lat - self.min_lat) * (self.max_lng - self.min_lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bbox() {
        let bbox = BoundingBox::new(35.5, 35.85, 51.1, 51.7);
        assert!(bbox.validate().is_ok());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let bbox = BoundingBox::new(35.85, 35.5, 51.1, 51.7);
        assert!(bbox.validate().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let bbox = BoundingBox::new(f64::NAN, 35.85, 51.1, 51.7);
        assert!(bbox.validate().is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let bbox = BoundingBox::new(-95.0, 35.85, 51.1, 51.7);
        assert!(bbox.validate().is_err());
        let bbox = BoundingBox::new(35.5, 35.85, 51.1, 200.0);
        assert!(bbox.validate().is_err());
    }

    #[test]
    fn test_contains_is_edge_inclusive() {
        let bbox = BoundingBox::new(35.5, 35.85, 51.1, 51.7);
        assert!(bbox.contains(35.5, 51.1));
        assert!(bbox.contains(35.85, 51.7));
        assert!(!bbox.contains(35.49, 51.1));
    }
}
