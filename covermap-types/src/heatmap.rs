use serde::{Deserialize, Serialize};

/// A weighted point sample consumed by the heatmap aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapPoint {
    pub lat: f64,
    pub lng: f64,
    pub weight: f64,
}

impl HeatmapPoint {
    pub fn new(lat: f64, lng: f64, weight: f64) -> Self {
        Self { lat, lng, weight }
    }
}

/// Rendering parameters consumed by the heatmap layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapParams {
    /// Kernel radius in pixels.
    pub radius: f64,
    /// Kernel blur in pixels.
    pub blur: f64,
    /// Intensity ceiling; weights at or above render fully saturated.
    pub max: f64,
}

impl HeatmapParams {
    pub fn new(radius: f64, blur: f64, max: f64) -> Self {
        Self { radius, blur, max }
    }

    /// Component-wise arithmetic mean with another parameter set.
    ///
    /// Used to smooth transitions between zoom levels so the rendered layer
    /// never jumps abruptly.
    pub fn mean(&self, other: &HeatmapParams) -> HeatmapParams {
        HeatmapParams {
            radius: (self.radius + other.radius) / 2.0,
            blur: (self.blur + other.blur) / 2.0,
            max: (self.max + other.max) / 2.0,
        }
    }
}

/// Caller-supplied parameter overrides; any set field disables auto-tuning
/// for that parameter.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeatmapOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl HeatmapOverrides {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_blur(mut self, blur: f64) -> Self {
        self.blur = Some(blur);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_mean() {
        let a = HeatmapParams::new(20.0, 10.0, 80.0);
        let b = HeatmapParams::new(30.0, 20.0, 100.0);
        let mid = a.mean(&b);
        assert_eq!(mid, HeatmapParams::new(25.0, 15.0, 90.0));
    }

    #[test]
    fn test_overrides_builder() {
        let overrides = HeatmapOverrides::none().with_radius(18.0).with_max(60.0);
        assert_eq!(overrides.radius, Some(18.0));
        assert!(overrides.blur.is_none());
    }
}
