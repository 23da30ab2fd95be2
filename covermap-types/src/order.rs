use serde::{Deserialize, Serialize};

/// A customer order (or user sample) from the upstream analytics source.
///
/// `timestamp` is epoch seconds. `organic` distinguishes organic orders from
/// campaign-driven ones; it is optional because older exports lack the flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Order creation time, epoch seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl OrderRecord {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            business_line: None,
            organic: None,
            user_id: None,
            timestamp: None,
        }
    }

    pub fn with_business_line(mut self, business_line: impl Into<String>) -> Self {
        self.business_line = Some(business_line.into());
        self
    }

    pub fn with_organic(mut self, organic: bool) -> Self {
        self.organic = Some(organic);
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_timestamp(mut self, epoch_secs: i64) -> Self {
        self.timestamp = Some(epoch_secs);
        self
    }

    /// Whether the record carries usable coordinates.
    pub fn has_valid_location(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let order = OrderRecord::new(35.7, 51.4)
            .with_business_line("Restaurant")
            .with_organic(true)
            .with_user("u-9")
            .with_timestamp(1_700_000_000);
        assert_eq!(order.business_line.as_deref(), Some("Restaurant"));
        assert_eq!(order.organic, Some(true));
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(!OrderRecord::new(f64::INFINITY, 51.4).has_valid_location());
    }
}
