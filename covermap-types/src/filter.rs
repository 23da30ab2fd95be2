use serde::{Deserialize, Serialize};

/// Tri-state filter for boolean vendor flags.
///
/// `Any` applies no constraint; the other variants require the flag to be
/// present and equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Any,
    Only,
    Exclude,
}

impl Visibility {
    /// Whether an optional flag value passes this filter.
    pub fn accepts(&self, value: Option<bool>) -> bool {
        match self {
            Visibility::Any => true,
            Visibility::Only => value == Some(true),
            Visibility::Exclude => value == Some(false),
        }
    }
}

/// How vendor service radii are interpreted during coverage computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "mode", content = "value")]
pub enum RadiusPolicy {
    /// Use each vendor's own radius as loaded.
    #[default]
    Original,
    /// Multiply each vendor's radius by a factor.
    Scaled(f64),
    /// Replace every radius with a fixed value in kilometers.
    Fixed(f64),
}

impl RadiusPolicy {
    /// Effective radius in kilometers for a vendor with the given base radius.
    pub fn apply(&self, radius_km: f64) -> f64 {
        match self {
            RadiusPolicy::Original => radius_km,
            RadiusPolicy::Scaled(factor) => radius_km * factor,
            RadiusPolicy::Fixed(km) => *km,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            RadiusPolicy::Original => Ok(()),
            RadiusPolicy::Scaled(f) if f.is_finite() && *f > 0.0 => Ok(()),
            RadiusPolicy::Scaled(f) => Err(format!("Radius scale must be positive, got {f}")),
            RadiusPolicy::Fixed(km) if km.is_finite() && *km > 0.0 => Ok(()),
            RadiusPolicy::Fixed(km) => Err(format!("Fixed radius must be positive, got {km}")),
        }
    }
}

/// Inclusive date range filter over epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

impl DateRange {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    /// Whether an optional timestamp passes the range. Records without a
    /// timestamp pass only when no bound is set.
    pub fn accepts(&self, timestamp: Option<i64>) -> bool {
        if self.start.is_none() && self.end.is_none() {
            return true;
        }
        let Some(ts) = timestamp else {
            return false;
        };
        if let Some(start) = self.start
            && ts < start
        {
            return false;
        }
        if let Some(end) = self.end
            && ts > end
        {
            return false;
        }
        true
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// The full filter set for a coverage or enrichment request.
///
/// Every field here participates in the coverage cache fingerprint: an
/// omitted dimension would make identical-looking requests collide on
/// different result sets.
///
/// # Examples
///
/// ```
/// use covermap_types::{CoverageFilter, RadiusPolicy, Visibility};
///
/// let filter = CoverageFilter::new("tehran")
///     .with_business_lines(["Restaurant"])
///     .with_grades(["A", "B"])
///     .with_radius_policy(RadiusPolicy::Scaled(1.5));
/// assert_eq!(filter.city, "tehran");
/// assert_eq!(filter.visible, Visibility::Any);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageFilter {
    pub city: String,
    #[serde(default)]
    pub business_lines: Vec<String>,
    #[serde(default)]
    pub grades: Vec<String>,
    #[serde(default)]
    pub status_ids: Vec<i64>,
    #[serde(default)]
    pub vendor_codes: Vec<String>,
    #[serde(default)]
    pub visible: Visibility,
    #[serde(default)]
    pub open: Visibility,
    #[serde(default)]
    pub date_range: DateRange,
    #[serde(default)]
    pub radius_policy: RadiusPolicy,
}

impl CoverageFilter {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            business_lines: Vec::new(),
            grades: Vec::new(),
            status_ids: Vec::new(),
            vendor_codes: Vec::new(),
            visible: Visibility::Any,
            open: Visibility::Any,
            date_range: DateRange::default(),
            radius_policy: RadiusPolicy::Original,
        }
    }

    pub fn with_business_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.business_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_grades<I, S>(mut self, grades: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grades = grades.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_status_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.status_ids = ids.into_iter().collect();
        self
    }

    pub fn with_vendor_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vendor_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_visible(mut self, visible: Visibility) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_open(mut self, open: Visibility) -> Self {
        self.open = open;
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self
    }

    pub fn with_radius_policy(mut self, policy: RadiusPolicy) -> Self {
        self.radius_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.city.trim().is_empty() {
            return Err("City must not be empty".to_string());
        }
        self.radius_policy.validate()?;
        if let (Some(start), Some(end)) = (self.date_range.start, self.date_range.end)
            && start > end
        {
            return Err(format!("Date range start ({start}) is after end ({end})"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_tristate() {
        assert!(Visibility::Any.accepts(None));
        assert!(Visibility::Any.accepts(Some(false)));
        assert!(Visibility::Only.accepts(Some(true)));
        assert!(!Visibility::Only.accepts(None));
        assert!(Visibility::Exclude.accepts(Some(false)));
        assert!(!Visibility::Exclude.accepts(Some(true)));
    }

    #[test]
    fn test_radius_policy_apply() {
        assert_eq!(RadiusPolicy::Original.apply(3.0), 3.0);
        assert_eq!(RadiusPolicy::Scaled(1.5).apply(2.0), 3.0);
        assert_eq!(RadiusPolicy::Fixed(4.0).apply(2.0), 4.0);
    }

    #[test]
    fn test_radius_policy_validation() {
        assert!(RadiusPolicy::Scaled(0.0).validate().is_err());
        assert!(RadiusPolicy::Fixed(-1.0).validate().is_err());
        assert!(RadiusPolicy::Scaled(2.0).validate().is_ok());
    }

    #[test]
    fn test_date_range_accepts() {
        let range = DateRange::new(Some(100), Some(200));
        assert!(range.accepts(Some(150)));
        assert!(!range.accepts(Some(99)));
        assert!(!range.accepts(Some(201)));
        assert!(!range.accepts(None));
        assert!(DateRange::default().accepts(None));
    }

    #[test]
    fn test_filter_validation() {
        assert!(CoverageFilter::new("tehran").validate().is_ok());
        assert!(CoverageFilter::new("  ").validate().is_err());
        let bad = CoverageFilter::new("tehran").with_date_range(DateRange::new(Some(5), Some(1)));
        assert!(bad.validate().is_err());
    }
}
