//! # covermap-types
//!
//! Core data records for the covermap coverage analysis engine.
//!
//! This crate provides the serializable records exchanged with ingestion
//! collaborators and the request layer:
//!
//! - **Input records**: [`Vendor`], [`OrderRecord`], [`Target`], [`BoundingBox`]
//! - **Request records**: [`CoverageFilter`], [`RadiusPolicy`], [`Visibility`]
//! - **Result records**: [`CoverageCell`], [`TargetComparison`], [`GridPoint`],
//!   [`HeatmapPoint`], [`HeatmapParams`]
//!
//! All types are serializable with Serde; optional result fields are skipped
//! when absent so a missing target never serializes as a zero.
//!
//! ## Examples
//!
//! ```rust
//! use covermap_types::{BoundingBox, CoverageFilter};
//!
//! let bbox = BoundingBox::new(35.5, 35.85, 51.1, 51.7);
//! assert!(bbox.validate().is_ok());
//!
//! let filter = CoverageFilter::new("tehran").with_business_lines(["Restaurant"]);
//! assert_eq!(filter.business_lines.len(), 1);
//! ```

pub mod bbox;
pub mod coverage;
pub mod filter;
pub mod heatmap;
pub mod order;
pub mod target;
pub mod vendor;

pub use bbox::BoundingBox;
pub use coverage::{CoverageCell, GridPoint, TargetComparison};
pub use filter::{CoverageFilter, DateRange, RadiusPolicy, Visibility};
pub use heatmap::{HeatmapOverrides, HeatmapParams, HeatmapPoint};
pub use order::OrderRecord;
pub use target::{Target, TargetTable};
pub use vendor::Vendor;
