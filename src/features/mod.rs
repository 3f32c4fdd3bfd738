//! Concrete feature and modifier implementations.
//!
//! These are reference implementations of the [`Feature`] and [`Modifier`]
//! contracts: a polyline path feature and a per-segment measurement-label
//! modifier. The pipeline itself never depends on them.
//!
//! [`Feature`]: crate::feature::Feature
//! [`Modifier`]: crate::modifier::Modifier

pub mod line_path;
pub mod measure;

pub use line_path::{LinePathFeature, LineStyle};
pub use measure::SegmentMeasureModifier;
