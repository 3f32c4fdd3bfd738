//! Plan requests: one framing/render job each.

use crate::axis::AxisType;
use crate::feature::Feature;

/// One complete framing/render job: an ordered feature list plus the
/// per-request rendering parameters.
///
/// Consumed by the orchestrator for exactly one render pass, then cleared
/// (features' `clean` hooks run, the list dropped), so the same request
/// value could in principle be refilled and reused.
pub struct PlanRequest {
    features: Vec<Box<dyn Feature>>,
    /// Which coordinate pair forms the output image plane.
    pub target_axis: AxisType,
    /// Output resolution per scene unit. Must be positive.
    pub pixels_per_unit: f32,
    /// Extra framed space around the content, in scene units. Must be
    /// non-negative.
    pub padding: f32,
    /// Cap on either output dimension; larger results are uniformly
    /// downscaled to fit. Must be positive.
    pub max_output_dimension: u32,
}

impl PlanRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_axis(mut self, axis: AxisType) -> Self {
        self.target_axis = axis;
        self
    }

    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f32) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_max_output_dimension(mut self, max_output_dimension: u32) -> Self {
        self.max_output_dimension = max_output_dimension;
        self
    }

    pub fn with_feature(mut self, feature: Box<dyn Feature>) -> Self {
        self.features.push(feature);
        self
    }

    pub fn add_feature(&mut self, feature: Box<dyn Feature>) {
        self.features.push(feature);
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn features_mut(&mut self) -> &mut [Box<dyn Feature>] {
        &mut self.features
    }

    /// Runs every feature's cleanup hooks (own state, then modifiers) and
    /// drops the feature list.
    pub fn clear(&mut self) {
        for feature in &mut self.features {
            feature.clean();
            feature.clean_modifiers();
        }
        self.features.clear();
    }
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            features: Vec::new(),
            target_axis: AxisType::default(),
            pixels_per_unit: 512.0,
            padding: 0.2,
            max_output_dimension: 8192,
        }
    }
}
