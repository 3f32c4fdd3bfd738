//! Batch orchestration: framing math and the request loop
//!
//! The orchestrator drives a batch of plan requests sequentially against a
//! [`SceneRenderer`]: it resets scene state, runs each feature's modifier
//! and draw lifecycle, aggregates bounds, computes framing, and collects
//! one captured image per request. Requests are fully isolated from each
//! other; any failure aborts the whole batch.

use image::RgbaImage;

use crate::axis::AxisProjection;
use crate::bounds::Bounds;
use crate::error::{PlanError, PlanResult};
use crate::modifier::TimingGroup;
use crate::renderer::SceneRenderer;
use crate::request::PlanRequest;

/// Projected extents at or below this are considered degenerate.
const EXTENT_EPSILON: f32 = 1e-4;

/// Downscale factors within this of 1.0 skip the scale-change notification.
const SCALE_EPSILON: f32 = 1e-4;

/// Output images smaller than this on their long side are bumped up to it,
/// so absurdly small scenes never produce sub-pixel images.
const MIN_BASE_DIMENSION: f32 = 2.0;

/// Output-image dimensions and camera extent computed for one request.
///
/// Pure function of the projected bounds and the request's sizing
/// parameters; separated out so the sizing invariants are testable without
/// a renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Framing {
    pub output_width: u32,
    pub output_height: u32,
    /// Half the padded in-plane width the orthographic camera must cover,
    /// already downscaled by `norm`.
    pub ortho_half_extent: f32,
    /// Uniform downscale applied when the raw output would exceed the
    /// request's maximum dimension; 1.0 when it fits.
    pub norm: f32,
}

impl Framing {
    /// Computes output sizing for a projected bounding volume.
    ///
    /// The aspect ratio of `projection` is preserved exactly: the longer
    /// logical dimension maps to the base pixel dimension, the shorter one
    /// is derived from the aspect ratio and re-rounded.
    pub fn compute(
        projection: &AxisProjection,
        pixels_per_unit: f32,
        padding: f32,
        max_output_dimension: u32,
    ) -> PlanResult<Self> {
        let width = projection.width();
        let height = projection.height();
        if width <= EXTENT_EPSILON || height <= EXTENT_EPSILON {
            return Err(PlanError::DegenerateBounds { width, height });
        }

        let base = (width.max(height) * pixels_per_unit)
            .round()
            .max(MIN_BASE_DIMENSION);
        let aspect = width / height;
        let (mut output_width, mut output_height) = if width > height {
            (base, (base / aspect).round())
        } else {
            ((base * aspect).round(), base)
        };

        let mut ortho_half_extent = (width + padding) * 0.5;
        let mut norm = 1.0_f32;
        let longest = output_width.max(output_height);
        if longest > max_output_dimension as f32 {
            norm = max_output_dimension as f32 / longest;
            ortho_half_extent *= norm;
            output_width = (output_width * norm).round();
            output_height = (output_height * norm).round();
        }

        Ok(Self {
            output_width: output_width as u32,
            output_height: output_height as u32,
            ortho_half_extent,
            norm,
        })
    }

    /// Whether a downscale was applied and features must be notified.
    pub fn is_downscaled(&self) -> bool {
        (self.norm - 1.0).abs() > SCALE_EPSILON
    }
}

/// Drives batches of plan requests against a scene renderer.
///
/// An explicitly constructed value; create one, hand it the renderer, call
/// [`make_plans`](Self::make_plans). There is no process-wide instance.
pub struct PlanOrchestrator<R: SceneRenderer> {
    renderer: R,
}

impl<R: SceneRenderer> PlanOrchestrator<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Renders every request in order and returns one image per request,
    /// in the same order.
    ///
    /// Content from one request never contributes to another: the scene is
    /// cleared before each request, and scale state is reset after it. The
    /// first failure aborts the whole batch; there is no partial-success
    /// result. Callers should treat renderer-side state after an aborted
    /// batch as needing an explicit reset.
    pub async fn make_plans(
        &mut self,
        requests: &mut [PlanRequest],
    ) -> PlanResult<Vec<RgbaImage>> {
        if !self.renderer.has_isolated_layer() {
            return Err(PlanError::Configuration(
                "scene renderer has no isolated plan render layer; provision one before rendering"
                    .to_string(),
            ));
        }

        let mut images = Vec::with_capacity(requests.len());
        for (index, request) in requests.iter_mut().enumerate() {
            log::debug!(
                "plan request {index}: {} features, axis {:?}",
                request.feature_count(),
                request.target_axis
            );

            // Suspend until the previous request's content is torn down.
            self.renderer.clear_scene().await?;

            let axis = request.target_axis;
            let mut boundary = Bounds::EMPTY;
            for feature in request.features_mut() {
                feature
                    .apply_modifiers(TimingGroup::Before, axis, &mut self.renderer)
                    .await?;
                feature.fill_plan(axis, &mut self.renderer).await?;
                for group in TimingGroup::AFTER_FILL {
                    feature
                        .apply_modifiers(group, axis, &mut self.renderer)
                        .await?;
                }

                boundary.encapsulate(&feature.extents());
                if let Some(extra) = feature.modifier_extents() {
                    boundary.encapsulate(&extra);
                }
            }

            let projection = axis.project(&boundary);
            let framing = Framing::compute(
                &projection,
                request.pixels_per_unit,
                request.padding,
                request.max_output_dimension,
            )?;

            if framing.is_downscaled() {
                // The render root shrinks; features follow so their
                // intrinsic visuals (line widths etc.) stay proportional.
                self.renderer.set_scene_scale(framing.norm);
                for feature in request.features_mut() {
                    feature.apply_scale_change(framing.norm);
                }
            }

            self.renderer.set_camera(
                projection.camera_position(framing.norm),
                projection.camera_rotation(),
                framing.ortho_half_extent,
            );
            self.renderer
                .set_output_size(framing.output_width, framing.output_height);

            let image = self.renderer.capture_image().await?;
            log::info!(
                "plan request {index}: captured {}x{} image (norm {})",
                framing.output_width,
                framing.output_height,
                framing.norm
            );
            images.push(image);

            request.clear();
            self.renderer.set_scene_scale(1.0);
        }

        // Leave the renderer with no stale plan content behind.
        self.renderer.clear_scene().await?;

        Ok(images)
    }
}
