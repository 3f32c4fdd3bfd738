//! Per-segment measurement labels.

use async_trait::async_trait;
use glam::Vec3;

use crate::axis::AxisType;
use crate::bounds::Bounds;
use crate::error::PlanResult;
use crate::modifier::Modifier;
use crate::renderer::{Drawable, SceneRenderer};

/// How far labels sit from their segment, along the in-plane normal.
const LABEL_OFFSET: f32 = 0.2;

/// Annotates every segment of a point path with its length, formatted as
/// `"1.41 m"`, placed at the segment midpoint and nudged sideways so the
/// label doesn't sit on the line itself.
///
/// Contributes its label anchor positions to the plan extents, so labels
/// near the content edge stay inside the framed image.
#[derive(Default)]
pub struct SegmentMeasureModifier {
    label_bounds: Bounds,
}

impl SegmentMeasureModifier {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl Modifier<Vec<Vec3>> for SegmentMeasureModifier {
    async fn apply(
        &mut self,
        data: &Vec<Vec3>,
        axis: AxisType,
        renderer: &mut dyn SceneRenderer,
    ) -> PlanResult<()> {
        for pair in data.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let length = a.distance(b);
            let direction = (b - a).normalize_or_zero();
            // Sideways within the image plane: perpendicular to the
            // segment and to the camera axis.
            let sideways = axis.view_direction().cross(direction).normalize_or_zero();
            let position = a + (b - a) * 0.5 + sideways * LABEL_OFFSET;

            renderer
                .materialize(Drawable::Label {
                    text: format!("{length:.2} m"),
                    position,
                    direction,
                })
                .await?;
            self.label_bounds.encapsulate_point(position);
        }
        Ok(())
    }

    fn extents(&self) -> Option<Bounds> {
        (!self.label_bounds.is_empty()).then_some(self.label_bounds)
    }

    fn clean(&mut self) {
        self.label_bounds = Bounds::EMPTY;
    }
}
