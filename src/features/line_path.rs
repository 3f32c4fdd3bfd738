//! Polyline path feature.

use async_trait::async_trait;
use glam::Vec3;

use crate::axis::AxisType;
use crate::bounds::Bounds;
use crate::error::PlanResult;
use crate::feature::Feature;
use crate::modifier::{ModifierStack, ScheduledModifier, TimingGroup};
use crate::renderer::{Drawable, DrawableHandle, SceneRenderer};

/// Paths whose endpoints are closer than this are drawn as closed loops.
const LOOP_CLOSE_DISTANCE: f32 = 0.1;

/// Visual parameters of a drawn line path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Line thickness in scene units.
    pub width: f32,
    /// RGBA line color.
    pub color: [u8; 4],
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 0.05,
            color: [0, 0, 0, 255],
        }
    }
}

/// Draws an immutable 3D point path as a polyline on the plan.
///
/// The point data is fixed at construction; extents become available once
/// [`fill_plan`](Feature::fill_plan) has materialized the line.
pub struct LinePathFeature {
    points: Vec<Vec3>,
    style: LineStyle,
    modifiers: ModifierStack<Vec<Vec3>>,
    handle: Option<DrawableHandle>,
    drawn_bounds: Bounds,
}

impl LinePathFeature {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self {
            points,
            style: LineStyle::default(),
            modifiers: ModifierStack::new(),
            handle: None,
            drawn_bounds: Bounds::EMPTY,
        }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets (replaces) this feature's modifier list.
    pub fn with_modifiers(mut self, modifiers: Vec<ScheduledModifier<Vec<Vec3>>>) -> Self {
        self.modifiers.set(modifiers);
        self
    }

    pub fn style(&self) -> LineStyle {
        self.style
    }

    fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() >= 3 => {
                first.distance(*last) < LOOP_CLOSE_DISTANCE
            }
            _ => false,
        }
    }
}

#[async_trait(?Send)]
impl Feature for LinePathFeature {
    async fn fill_plan(
        &mut self,
        _axis: AxisType,
        renderer: &mut dyn SceneRenderer,
    ) -> PlanResult<()> {
        let drawable = Drawable::Polyline {
            points: self.points.clone(),
            width: self.style.width,
            closed: self.is_closed(),
        };
        self.handle = Some(renderer.materialize(drawable).await?);
        self.drawn_bounds = Bounds::from_points(self.points.iter().copied());
        Ok(())
    }

    async fn apply_modifiers(
        &mut self,
        group: TimingGroup,
        axis: AxisType,
        renderer: &mut dyn SceneRenderer,
    ) -> PlanResult<()> {
        let Self {
            points, modifiers, ..
        } = self;
        modifiers.apply_group(group, points, axis, renderer).await
    }

    fn extents(&self) -> Bounds {
        self.drawn_bounds
    }

    fn modifier_extents(&self) -> Option<Bounds> {
        self.modifiers.extents()
    }

    fn apply_scale_change(&mut self, factor: f32) {
        self.style.width *= factor;
    }

    fn clean(&mut self) {
        self.handle = None;
        self.drawn_bounds = Bounds::EMPTY;
    }

    fn clean_modifiers(&mut self) {
        self.modifiers.reset_all();
    }
}
