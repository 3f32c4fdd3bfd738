//! The drawable feature contract
//!
//! A feature is a unit of primary drawable content: it owns typed geometric
//! data, materializes it through the scene renderer, and reports the bounds
//! of what it drew. Concrete features hold a [`ModifierStack`] for their
//! secondary behaviors; the orchestrator only ever sees this trait.
//!
//! [`ModifierStack`]: crate::modifier::ModifierStack

use async_trait::async_trait;

use crate::axis::AxisType;
use crate::bounds::Bounds;
use crate::error::PlanResult;
use crate::modifier::TimingGroup;
use crate::renderer::SceneRenderer;

/// A unit of drawable plan content.
#[async_trait(?Send)]
pub trait Feature {
    /// Materializes this feature's content through the renderer.
    ///
    /// [`extents`](Self::extents) is meaningful only after this has run.
    async fn fill_plan(
        &mut self,
        axis: AxisType,
        renderer: &mut dyn SceneRenderer,
    ) -> PlanResult<()>;

    /// Invokes this feature's modifiers of the given timing group, in
    /// modifier-list order.
    async fn apply_modifiers(
        &mut self,
        group: TimingGroup,
        axis: AxisType,
        renderer: &mut dyn SceneRenderer,
    ) -> PlanResult<()>;

    /// Bounds of the feature's own drawn content. [`Bounds::EMPTY`] before
    /// [`fill_plan`](Self::fill_plan) has run.
    fn extents(&self) -> Bounds;

    /// Combined bounds contributed by this feature's modifiers, if any.
    fn modifier_extents(&self) -> Option<Bounds> {
        None
    }

    /// Notifies the feature that the scene was uniformly rescaled by
    /// `factor`, so feature-intrinsic visual parameters (line thickness,
    /// label size, ...) can follow the geometric scale.
    fn apply_scale_change(&mut self, _factor: f32) {}

    /// Releases per-render resources.
    fn clean(&mut self) {}

    /// Resets this feature's modifiers (scheduling counters included).
    fn clean_modifiers(&mut self) {}
}
