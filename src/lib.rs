//! Orthoplan - orthographic plan rendering pipeline
//!
//! Converts arbitrary 3D scene content into orthographic "plan" images
//! (top-down or side-elevation snapshots) annotated with measurement
//! overlays. The crate owns the framing and compositing pipeline:
//!
//! - aggregates a 3D bounding volume across heterogeneous drawable
//!   [features](Feature) and their attached [modifiers](Modifier)
//! - projects that volume onto one of three orthogonal planes
//!   ([`AxisType`])
//! - computes camera placement and output dimensions that exactly frame
//!   the content with user padding ([`Framing`])
//! - uniformly downscales results that would exceed a maximum pixel
//!   dimension, propagating the scale back into the scene
//! - schedules modifier execution through timing policies
//!   ([`TimingPolicy`]: immediate, cyclic, delayed)
//!
//! Actual rasterization and pixel readback are delegated to an external
//! [`SceneRenderer`] collaborator; the pipeline suspends on its async
//! operations so the hosting environment can complete teardown/upload side
//! effects between phases.
//!
//! # Example
//!
//! ```no_run
//! use glam::Vec3;
//! use orthoplan::features::{LinePathFeature, SegmentMeasureModifier};
//! use orthoplan::{
//!     AxisType, PlanOrchestrator, PlanRequest, ScheduledModifier, TimingPolicy,
//! };
//!
//! # async fn demo(renderer: impl orthoplan::SceneRenderer) -> orthoplan::PlanResult<()> {
//! let room = LinePathFeature::new(vec![
//!     Vec3::ZERO,
//!     Vec3::new(4.0, 0.0, 0.0),
//!     Vec3::new(4.0, 0.0, 3.0),
//!     Vec3::new(0.0, 0.0, 3.0),
//!     Vec3::ZERO,
//! ])
//! .with_modifiers(vec![ScheduledModifier::new(
//!     TimingPolicy::RunAfter,
//!     Box::new(SegmentMeasureModifier::new()),
//! )?]);
//!
//! let mut requests = [PlanRequest::new()
//!     .with_axis(AxisType::Xz)
//!     .with_feature(Box::new(room))];
//!
//! let mut orchestrator = PlanOrchestrator::new(renderer);
//! let images = orchestrator.make_plans(&mut requests).await?;
//! # let _ = images;
//! # Ok(())
//! # }
//! ```

pub mod axis;
pub mod bounds;
pub mod error;
pub mod feature;
pub mod features;
pub mod modifier;
pub mod orchestrator;
pub mod renderer;
pub mod request;

pub use axis::{AxisProjection, AxisType};
pub use bounds::Bounds;
pub use error::{PlanError, PlanResult};
pub use feature::Feature;
pub use modifier::{Modifier, ModifierStack, ScheduledModifier, TimingGroup, TimingPolicy};
pub use orchestrator::{Framing, PlanOrchestrator};
pub use renderer::{Drawable, DrawableHandle, RendererError, RendererResult, SceneRenderer};
pub use request::PlanRequest;
