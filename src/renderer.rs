//! Scene renderer collaborator abstraction
//!
//! The pipeline never rasterizes anything itself; it drives an external
//! renderer through this trait. Methods that have observable asynchronous
//! side effects (object teardown, geometry upload, pixel readback) are
//! async and double as the pipeline's suspension points: awaiting them
//! yields control to the hosting environment until the operation is
//! observably complete.

use async_trait::async_trait;
use glam::{Quat, Vec3};
use image::RgbaImage;
use thiserror::Error;

/// Scene renderer error type.
#[derive(Error, Debug)]
pub enum RendererError {
    #[error("failed to clear scene: {0}")]
    ClearFailed(String),
    #[error("failed to materialize drawable: {0}")]
    MaterializeFailed(String),
    #[error("failed to capture image: {0}")]
    CaptureFailed(String),
}

pub type RendererResult<T> = Result<T, RendererError>;

/// Handle to a drawable materialized in the renderer's scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableHandle(pub u64);

/// Descriptor vocabulary features and modifiers hand to the renderer.
///
/// Deliberately small: concrete renderers map these onto whatever scene
/// objects they use (line meshes, text quads, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    /// A connected line strip through `points`, drawn `width` units thick.
    Polyline {
        points: Vec<Vec3>,
        width: f32,
        closed: bool,
    },
    /// A text label anchored at `position`, reading along `direction`.
    Label {
        text: String,
        position: Vec3,
        direction: Vec3,
    },
}

/// Contract the orchestrator and all features/modifiers draw through.
///
/// Implementations own the render root the plan content hangs off;
/// `set_scene_scale` scales that root uniformly, and `clear_scene` destroys
/// everything under it. All content must live on a render layer isolated
/// from any other camera in the host scene, otherwise plan geometry would
/// leak into unrelated views; `has_isolated_layer` reports whether that
/// layer is provisioned.
#[async_trait(?Send)]
pub trait SceneRenderer {
    /// Whether the dedicated plan render layer is provisioned.
    fn has_isolated_layer(&self) -> bool;

    /// Destroys all previously materialized content. Completion of the
    /// returned future means the teardown is observable: nothing from
    /// before contributes to subsequent extents or captures.
    async fn clear_scene(&mut self) -> RendererResult<()>;

    /// Materializes a drawable under the render root. Completion means the
    /// drawable's extents can be trusted.
    async fn materialize(&mut self, drawable: Drawable) -> RendererResult<DrawableHandle>;

    /// Places the orthographic capture camera.
    ///
    /// `position` is in render-root-local coordinates, before any scene
    /// scale: implementations must transform it through the (possibly
    /// downscaled) root to obtain the world-space camera position.
    /// `ortho_half_extent` is half the padded in-plane width the camera
    /// must cover and already includes the downscale factor, so it is
    /// applied to the camera as-is.
    fn set_camera(&mut self, position: Vec3, rotation: Quat, ortho_half_extent: f32);

    /// Sizes the capture target in pixels.
    fn set_output_size(&mut self, width: u32, height: u32);

    /// Renders one frame and reads back the pixels.
    async fn capture_image(&mut self) -> RendererResult<RgbaImage>;

    /// Uniformly scales the render root (downscale normalization).
    fn set_scene_scale(&mut self, factor: f32);
}
