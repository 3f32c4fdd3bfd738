//! Shared fixtures for plan pipeline integration tests: a scripted
//! renderer that records every call it receives, plus a probe feature
//! whose bounds and hooks the tests control.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use glam::{Quat, Vec3};
use image::RgbaImage;

use orthoplan::{
    AxisType, Bounds, Drawable, DrawableHandle, Feature, Modifier, ModifierStack, PlanResult,
    RendererError, RendererResult, ScheduledModifier, SceneRenderer, TimingGroup,
};

/// Initialize logging for test output.
pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .is_test(true)
        .try_init();
}

/// Everything the orchestrator asked the renderer to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Clear,
    Materialize(Drawable),
    Camera {
        position: Vec3,
        rotation: Quat,
        ortho_half_extent: f32,
    },
    OutputSize(u32, u32),
    SceneScale(f32),
    Capture,
}

/// A scene renderer that rasterizes nothing and records everything.
pub struct RecordingRenderer {
    pub events: Vec<RenderEvent>,
    pub live_drawables: Vec<Drawable>,
    pub layer_ready: bool,
    output_size: Option<(u32, u32)>,
    next_handle: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        init_test_logging();
        Self {
            events: Vec::new(),
            live_drawables: Vec::new(),
            layer_ready: true,
            output_size: None,
            next_handle: 0,
        }
    }

    pub fn without_layer() -> Self {
        Self {
            layer_ready: false,
            ..Self::new()
        }
    }

    /// The most recent camera placement, if any.
    pub fn last_camera(&self) -> Option<(Vec3, Quat, f32)> {
        self.events.iter().rev().find_map(|event| match event {
            RenderEvent::Camera {
                position,
                rotation,
                ortho_half_extent,
            } => Some((*position, *rotation, *ortho_half_extent)),
            _ => None,
        })
    }

    /// All camera placements, in order.
    pub fn cameras(&self) -> Vec<(Vec3, Quat, f32)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RenderEvent::Camera {
                    position,
                    rotation,
                    ortho_half_extent,
                } => Some((*position, *rotation, *ortho_half_extent)),
                _ => None,
            })
            .collect()
    }

    /// All scene-scale factors set, in order.
    pub fn scene_scales(&self) -> Vec<f32> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RenderEvent::SceneScale(factor) => Some(*factor),
                _ => None,
            })
            .collect()
    }

    pub fn capture_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, RenderEvent::Capture))
            .count()
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl SceneRenderer for RecordingRenderer {
    fn has_isolated_layer(&self) -> bool {
        self.layer_ready
    }

    async fn clear_scene(&mut self) -> RendererResult<()> {
        self.live_drawables.clear();
        self.events.push(RenderEvent::Clear);
        Ok(())
    }

    async fn materialize(&mut self, drawable: Drawable) -> RendererResult<DrawableHandle> {
        self.live_drawables.push(drawable.clone());
        self.events.push(RenderEvent::Materialize(drawable));
        self.next_handle += 1;
        Ok(DrawableHandle(self.next_handle))
    }

    fn set_camera(&mut self, position: Vec3, rotation: Quat, ortho_half_extent: f32) {
        self.events.push(RenderEvent::Camera {
            position,
            rotation,
            ortho_half_extent,
        });
    }

    fn set_output_size(&mut self, width: u32, height: u32) {
        self.output_size = Some((width, height));
        self.events.push(RenderEvent::OutputSize(width, height));
    }

    async fn capture_image(&mut self) -> RendererResult<RgbaImage> {
        let (width, height) = self.output_size.ok_or_else(|| {
            RendererError::CaptureFailed("no output size configured".to_string())
        })?;
        self.events.push(RenderEvent::Capture);
        Ok(RgbaImage::new(width, height))
    }

    fn set_scene_scale(&mut self, factor: f32) {
        self.events.push(RenderEvent::SceneScale(factor));
    }
}

/// A modifier that appends its label to a shared log when its body fires.
pub struct LogModifier {
    label: String,
    log: Rc<RefCell<Vec<String>>>,
}

impl LogModifier {
    pub fn new(label: &str, log: Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            label: label.to_string(),
            log,
        }
    }
}

#[async_trait(?Send)]
impl Modifier<()> for LogModifier {
    async fn apply(
        &mut self,
        _data: &(),
        _axis: AxisType,
        _renderer: &mut dyn SceneRenderer,
    ) -> PlanResult<()> {
        self.log.borrow_mut().push(self.label.clone());
        Ok(())
    }
}

/// A feature with scripted bounds that records its lifecycle hooks.
pub struct ProbeFeature {
    name: String,
    source_bounds: Bounds,
    filled: bool,
    modifiers: ModifierStack<()>,
    pub scale_changes: Rc<RefCell<Vec<f32>>>,
    log: Option<Rc<RefCell<Vec<String>>>>,
}

impl ProbeFeature {
    pub fn new(name: &str, source_bounds: Bounds) -> Self {
        Self {
            name: name.to_string(),
            source_bounds,
            filled: false,
            modifiers: ModifierStack::new(),
            scale_changes: Rc::new(RefCell::new(Vec::new())),
            log: None,
        }
    }

    pub fn with_log(mut self, log: Rc<RefCell<Vec<String>>>) -> Self {
        self.log = Some(log);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Vec<ScheduledModifier<()>>) -> Self {
        self.modifiers.set(modifiers);
        self
    }

    pub fn with_scale_recorder(mut self, recorder: Rc<RefCell<Vec<f32>>>) -> Self {
        self.scale_changes = recorder;
        self
    }
}

#[async_trait(?Send)]
impl Feature for ProbeFeature {
    async fn fill_plan(
        &mut self,
        _axis: AxisType,
        _renderer: &mut dyn SceneRenderer,
    ) -> PlanResult<()> {
        self.filled = true;
        if let Some(log) = &self.log {
            log.borrow_mut().push(format!("{}:fill", self.name));
        }
        Ok(())
    }

    async fn apply_modifiers(
        &mut self,
        group: TimingGroup,
        axis: AxisType,
        renderer: &mut dyn SceneRenderer,
    ) -> PlanResult<()> {
        self.modifiers.apply_group(group, &(), axis, renderer).await
    }

    fn extents(&self) -> Bounds {
        if self.filled {
            self.source_bounds
        } else {
            Bounds::EMPTY
        }
    }

    fn modifier_extents(&self) -> Option<Bounds> {
        self.modifiers.extents()
    }

    fn apply_scale_change(&mut self, factor: f32) {
        self.scale_changes.borrow_mut().push(factor);
    }

    fn clean(&mut self) {
        self.filled = false;
    }

    fn clean_modifiers(&mut self) {
        self.modifiers.reset_all();
    }
}
