//! Render backend seam.
//!
//! The simulation never draws. It creates drawables during scene setup and,
//! each frame, tells the backend where every drawable is and that it should
//! be composited. [`RecordingRenderer`] keeps all of that in memory, for
//! headless hosts and tests.

use sim_component::{DrawableId, Texture};
use sim_math::Vec2;
use tracing::warn;

/// Drawable creation and per-frame positioning, provided by the host.
pub trait RenderBackend {
    /// Create a drawable showing `texture` at the given size.
    fn create_drawable(&mut self, texture: &Texture, width: f32, height: f32) -> DrawableId;

    /// Called once at the start of every frame, before any drawable is
    /// positioned or submitted.
    fn begin_frame(&mut self) {}

    /// Move a drawable to a screen position.
    fn set_position(&mut self, drawable: DrawableId, x: f32, y: f32);

    /// Hand a drawable to the compositor for this frame.
    fn submit(&mut self, drawable: DrawableId);
}

/// A drawable as the recording backend sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableRecord {
    pub texture: Texture,
    pub width: f32,
    pub height: f32,
    pub position: Vec2,
}

/// In-memory [`RenderBackend`].
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    drawables: Vec<DrawableRecord>,
    frame: Vec<DrawableId>,
    frames_begun: u64,
}

impl RecordingRenderer {
    /// Create an empty renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a drawable.
    #[must_use]
    pub fn drawable(&self, id: DrawableId) -> Option<&DrawableRecord> {
        self.drawables.get(id.0 as usize)
    }

    /// Drawables submitted since the last [`RenderBackend::begin_frame`], in
    /// submission order.
    #[must_use]
    pub fn frame(&self) -> &[DrawableId] {
        &self.frame
    }

    /// Number of frames begun so far.
    #[must_use]
    pub fn frames_begun(&self) -> u64 {
        self.frames_begun
    }
}

impl RenderBackend for RecordingRenderer {
    fn create_drawable(&mut self, texture: &Texture, width: f32, height: f32) -> DrawableId {
        let id = DrawableId(self.drawables.len() as u32);
        self.drawables.push(DrawableRecord {
            texture: texture.clone(),
            width,
            height,
            position: Vec2::ZERO,
        });
        id
    }

    fn begin_frame(&mut self) {
        self.frame.clear();
        self.frames_begun += 1;
    }

    fn set_position(&mut self, drawable: DrawableId, x: f32, y: f32) {
        match self.drawables.get_mut(drawable.0 as usize) {
            Some(record) => record.position = Vec2::new(x, y),
            None => warn!(drawable = drawable.0, "set_position on unknown drawable"),
        }
    }

    fn submit(&mut self, drawable: DrawableId) {
        self.frame.push(drawable);
    }
}
