//! Per-tick execution context provided to systems.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sim_component::Entity;

use crate::input::KeyState;
use crate::render::RenderBackend;
use crate::systems::CollisionEvent;

/// Size of the visible area. The floor is at `y == height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a new viewport.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// What the host hands to [`Simulation::update`](crate::Simulation::update)
/// each frame.
pub struct FrameInput<'a> {
    /// Key state, read once by the input system.
    pub keys: &'a dyn KeyState,
    /// Current viewport size.
    pub viewport: Viewport,
    /// Backend that receives drawable positions.
    pub renderer: &'a mut dyn RenderBackend,
}

impl<'a> FrameInput<'a> {
    /// Bundle the frame's collaborators.
    #[must_use]
    pub fn new(
        keys: &'a dyn KeyState,
        viewport: Viewport,
        renderer: &'a mut dyn RenderBackend,
    ) -> Self {
        Self {
            keys,
            viewport,
            renderer,
        }
    }
}

/// Context provided to every system during one tick.
///
/// Besides the collaborators it carries the frame's outputs and the
/// per-frame markers systems use to coordinate. Nothing in here survives the
/// tick.
pub struct FrameContext<'a> {
    /// The current tick ID.
    pub tick_id: u64,
    /// Host-supplied frame delta.
    pub dt: f32,
    /// Key state for this frame.
    pub keys: &'a dyn KeyState,
    /// Viewport for this frame.
    pub viewport: Viewport,
    /// Render backend for this frame.
    pub renderer: &'a mut dyn RenderBackend,
    /// Collisions detected this frame.
    pub collisions: Vec<CollisionEvent>,
    /// Entities whose vertical axis has already been integrated this frame.
    vertical_handled: HashSet<Entity>,
}

impl<'a> FrameContext<'a> {
    /// Create a context for a tick.
    #[must_use]
    pub fn new(tick_id: u64, dt: f32, input: FrameInput<'a>) -> Self {
        Self {
            tick_id,
            dt,
            keys: input.keys,
            viewport: input.viewport,
            renderer: input.renderer,
            collisions: Vec::new(),
            vertical_handled: HashSet::new(),
        }
    }

    /// Record that `entity`'s vertical axis was integrated this frame.
    pub fn mark_vertical_handled(&mut self, entity: Entity) {
        self.vertical_handled.insert(entity);
    }

    /// Returns `true` if `entity`'s vertical axis was integrated this frame.
    #[must_use]
    pub fn is_vertical_handled(&self, entity: Entity) -> bool {
        self.vertical_handled.contains(&entity)
    }
}
