//! Render sync system: copies positions into drawables.

use sim_component::{ComponentKind, Position, QueryDescriptor, Renderable};
use sim_world::EntityManager;
use tracing::debug;

use crate::context::FrameContext;
use crate::system::System;

/// Positions and submits the drawable of every renderable entity. Never
/// changes simulation state.
#[derive(Debug, Clone, Default)]
pub struct RenderSyncSystem;

impl RenderSyncSystem {
    /// Create a render sync system.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl System for RenderSyncSystem {
    fn name(&self) -> &'static str {
        "render_sync"
    }

    fn access(&self) -> QueryDescriptor {
        QueryDescriptor::new()
            .read(ComponentKind::Renderable)
            .read(ComponentKind::Position)
    }

    fn run(&mut self, world: &mut EntityManager, ctx: &mut FrameContext<'_>) {
        let entities = world.query(&self.access());
        for &entity in &entities {
            let (Some(renderable), Some(position)) =
                (world.get::<Renderable>(entity), world.get::<Position>(entity))
            else {
                continue;
            };
            ctx.renderer
                .set_position(renderable.drawable, position.x, position.y);
            ctx.renderer.submit(renderable.drawable);
        }
        debug!(tick = ctx.tick_id, count = entities.len(), "synced drawables");
    }
}

#[cfg(test)]
mod tests {
    use sim_component::{Texture, Velocity};
    use sim_math::Vec2;

    use super::*;
    use crate::context::{FrameInput, Viewport};
    use crate::input::InputState;
    use crate::render::{RecordingRenderer, RenderBackend};

    #[test]
    fn test_positions_and_submits_drawables() {
        let mut renderer = RecordingRenderer::new();
        let first = renderer.create_drawable(&Texture::new("bunny.png"), 50.0, 90.0);
        let second = renderer.create_drawable(&Texture::new("bunny.png"), 50.0, 90.0);

        let mut world = EntityManager::new();
        world.spawn([Position::new(400.0, 300.0).into(), Renderable::new(first).into()]);
        world.spawn([Velocity::ZERO.into()]);
        world.spawn([Position::new(600.0, 300.0).into(), Renderable::new(second).into()]);
        let before = world.snapshot();

        let keys = InputState::default();
        renderer.begin_frame();
        let mut ctx = FrameContext::new(
            1,
            1.0,
            FrameInput::new(&keys, Viewport::new(800.0, 600.0), &mut renderer),
        );
        RenderSyncSystem::new().run(&mut world, &mut ctx);
        drop(ctx);

        assert_eq!(renderer.frame(), &[first, second]);
        assert_eq!(
            renderer.drawable(first).unwrap().position,
            Vec2::new(400.0, 300.0)
        );
        assert_eq!(
            renderer.drawable(second).unwrap().position,
            Vec2::new(600.0, 300.0)
        );
        assert_eq!(world.snapshot(), before);
    }
}
