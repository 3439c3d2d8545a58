//! Velocity system: integrates velocity into position.

use sim_component::{ComponentKind, Position, QueryDescriptor, Velocity};
use sim_world::EntityManager;
use tracing::debug;

use crate::config::VerticalIntegration;
use crate::context::FrameContext;
use crate::system::System;

/// Adds each entity's velocity to its position.
///
/// The horizontal axis is always integrated here. The vertical axis is
/// skipped for entities the gravity system already moved this frame, unless
/// running in [`VerticalIntegration::Legacy`] mode.
#[derive(Debug, Clone)]
pub struct VelocitySystem {
    mode: VerticalIntegration,
}

impl VelocitySystem {
    /// Create a velocity system.
    #[must_use]
    pub fn new(mode: VerticalIntegration) -> Self {
        Self { mode }
    }
}

impl Default for VelocitySystem {
    fn default() -> Self {
        Self::new(VerticalIntegration::default())
    }
}

impl System for VelocitySystem {
    fn name(&self) -> &'static str {
        "velocity"
    }

    fn access(&self) -> QueryDescriptor {
        QueryDescriptor::new()
            .read(ComponentKind::Velocity)
            .write(ComponentKind::Position)
    }

    fn run(&mut self, world: &mut EntityManager, ctx: &mut FrameContext<'_>) {
        let entities = world.query(&self.access());
        let mut horizontal_only = 0usize;

        for &entity in &entities {
            let vertical = match self.mode {
                VerticalIntegration::GravityOwnsVertical => !ctx.is_vertical_handled(entity),
                VerticalIntegration::Legacy => true,
            };
            let Some((velocity, position)) = world.get_pair_mut::<Velocity, Position>(entity)
            else {
                continue;
            };

            position.x += velocity.x;
            if vertical {
                position.y += velocity.y;
            } else {
                horizontal_only += 1;
            }
        }

        debug!(
            tick = ctx.tick_id,
            count = entities.len(),
            horizontal_only,
            "integrated velocities"
        );
    }
}
