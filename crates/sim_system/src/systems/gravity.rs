//! Gravity system: falls gravity-affected entities onto the viewport floor.

use sim_component::{ComponentKind, Position, QueryDescriptor, QueryFilter, Size, Velocity};
use sim_world::EntityManager;
use tracing::{debug, trace};

use crate::context::FrameContext;
use crate::system::System;

/// Accelerates and moves every `GravityAffected` entity vertically.
///
/// If the entity's bottom edge after this frame's fall would still be above
/// the floor, vertical velocity grows by `gravity` and is committed to the
/// position straight away. Otherwise vertical velocity is clamped to zero and
/// the entity stays where it is (there is no snap onto the floor).
///
/// Either way the entity's vertical axis counts as integrated for this frame.
/// Entities missing `Velocity`, `Position` or `Size` are skipped.
#[derive(Debug, Clone)]
pub struct GravitySystem {
    gravity: f32,
}

/// Outcome of one gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fall {
    /// The entity moved down (or up, if it was still rising).
    Falling,
    /// The entity reached the floor and was stopped.
    Grounded,
}

impl GravitySystem {
    /// Create a gravity system adding `gravity` per tick.
    #[must_use]
    pub fn new(gravity: f32) -> Self {
        Self { gravity }
    }

    /// Apply one gravity step to a single entity.
    pub fn fall(
        &self,
        velocity: &mut Velocity,
        position: &mut Position,
        size: Size,
        floor: f32,
    ) -> Fall {
        let next_bottom = position.y + size.height + velocity.y;
        if next_bottom < floor {
            velocity.y += self.gravity;
            position.y += velocity.y;
            Fall::Falling
        } else {
            velocity.y = 0.0;
            Fall::Grounded
        }
    }
}

impl System for GravitySystem {
    fn name(&self) -> &'static str {
        "gravity"
    }

    fn access(&self) -> QueryDescriptor {
        QueryDescriptor::new()
            .read(ComponentKind::Size)
            .write(ComponentKind::Velocity)
            .write(ComponentKind::Position)
            .filter(QueryFilter::With(ComponentKind::GravityAffected))
    }

    fn run(&mut self, world: &mut EntityManager, ctx: &mut FrameContext<'_>) {
        let floor = ctx.viewport.height;
        let mut falling = 0usize;
        let mut grounded = 0usize;

        for entity in world.entities_with_components(&[ComponentKind::GravityAffected]) {
            let Some(size) = world.get::<Size>(entity).copied() else {
                trace!(entity = entity.id(), "gravity skipped: no Size");
                continue;
            };
            let Some((velocity, position)) = world.get_pair_mut::<Velocity, Position>(entity)
            else {
                trace!(entity = entity.id(), "gravity skipped: no Velocity or Position");
                continue;
            };

            match self.fall(velocity, position, size, floor) {
                Fall::Falling => falling += 1,
                Fall::Grounded => grounded += 1,
            }
            ctx.mark_vertical_handled(entity);
        }

        debug!(tick = ctx.tick_id, falling, grounded, floor, "applied gravity");
    }
}
