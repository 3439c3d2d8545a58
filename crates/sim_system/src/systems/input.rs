//! Input system: steers input-controlled entities from the key state.

use sim_component::{ComponentKind, QueryDescriptor, QueryFilter, Velocity};
use sim_world::EntityManager;
use tracing::debug;

use crate::context::FrameContext;
use crate::input::{Key, KeyState};
use crate::system::System;

/// Writes the velocity of every entity carrying `Velocity` and the
/// `InputControlled` tag.
///
/// A held direction sets that axis to `±speed * dt`. Right beats left and
/// down beats up when both are held. Afterwards the horizontal axis is always
/// damped by `smoothing`, which decays a released key's velocity towards zero
/// without ever resetting it. The vertical axis is left to gravity.
#[derive(Debug, Clone)]
pub struct InputSystem {
    speed: f32,
    smoothing: f32,
}

impl InputSystem {
    /// Create an input system with the given steering speed and damping.
    #[must_use]
    pub fn new(speed: f32, smoothing: f32) -> Self {
        Self { speed, smoothing }
    }

    /// Apply one frame of steering to a single velocity.
    pub fn steer(&self, velocity: &mut Velocity, keys: &dyn KeyState, dt: f32) {
        let step = self.speed * dt;

        if keys.is_pressed(Key::Left) {
            velocity.x = -step;
        }
        if keys.is_pressed(Key::Right) {
            velocity.x = step;
        }
        if keys.is_pressed(Key::Up) {
            velocity.y = -step;
        }
        if keys.is_pressed(Key::Down) {
            velocity.y = step;
        }

        velocity.x -= velocity.x * self.smoothing;
    }
}

impl System for InputSystem {
    fn name(&self) -> &'static str {
        "input"
    }

    fn access(&self) -> QueryDescriptor {
        QueryDescriptor::new()
            .write(ComponentKind::Velocity)
            .filter(QueryFilter::With(ComponentKind::InputControlled))
    }

    fn run(&mut self, world: &mut EntityManager, ctx: &mut FrameContext<'_>) {
        let entities = world.query(&self.access());
        for &entity in &entities {
            if let Some(velocity) = world.get_mut::<Velocity>(entity) {
                self.steer(velocity, ctx.keys, ctx.dt);
            }
        }
        debug!(tick = ctx.tick_id, count = entities.len(), "steered entities");
    }
}
