//! The simulation: entity storage plus the fixed per-frame system pipeline.
//!
//! The tick lifecycle is:
//!
//! 1. Advance the tick counter and open a [`FrameContext`].
//! 2. Tell the render backend a new frame begins.
//! 3. Run input, collision, gravity, velocity and render sync, in that order.
//! 4. Return the frame's collisions in a [`FrameReport`].
//!
//! The order is load-bearing: gravity has to mark the entities it moved
//! before the velocity pass integrates the rest.

use serde::{Deserialize, Serialize};
use sim_world::EntityManager;
use tracing::{debug, info, trace};

use crate::config::SimConfig;
use crate::context::{FrameContext, FrameInput};
use crate::system::System;
use crate::systems::{
    CollisionEvent, CollisionSystem, GravitySystem, InputSystem, RenderSyncSystem, VelocitySystem,
};

/// What one tick produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameReport {
    /// The tick this report belongs to.
    pub tick_id: u64,
    /// Overlapping pairs detected this tick.
    pub collisions: Vec<CollisionEvent>,
}

/// Entity storage plus the ordered system pipeline.
///
/// `update` takes `&mut self`, so a frame always runs to completion before
/// the next one can start.
pub struct Simulation {
    /// Current tick counter.
    tick_id: u64,
    /// The configuration the pipeline was built from.
    config: SimConfig,
    /// All entities and components.
    world: EntityManager,
    /// Systems in execution order.
    systems: Vec<Box<dyn System>>,
}

impl Simulation {
    /// Create an empty simulation with the standard pipeline.
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        Self::with_world(EntityManager::new(), config)
    }

    /// Create a simulation over an existing world.
    #[must_use]
    pub fn with_world(world: EntityManager, config: SimConfig) -> Self {
        let systems: Vec<Box<dyn System>> = vec![
            Box::new(InputSystem::new(config.input_speed, config.input_smoothing)),
            Box::new(CollisionSystem::new()),
            Box::new(GravitySystem::new(config.gravity)),
            Box::new(VelocitySystem::new(config.vertical_integration)),
            Box::new(RenderSyncSystem::new()),
        ];

        for system in &systems {
            let access = system.access();
            debug!(
                system = system.name(),
                requires = ?access.required_kinds(),
                writes = ?access.writes,
                "registered system"
            );
        }
        info!(
            entities = world.entity_count(),
            systems = systems.len(),
            vertical_integration = ?config.vertical_integration,
            "simulation ready"
        );

        Self {
            tick_id: 0,
            config,
            world,
            systems,
        }
    }

    /// Returns the current tick counter.
    #[must_use]
    pub fn tick_id(&self) -> u64 {
        self.tick_id
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Returns a reference to the world.
    #[must_use]
    pub fn world(&self) -> &EntityManager {
        &self.world
    }

    /// Returns a mutable reference to the world, for scene setup.
    pub fn world_mut(&mut self) -> &mut EntityManager {
        &mut self.world
    }

    /// System names in execution order.
    #[must_use]
    pub fn system_names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    /// Run one tick of the simulation.
    pub fn update(&mut self, dt: f32, input: FrameInput<'_>) -> FrameReport {
        self.tick_id += 1;

        let mut ctx = FrameContext::new(self.tick_id, dt, input);
        ctx.renderer.begin_frame();

        debug!(tick_id = self.tick_id, dt, "tick start");
        for system in &mut self.systems {
            trace!(tick_id = self.tick_id, system = system.name(), "running system");
            system.run(&mut self.world, &mut ctx);
        }

        FrameReport {
            tick_id: self.tick_id,
            collisions: ctx.collisions,
        }
    }
}
