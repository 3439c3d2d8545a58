//! # sim_system
//!
//! The per-frame system pipeline for the simulation ECS.
//!
//! A host loop calls [`Simulation::update`] once per displayed frame. The
//! simulation runs its systems strictly in order:
//!
//! 1. [`InputSystem`]: key state to velocity of input-controlled entities.
//! 2. [`CollisionSystem`]: overlap detection, reported as [`CollisionEvent`]s.
//! 3. [`GravitySystem`]: falls gravity-affected entities onto the floor.
//! 4. [`VelocitySystem`]: integrates velocity into position.
//! 5. [`RenderSyncSystem`]: pushes positions to the render backend.
//!
//! ## Usage
//!
//! ```rust
//! use sim_component::{GravityAffected, Position, Size, Velocity};
//! use sim_system::{FrameInput, InputState, RecordingRenderer, SimConfig, Simulation, Viewport};
//!
//! let mut sim = Simulation::new(SimConfig::default());
//! let e = sim.world_mut().spawn([
//!     Position::new(0.0, 0.0).into(),
//!     Size::new(10.0, 10.0).into(),
//!     Velocity::ZERO.into(),
//!     GravityAffected.into(),
//! ]);
//!
//! let keys = InputState::default();
//! let mut renderer = RecordingRenderer::new();
//! sim.update(1.0, FrameInput::new(&keys, Viewport::new(800.0, 1000.0), &mut renderer));
//!
//! assert_eq!(sim.world().get::<Position>(e), Some(&Position::new(0.0, 0.5)));
//! ```

pub mod config;
pub mod context;
pub mod input;
pub mod render;
pub mod simulation;
pub mod system;
pub mod systems;

pub use config::{ConfigError, SimConfig, VerticalIntegration};
pub use context::{FrameContext, FrameInput, Viewport};
pub use input::{InputState, Key, KeyState};
pub use render::{DrawableRecord, RecordingRenderer, RenderBackend};
pub use simulation::{FrameReport, Simulation};
pub use system::System;
pub use systems::{
    CollisionEvent, CollisionSystem, GravitySystem, InputSystem, RenderSyncSystem, VelocitySystem,
};
