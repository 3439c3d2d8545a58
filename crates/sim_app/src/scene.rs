//! The demo scene: two bunnies dropped into an 800×600 viewport.
//!
//! The player steers with WASD/arrows; the second bunny only falls. Each
//! entity gets its own `Size` and `Texture` values.

use sim_component::{
    Entity, GravityAffected, InputControlled, Position, Renderable, Size, Texture, Velocity,
};
use sim_system::{RenderBackend, Viewport};
use sim_world::{EntityManager, WorldError};

/// Viewport the demo is laid out for.
pub const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

/// Texture both bunnies are drawn with.
pub const BUNNY_TEXTURE: &str = "https://pixijs.com/assets/bunny.png";

const BUNNY_SIZE: Size = Size::new(50.0, 90.0);

/// Handles to the demo's entities.
#[derive(Debug, Clone, Copy)]
pub struct DemoScene {
    pub player: Entity,
    pub other: Entity,
}

/// Spawn the demo entities and create their drawables.
///
/// # Errors
///
/// Propagates [`WorldError`] from component attachment.
pub fn spawn_demo(
    world: &mut EntityManager,
    renderer: &mut dyn RenderBackend,
) -> Result<DemoScene, WorldError> {
    let player = spawn_bunny(world, renderer, Position::new(400.0, 300.0))?;
    world.add_component(player, InputControlled)?;

    let other = spawn_bunny(world, renderer, Position::new(600.0, 300.0))?;

    Ok(DemoScene { player, other })
}

fn spawn_bunny(
    world: &mut EntityManager,
    renderer: &mut dyn RenderBackend,
    position: Position,
) -> Result<Entity, WorldError> {
    let texture = Texture::new(BUNNY_TEXTURE);
    let drawable = renderer.create_drawable(&texture, BUNNY_SIZE.width, BUNNY_SIZE.height);

    let entity = world.create_entity();
    world.add_component(entity, BUNNY_SIZE)?;
    world.add_component(entity, texture)?;
    world.add_component(entity, position)?;
    world.add_component(entity, Renderable::new(drawable))?;
    world.add_component(entity, Velocity::ZERO)?;
    world.add_component(entity, GravityAffected)?;
    Ok(entity)
}
