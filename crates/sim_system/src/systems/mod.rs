//! The five frame systems, in pipeline order.

pub mod collision;
pub mod gravity;
pub mod input;
pub mod render_sync;
pub mod velocity;

pub use collision::{CollisionEvent, CollisionSystem};
pub use gravity::{Fall, GravitySystem};
pub use input::InputSystem;
pub use render_sync::RenderSyncSystem;
pub use velocity::VelocitySystem;
