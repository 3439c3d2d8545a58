//! # sim_math
//!
//! Math types for the simulation ECS. Re-exports [`glam`] for linear algebra
//! and defines [`Aabb`], the 2D bounding box collision detection works on.

pub mod aabb;

// Re-export glam types for convenience.
pub use glam::Vec2;

pub use aabb::Aabb;
