//! # sim_component
//!
//! The "E" and "C" of the simulation ECS: entity identity, the closed set of
//! component kinds, and the plain data each kind carries.
//!
//! This crate provides:
//!
//! - [`Entity`]: lightweight `u64` entity identifiers.
//! - [`EntityAllocator`]: monotonically increasing ID allocator.
//! - [`ComponentKind`]: the closed enumeration of component kinds.
//! - [`Component`] / [`AnyComponent`]: typed and type-erased component values.
//! - [`QueryDescriptor`]: declarative data access requirements for systems.

pub mod component;
pub mod entity;
pub mod query;
pub mod render;
pub mod spatial;
pub mod tags;

pub use component::{AnyComponent, Component, ComponentKind};
pub use entity::{Entity, EntityAllocator};
pub use query::{QueryDescriptor, QueryFilter};
pub use render::{DrawableId, Renderable, Texture};
pub use spatial::{Position, Size, Velocity};
pub use tags::{GravityAffected, InputControlled};
