//! # sim_world
//!
//! Owns every entity and its components. The [`EntityManager`] is the only
//! place entities are created and the only read path for "entities having
//! components {K1..Kn}" queries.

pub mod error;
pub mod manager;
pub mod snapshot;

pub use error::WorldError;
pub use manager::EntityManager;
pub use snapshot::{EntitySnapshot, WorldSnapshot};
