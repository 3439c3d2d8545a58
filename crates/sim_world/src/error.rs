//! World error types.

use sim_component::Entity;

/// Errors that can occur when mutating the world.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WorldError {
    /// The handle was not produced by this manager.
    #[error("{0} not found")]
    EntityNotFound(Entity),
}
