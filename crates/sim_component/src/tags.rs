//! Tag components. They carry no data; presence alone opts an entity into a
//! system.

use serde::{Deserialize, Serialize};

/// The entity falls under gravity and rests on the viewport floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GravityAffected;

/// The entity's velocity is steered by the directional keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputControlled;
