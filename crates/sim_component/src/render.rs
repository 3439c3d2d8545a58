//! Presentation components.
//!
//! These only reference resources owned by the render backend; the backend
//! itself lives outside the ECS.

use serde::{Deserialize, Serialize};

/// Handle to a drawable created by the render backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DrawableId(pub u32);

/// Texture reference (an asset path or URL understood by the backend).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Texture {
    pub handle: String,
}

impl Texture {
    /// Create a new texture reference.
    #[must_use]
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
        }
    }
}

/// Marks an entity as drawn through `drawable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Renderable {
    pub drawable: DrawableId,
}

impl Renderable {
    /// Create a renderable bound to an existing drawable.
    #[must_use]
    pub const fn new(drawable: DrawableId) -> Self {
        Self { drawable }
    }
}
