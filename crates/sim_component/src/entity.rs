//! Entity handles and their allocator.
//!
//! Handles are dense: the n-th entity created gets ID `n`, starting at 1, and
//! IDs are never reused. That makes a handle double as its creation-order
//! index, which the entity manager uses for O(1) slot lookup and stable
//! query ordering.

use serde::{Deserialize, Serialize};

/// Opaque entity handle.
///
/// Carries no data of its own; components attached through the entity
/// manager give it meaning. Ordering two handles orders them by creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(pub u64);

impl Entity {
    /// Never handed out by [`EntityAllocator`].
    pub const INVALID: Entity = Entity(0);

    /// Wrap a raw ID.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// The raw ID.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// `false` only for [`Entity::INVALID`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// Zero-based position of this entity in creation order.
    #[must_use]
    pub fn creation_index(self) -> Option<usize> {
        let index = self.0.checked_sub(1)?;
        usize::try_from(index).ok()
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entity #{}", self.0)
    }
}

/// Hands out entity handles in creation order.
#[derive(Debug)]
pub struct EntityAllocator {
    allocated: u64,
}

impl EntityAllocator {
    /// A fresh allocator; its first handle is `Entity(1)`.
    #[must_use]
    pub fn new() -> Self {
        Self { allocated: 0 }
    }

    /// Allocate the next handle.
    pub fn allocate(&mut self) -> Entity {
        self.allocated += 1;
        Entity(self.allocated)
    }

    /// How many handles have been allocated.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.allocated
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}
