//! The [`System`] trait.

use sim_component::QueryDescriptor;
use sim_world::EntityManager;

use crate::context::FrameContext;

/// A stateless per-frame procedure over the entities matching its query.
///
/// Systems keep only their tuning constants. Everything that has to persist
/// between frames lives in components; everything that only matters within a
/// frame lives in the [`FrameContext`].
pub trait System {
    /// Short name, used in logs.
    fn name(&self) -> &'static str;

    /// The component kinds this system reads and writes.
    fn access(&self) -> QueryDescriptor;

    /// Run the system once for the current frame.
    fn run(&mut self, world: &mut EntityManager, ctx: &mut FrameContext<'_>);
}
