//! Collision system: AABB overlap detection between spatial entities.
//!
//! Detection only: overlaps are reported as [`CollisionEvent`]s and nothing
//! is moved apart. The pair test is O(n²) over every entity with `Position`
//! and `Size`, which is fine for tens of entities and not for thousands.

use serde::{Deserialize, Serialize};
use sim_component::{ComponentKind, Entity, Position, QueryDescriptor, Size};
use sim_math::Aabb;
use sim_world::EntityManager;
use tracing::debug;

use crate::context::FrameContext;
use crate::system::System;

/// Two entities whose boxes overlapped this frame.
///
/// Every overlapping pair is reported once, with `a` created before `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}

impl CollisionEvent {
    /// Returns `true` if `entity` took part in this collision.
    #[must_use]
    pub fn involves(&self, entity: Entity) -> bool {
        self.a == entity || self.b == entity
    }
}

/// Reports every overlapping pair of spatial entities.
#[derive(Debug, Clone, Default)]
pub struct CollisionSystem;

impl CollisionSystem {
    /// Create a collision system.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Find every overlapping pair among the world's spatial entities.
    ///
    /// Events are ordered by `a`, then `b`, in creation order.
    #[must_use]
    pub fn detect(&self, world: &EntityManager) -> Vec<CollisionEvent> {
        let boxes: Vec<(Entity, Aabb)> = world
            .query(&self.access())
            .into_iter()
            .filter_map(|entity| {
                let position = world.get::<Position>(entity)?;
                let size = world.get::<Size>(entity)?;
                Some((entity, Aabb::from_components(position, size)))
            })
            .collect();

        let mut events = Vec::new();
        for (i, (a, box_a)) in boxes.iter().enumerate() {
            for (b, box_b) in &boxes[i + 1..] {
                if box_a.overlaps(box_b) {
                    events.push(CollisionEvent { a: *a, b: *b });
                }
            }
        }
        events
    }
}

impl System for CollisionSystem {
    fn name(&self) -> &'static str {
        "collision"
    }

    fn access(&self) -> QueryDescriptor {
        QueryDescriptor::new()
            .read(ComponentKind::Position)
            .read(ComponentKind::Size)
    }

    fn run(&mut self, world: &mut EntityManager, ctx: &mut FrameContext<'_>) {
        let events = self.detect(world);
        for event in &events {
            debug!(
                tick = ctx.tick_id,
                a = event.a.id(),
                b = event.b.id(),
                "collision detected"
            );
        }
        ctx.collisions.extend(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Viewport;
    use crate::input::InputState;
    use crate::systems::testing::run_once;

    fn boxed(world: &mut EntityManager, x: f32, y: f32) -> Entity {
        world.spawn([Position::new(x, y).into(), Size::new(10.0, 10.0).into()])
    }

    #[test]
    fn test_overlapping_pair_is_reported_once() {
        let mut world = EntityManager::new();
        let a = boxed(&mut world, 0.0, 0.0);
        let b = boxed(&mut world, 5.0, 5.0);

        let events = CollisionSystem::new().detect(&world);
        assert_eq!(events, vec![CollisionEvent { a, b }]);
    }

    #[test]
    fn test_separate_pair_is_not_reported() {
        let mut world = EntityManager::new();
        boxed(&mut world, 0.0, 0.0);
        boxed(&mut world, 20.0, 20.0);

        assert!(CollisionSystem::new().detect(&world).is_empty());
    }

    #[test]
    fn test_entities_without_size_are_ignored() {
        let mut world = EntityManager::new();
        boxed(&mut world, 0.0, 0.0);
        world.spawn([Position::new(1.0, 1.0).into()]);

        assert!(CollisionSystem::new().detect(&world).is_empty());
    }

    #[test]
    fn test_events_are_ordered_by_creation() {
        let mut world = EntityManager::new();
        let a = boxed(&mut world, 0.0, 0.0);
        let b = boxed(&mut world, 100.0, 0.0);
        let c = boxed(&mut world, 4.0, 4.0);
        let d = boxed(&mut world, 104.0, 4.0);
        let e = boxed(&mut world, 2.0, 2.0);

        let events = CollisionSystem::new().detect(&world);
        assert_eq!(
            events,
            vec![
                CollisionEvent { a, b: c },
                CollisionEvent { a, b: e },
                CollisionEvent { a: b, b: d },
                CollisionEvent { a: c, b: e },
            ]
        );
        assert!(events[0].involves(c));
        assert!(!events[0].involves(d));
    }

    #[test]
    fn test_run_collects_into_frame() {
        let mut world = EntityManager::new();
        let a = boxed(&mut world, 0.0, 0.0);
        let b = boxed(&mut world, 5.0, 5.0);

        let events = run_once(
            &mut CollisionSystem::new(),
            &mut world,
            &InputState::default(),
            Viewport::new(800.0, 600.0),
            1.0,
        );
        assert_eq!(events, vec![CollisionEvent { a, b }]);
    }
}
