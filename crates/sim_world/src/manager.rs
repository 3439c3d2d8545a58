//! Entity and component storage.
//!
//! Each entity owns a fixed-size slot array indexed by [`ComponentKind`], so
//! presence checks and lookups are O(1). Queries are a linear scan over the
//! entities in creation order, which keeps results deterministic.

use sim_component::{
    AnyComponent, Component, ComponentKind, Entity, EntityAllocator, QueryDescriptor,
};
use tracing::trace;

use crate::error::WorldError;
use crate::snapshot::{EntitySnapshot, WorldSnapshot};

/// A single entity's component slots.
#[derive(Debug, Clone)]
struct EntityRecord {
    entity: Entity,
    components: [Option<AnyComponent>; ComponentKind::COUNT],
}

impl EntityRecord {
    fn new(entity: Entity) -> Self {
        Self {
            entity,
            components: Default::default(),
        }
    }

    fn has(&self, kind: ComponentKind) -> bool {
        self.components[kind.index()].is_some()
    }
}

/// Owns all entities, in creation order, and their components.
#[derive(Debug, Default)]
pub struct EntityManager {
    /// Entity ID allocator.
    allocator: EntityAllocator,
    /// Records in creation order. Entity `n` lives at index `n - 1`.
    records: Vec<EntityRecord>,
}

impl EntityManager {
    /// Create a new empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Entity lifecycle --

    /// Allocate a new entity without any components.
    pub fn create_entity(&mut self) -> Entity {
        let entity = self.allocator.allocate();
        self.records.push(EntityRecord::new(entity));
        trace!(entity = entity.id(), "created entity");
        entity
    }

    /// Allocate a new entity and attach every component in `components`.
    ///
    /// Later values replace earlier ones of the same kind.
    pub fn spawn<I>(&mut self, components: I) -> Entity
    where
        I: IntoIterator<Item = AnyComponent>,
    {
        let entity = self.create_entity();
        if let Some(record) = self.records.last_mut() {
            for component in components {
                let kind = component.kind();
                record.components[kind.index()] = Some(component);
            }
        }
        entity
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.records.len()
    }

    /// Returns every entity in creation order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.records.iter().map(|r| r.entity)
    }

    /// Returns `true` if `entity` belongs to this manager.
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.record(entity).is_some()
    }

    // -- Component operations --

    /// Attach a component to an entity, fully replacing any existing
    /// component of the same kind.
    ///
    /// The value is moved into the entity; nothing else can alias it.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EntityNotFound`] if the handle is unknown.
    pub fn add_component(
        &mut self,
        entity: Entity,
        component: impl Into<AnyComponent>,
    ) -> Result<(), WorldError> {
        let component = component.into();
        let kind = component.kind();
        let record = self
            .record_mut(entity)
            .ok_or(WorldError::EntityNotFound(entity))?;
        let replaced = record.components[kind.index()].replace(component).is_some();
        trace!(entity = entity.id(), %kind, replaced, "attached component");
        Ok(())
    }

    /// Check if an entity has a component of the given kind.
    ///
    /// Unknown entities have no components.
    #[must_use]
    pub fn has_component(&self, entity: Entity, kind: ComponentKind) -> bool {
        self.record(entity).is_some_and(|r| r.has(kind))
    }

    /// Get the component of the given kind, if present.
    #[must_use]
    pub fn get_component(&self, entity: Entity, kind: ComponentKind) -> Option<&AnyComponent> {
        self.record(entity)?.components[kind.index()].as_ref()
    }

    /// Typed variant of [`EntityManager::get_component`].
    #[must_use]
    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.get_component(entity, T::KIND).and_then(T::from_any)
    }

    /// Mutable typed access to a component, if present.
    #[must_use]
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.record_mut(entity)?.components[T::KIND.index()]
            .as_mut()
            .and_then(T::from_any_mut)
    }

    /// Mutable access to two different components of the same entity.
    ///
    /// Returns `None` if either is absent or if `A` and `B` are the same kind.
    #[must_use]
    pub fn get_pair_mut<A: Component, B: Component>(
        &mut self,
        entity: Entity,
    ) -> Option<(&mut A, &mut B)> {
        if A::KIND == B::KIND {
            return None;
        }
        let record = self.record_mut(entity)?;
        let (mut a, mut b) = (None, None);
        for slot in record.components.iter_mut().flatten() {
            let kind = slot.kind();
            if kind == A::KIND {
                a = A::from_any_mut(slot);
            } else if kind == B::KIND {
                b = B::from_any_mut(slot);
            }
        }
        Some((a?, b?))
    }

    /// Returns every component attached to an entity, in kind order.
    pub fn components_of(&self, entity: Entity) -> impl Iterator<Item = &AnyComponent> + '_ {
        self.record(entity)
            .into_iter()
            .flat_map(|r| r.components.iter().flatten())
    }

    // -- Query --

    /// Returns, in creation order, every entity that has ALL of `kinds`.
    ///
    /// An empty `kinds` slice matches every entity.
    #[must_use]
    pub fn entities_with_components(&self, kinds: &[ComponentKind]) -> Vec<Entity> {
        self.records
            .iter()
            .filter(|r| kinds.iter().all(|k| r.has(*k)))
            .map(|r| r.entity)
            .collect()
    }

    /// Returns, in creation order, every entity matching a system's query.
    #[must_use]
    pub fn query(&self, descriptor: &QueryDescriptor) -> Vec<Entity> {
        self.records
            .iter()
            .filter(|r| descriptor.matches(|k| r.has(k)))
            .map(|r| r.entity)
            .collect()
    }

    /// Capture every entity and component.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            entities: self
                .records
                .iter()
                .map(|r| EntitySnapshot {
                    entity: r.entity,
                    components: r.components.iter().flatten().cloned().collect(),
                })
                .collect(),
        }
    }

    fn slot(&self, entity: Entity) -> Option<usize> {
        entity
            .creation_index()
            .filter(|&index| index < self.records.len())
    }

    fn record(&self, entity: Entity) -> Option<&EntityRecord> {
        self.slot(entity).map(|i| &self.records[i])
    }

    fn record_mut(&mut self, entity: Entity) -> Option<&mut EntityRecord> {
        self.slot(entity).map(|i| &mut self.records[i])
    }
}

#[cfg(test)]
mod tests {
    use sim_component::{
        DrawableId, GravityAffected, InputControlled, Position, QueryFilter, Renderable, Size,
        Texture, Velocity,
    };

    use super::*;

    #[test]
    fn test_create_entity_is_empty() {
        let mut world = EntityManager::new();
        let e = world.create_entity();
        assert!(e.is_valid());
        assert_eq!(world.entity_count(), 1);
        for kind in ComponentKind::ALL {
            assert!(!world.has_component(e, kind));
            assert!(world.get_component(e, kind).is_none());
        }
    }

    #[test]
    fn test_add_then_get_returns_value() {
        let mut world = EntityManager::new();
        let e = world.create_entity();
        world.add_component(e, Position::new(1.0, 2.0)).unwrap();

        assert!(world.has_component(e, ComponentKind::Position));
        assert_eq!(
            world.get_component(e, ComponentKind::Position),
            Some(&AnyComponent::Position(Position::new(1.0, 2.0)))
        );
        assert_eq!(world.get::<Position>(e), Some(&Position::new(1.0, 2.0)));
    }

    #[test]
    fn test_second_add_replaces_without_merge() {
        let mut world = EntityManager::new();
        let e = world.create_entity();
        world.add_component(e, Texture::new("bunny.png")).unwrap();
        world.add_component(e, Texture::new("carrot.png")).unwrap();

        assert_eq!(world.get::<Texture>(e), Some(&Texture::new("carrot.png")));
        assert_eq!(world.components_of(e).count(), 1);
    }

    #[test]
    fn test_entities_in_creation_order() {
        let mut world = EntityManager::new();
        let a = world.create_entity();
        let b = world.create_entity();
        assert_eq!(world.entities().collect::<Vec<_>>(), vec![a, b]);
        assert!(world.contains(b));
        assert!(!world.contains(Entity::from_raw(3)));
    }

    #[test]
    fn test_add_to_unknown_entity_fails() {
        let mut world = EntityManager::new();
        let stranger = Entity::from_raw(5);
        assert_eq!(
            world.add_component(stranger, GravityAffected),
            Err(WorldError::EntityNotFound(stranger))
        );
        assert_eq!(
            world.add_component(Entity::INVALID, GravityAffected),
            Err(WorldError::EntityNotFound(Entity::INVALID))
        );
        assert!(!world.has_component(stranger, ComponentKind::GravityAffected));
    }

    #[test]
    fn test_query_returns_exact_matches_in_creation_order() {
        let mut world = EntityManager::new();
        let a = world.spawn([Position::new(0.0, 0.0).into(), Velocity::ZERO.into()]);
        let b = world.spawn([Position::new(0.0, 0.0).into()]);
        let c = world.spawn([
            Velocity::ZERO.into(),
            Position::new(0.0, 0.0).into(),
            GravityAffected.into(),
        ]);
        let d = world.spawn([Velocity::ZERO.into()]);

        assert_eq!(
            world.entities_with_components(&[ComponentKind::Position, ComponentKind::Velocity]),
            vec![a, c]
        );
        assert_eq!(
            world.entities_with_components(&[ComponentKind::Velocity]),
            vec![a, c, d]
        );
        assert_eq!(
            world.entities_with_components(&[ComponentKind::Position]),
            vec![a, b, c]
        );
        assert!(
            world
                .entities_with_components(&[ComponentKind::Renderable])
                .is_empty()
        );
        assert_eq!(world.entities_with_components(&[]), vec![a, b, c, d]);
    }

    #[test]
    fn test_query_with_every_kind() {
        let mut world = EntityManager::new();
        let _partial = world.spawn([Position::new(0.0, 0.0).into()]);
        let full = world.spawn([
            Position::new(0.0, 0.0).into(),
            Velocity::ZERO.into(),
            Size::new(1.0, 1.0).into(),
            Texture::new("t").into(),
            Renderable::new(DrawableId(0)).into(),
            GravityAffected.into(),
            InputControlled.into(),
        ]);
        assert_eq!(world.entities_with_components(&ComponentKind::ALL), vec![full]);
    }

    #[test]
    fn test_query_descriptor_filters() {
        let mut world = EntityManager::new();
        let player = world.spawn([Velocity::ZERO.into(), InputControlled.into()]);
        let _npc = world.spawn([Velocity::ZERO.into()]);

        let q = QueryDescriptor::new()
            .write(ComponentKind::Velocity)
            .filter(QueryFilter::With(ComponentKind::InputControlled));
        assert_eq!(world.query(&q), vec![player]);
    }

    #[test]
    fn test_mutations_are_visible_immediately() {
        let mut world = EntityManager::new();
        let e = world.spawn([Velocity::new(1.0, 1.0).into()]);
        if let Some(v) = world.get_mut::<Velocity>(e) {
            v.x = 4.0;
        }
        assert_eq!(world.get::<Velocity>(e), Some(&Velocity::new(4.0, 1.0)));
    }

    #[test]
    fn test_get_pair_mut() {
        let mut world = EntityManager::new();
        let e = world.spawn([Position::new(1.0, 1.0).into(), Velocity::new(2.0, 3.0).into()]);

        let (v, p) = world.get_pair_mut::<Velocity, Position>(e).unwrap();
        p.x += v.x;
        v.y = 0.0;

        assert_eq!(world.get::<Position>(e), Some(&Position::new(3.0, 1.0)));
        assert_eq!(world.get::<Velocity>(e), Some(&Velocity::new(2.0, 0.0)));
        assert!(world.get_pair_mut::<Velocity, Velocity>(e).is_none());
        assert!(world.get_pair_mut::<Velocity, Size>(e).is_none());
    }

    #[test]
    fn test_attached_values_are_independent() {
        let mut world = EntityManager::new();
        let size = Size::new(50.0, 90.0);
        let a = world.spawn([size.into()]);
        let b = world.spawn([size.into()]);

        if let Some(s) = world.get_mut::<Size>(a) {
            s.height = 10.0;
        }
        assert_eq!(world.get::<Size>(b), Some(&Size::new(50.0, 90.0)));
    }

    #[test]
    fn test_snapshot_lists_components_in_kind_order() {
        let mut world = EntityManager::new();
        let e = world.spawn([GravityAffected.into(), Position::new(1.0, 2.0).into()]);
        let snapshot = world.snapshot();
        assert_eq!(snapshot.entities.len(), 1);
        assert_eq!(snapshot.entities[0].entity, e);
        assert_eq!(
            snapshot.entities[0].components,
            vec![
                AnyComponent::Position(Position::new(1.0, 2.0)),
                AnyComponent::GravityAffected(GravityAffected),
            ]
        );
    }
}
