//! Point-in-time copies of world state.
//!
//! Snapshots compare and print the whole world at once (determinism checks,
//! debug dumps). They are not a save format.

use serde::{Deserialize, Serialize};
use sim_component::{AnyComponent, Entity};

/// Every entity and its components, in creation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub entities: Vec<EntitySnapshot>,
}

/// One entity's components, in kind order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub entity: Entity,
    pub components: Vec<AnyComponent>,
}

impl WorldSnapshot {
    /// Look up a single entity.
    #[must_use]
    pub fn entity(&self, entity: Entity) -> Option<&EntitySnapshot> {
        self.entities.iter().find(|e| e.entity == entity)
    }
}

#[cfg(test)]
mod tests {
    use sim_component::{Position, Velocity};

    use super::*;

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = WorldSnapshot {
            entities: vec![EntitySnapshot {
                entity: Entity::from_raw(1),
                components: vec![
                    Position::new(1.0, 2.0).into(),
                    Velocity::new(0.5, 0.0).into(),
                ],
            }],
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["entities"][0]["entity"], 1);
        assert_eq!(json["entities"][0]["components"][0]["position"]["x"], 1.0);
        assert_eq!(json["entities"][0]["components"][1]["velocity"]["x"], 0.5);
    }

    #[test]
    fn test_entity_lookup() {
        let snapshot = WorldSnapshot {
            entities: vec![EntitySnapshot {
                entity: Entity::from_raw(3),
                components: Vec::new(),
            }],
        };
        assert!(snapshot.entity(Entity::from_raw(3)).is_some());
        assert!(snapshot.entity(Entity::from_raw(4)).is_none());
    }
}
