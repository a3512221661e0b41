//! Keyed storage of entity records.
//!
//! The store has no notion of order: the visible table order is always
//! derived by the controller from the active sort strategy.

use std::collections::HashMap;

use super::entity::{Entity, Metrics};

/// Mapping from entity id to entity record.
#[derive(Debug, Default, Clone)]
pub struct EntityStore {
    entities: HashMap<String, Entity>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new entity with zeroed metrics, or renames an existing one.
    ///
    /// Metrics of an existing entity are left untouched.
    /// Returns `true` if a new entity was created.
    pub fn upsert(&mut self, id: &str, display_name: &str) -> bool {
        if let Some(entity) = self.entities.get_mut(id) {
            if entity.display_name() != display_name {
                entity.set_display_name(display_name);
            }
            return false;
        }
        self.entities
            .insert(id.to_string(), Entity::new(id, display_name));
        true
    }

    /// Replaces the metrics snapshot of `id`, creating the entity if absent.
    ///
    /// A created entity is named after its id until a later `upsert`.
    /// Returns `true` if a new entity was created.
    pub fn update_metrics(&mut self, id: &str, metrics: Metrics) -> bool {
        let created = !self.entities.contains_key(id);
        self.entities
            .entry(id.to_string())
            .or_insert_with(|| Entity::new(id, id))
            .replace_metrics(metrics);
        created
    }

    /// Deletes an entity by id.
    pub fn remove(&mut self, id: &str) -> Option<Entity> {
        self.entities.remove(id)
    }

    /// Number of stored entities.
    pub fn count(&self) -> usize {
        self.entities.len()
    }

    /// All entities in unspecified order.
    pub fn all_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Looks up an entity; absent ids are reported as `None`.
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.get(id)
    }
}
