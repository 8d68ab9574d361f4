//! Item placement for the adventure: the world set, the player's inventory
//! and the pool of items that have not been introduced yet.
use log::debug;

use super::errors::GameError;
use super::types::{Item, LocationId, PlacedItem};

// ============================================================================
// Registry
// ============================================================================

/// Owns every item that currently exists.
///
/// An item lives in exactly one of the three containers. The world set keeps
/// insertion order because `take` without a name picks the earliest match.
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    world: Vec<Item>,
    inventory: Vec<Item>,
    pool: Vec<Item>,
}

impl ItemRegistry {
    /// Build a registry from starting world items and the extra pool.
    pub fn new(starting: Vec<Item>, extra: Vec<Item>) -> Result<Self, GameError> {
        let mut registry = Self::default();
        for item in extra {
            registry.ensure_unique(item.name())?;
            registry.pool.push(item);
        }
        for item in starting {
            let location = item.location;
            registry.place_in_world(item, location)?;
        }
        Ok(registry)
    }

    fn exists(&self, name: &str) -> bool {
        self.world
            .iter()
            .chain(self.inventory.iter())
            .chain(self.pool.iter())
            .any(|i| i.name() == name)
    }

    fn ensure_unique(&self, name: &str) -> Result<(), GameError> {
        if self.exists(name) {
            return Err(GameError::DuplicateItem(name.to_string()));
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn world_items(&self) -> &[Item] {
        &self.world
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    pub fn pool(&self) -> &[Item] {
        &self.pool
    }

    pub fn in_inventory(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|i| i.name() == name)
    }

    pub fn items_at(&self, location: LocationId) -> impl Iterator<Item = &Item> {
        self.world.iter().filter(move |i| i.location == location)
    }

    pub fn first_item_at(&self, location: LocationId) -> Option<&Item> {
        self.items_at(location).next()
    }

    pub fn exists_in_world_at(&self, name: &str, location: LocationId) -> bool {
        self.items_at(location).any(|i| i.name() == name)
    }

    pub fn placed_items(&self) -> Vec<PlacedItem> {
        self.world.iter().map(Item::placed).collect()
    }

    // ------------------------------------------------------------------------
    // Placement operations
    // ------------------------------------------------------------------------

    /// Put an item into the world at `location`.
    pub fn place_in_world(&mut self, mut item: Item, location: LocationId) -> Result<(), GameError> {
        self.ensure_unique(item.name())?;
        item.location = location;
        debug!("Placing {} at {}", item.name(), location);
        self.world.push(item);
        Ok(())
    }

    /// Pick up an item lying at `current`.
    ///
    /// Without a name the earliest item at the location is taken.
    pub fn take(&mut self, name: Option<&str>, current: LocationId) -> Result<Item, GameError> {
        let index = match name {
            Some(name) => self
                .world
                .iter()
                .position(|i| i.name() == name && i.location == current)
                .ok_or_else(|| GameError::ItemNotFound(name.to_string()))?,
            None => self
                .world
                .iter()
                .position(|i| i.location == current)
                .ok_or(GameError::NothingHere)?,
        };
        let item = self.world.remove(index);
        debug!("Taking {} from {}", item.name(), current);
        self.inventory.push(item.clone());
        Ok(item)
    }

    /// Drop a held item at `current`.
    pub fn drop(&mut self, name: &str, current: LocationId) -> Result<&Item, GameError> {
        let index = self
            .inventory
            .iter()
            .position(|i| i.name() == name)
            .ok_or_else(|| GameError::NotInInventory(name.to_string()))?;
        let mut item = self.inventory.remove(index);
        item.location = current;
        debug!("Dropping {} at {}", item.name(), current);
        self.world.push(item);
        Ok(&self.world[self.world.len() - 1])
    }

    /// Permanently delete a held item.
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        let index = self.inventory.iter().position(|i| i.name() == name)?;
        debug!("Consuming {} from inventory", name);
        Some(self.inventory.remove(index))
    }

    /// Permanently delete an item lying in the world at `location`.
    pub fn remove_from_world(&mut self, name: &str, location: LocationId) -> Option<Item> {
        let index = self
            .world
            .iter()
            .position(|i| i.name() == name && i.location == location)?;
        debug!("Consuming {} from {}", name, location);
        Some(self.world.remove(index))
    }

    /// Move an item from the extra pool into the world at its authored location.
    pub fn introduce(&mut self, name: &str) -> Result<(), GameError> {
        let index = self
            .pool
            .iter()
            .position(|i| i.name() == name)
            .ok_or_else(|| GameError::NotInPool(name.to_string()))?;
        let item = self.pool.remove(index);
        debug!("Introducing {} at {}", item.name(), item.location);
        self.world.push(item);
        Ok(())
    }
}

// ============================================================================
// Messages
// ============================================================================

pub fn take_message(name: &str) -> String {
    format!("Poimit esineen {}.", name)
}

pub fn drop_message(name: &str) -> String {
    format!("Pudotit esineen {}.", name)
}
