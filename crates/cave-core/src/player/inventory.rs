//! Bounded item inventory

use serde::{Deserialize, Serialize};

use crate::INVENTORY_MAX;
use crate::object::Item;

/// Ordered, bounded multiset of carried items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_capacity(INVENTORY_MAX)
    }
}

impl Inventory {
    /// Create an empty inventory holding at most `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Add an item if there is a free slot.
    ///
    /// Returns false (and leaves the inventory untouched) when full.
    pub fn add(&mut self, item: Item) -> bool {
        if self.items.len() < self.capacity {
            self.items.push(item);
            true
        } else {
            false
        }
    }

    /// Check whether at least one `item` is carried
    pub fn contains(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    /// Remove the first matching item
    pub fn remove(&mut self, item: Item) -> bool {
        match self.items.iter().position(|&i| i == item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
