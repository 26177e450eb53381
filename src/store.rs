use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{Item, NewItem};

#[derive(Debug)]
struct Inner {
    items: Vec<Item>,
    next_id: u64,
}

/// In-memory item collection shared across async handlers
///
/// Clones share the same underlying collection. Ids come from a counter owned
/// by the store, so an id is never reused even if items were to be removed.
#[derive(Debug, Clone)]
pub struct ItemStore {
    inner: Arc<RwLock<Inner>>,
}

impl ItemStore {
    /// Create an empty store; the first created item gets id 1
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create a store holding the two fixed seed items
    pub fn seeded() -> Self {
        Self::with_items(vec![
            Item {
                id: 1,
                name: "Item 1".to_string(),
                price: 10.0,
            },
            Item {
                id: 2,
                name: "Item 2".to_string(),
                price: 20.0,
            },
        ])
    }

    fn with_items(items: Vec<Item>) -> Self {
        let next_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(RwLock::new(Inner { items, next_id })),
        }
    }

    // The only mutation is a single push, so a poisoned lock still guards
    // consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all items in insertion order
    pub fn list(&self) -> Vec<Item> {
        self.read().items.clone()
    }

    /// Look up an item by id
    pub fn get(&self, id: u64) -> Option<Item> {
        self.read().items.iter().find(|item| item.id == id).cloned()
    }

    /// Assign the next id to `new_item`, append it, and return the stored item
    pub fn create(&self, new_item: NewItem) -> Item {
        let mut inner = self.write();
        let item = Item {
            id: inner.next_id,
            name: new_item.name,
            price: new_item.price,
        };
        inner.next_id += 1;
        inner.items.push(item.clone());
        item
    }

    pub fn len(&self) -> usize {
        self.read().items.len()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
