//! The item store.
//!
//! One `RwLock` guards the whole sequence. Reads (`list`, `get`, `len`) share
//! it; `add`, `complete` and `delete` hold it exclusively, and the id lookup
//! for `complete`/`delete` runs inside that same critical section so the
//! position found is still valid when it is used.

use parking_lot::RwLock;

use crate::error::StoreError;
use crate::id::new_id;
use crate::item::{Item, ItemId};

/// Insertion-ordered collection of to-do items, safe to share across threads.
#[derive(Debug, Default)]
pub struct Store {
    items: RwLock<Vec<Item>>,
}

impl Store {
    /// Empty store, ready to use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all items in insertion order.
    pub fn list(&self) -> Vec<Item> {
        self.items.read().clone()
    }

    /// Copy of the item with `id`, if present.
    pub fn get(&self, id: &str) -> Option<Item> {
        let items = self.items.read();
        position(&items, id).map(|index| items[index].clone())
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Append a new open item and return its generated id.
    ///
    /// Any message is accepted, including an empty one.
    pub fn add(&self, message: impl Into<String>) -> ItemId {
        let item = Item::new(new_id(), message);
        let id = item.id.clone();
        self.items.write().push(item);
        id
    }

    /// Mark the item with `id` complete. Completing twice is a no-op.
    pub fn complete(&self, id: &str) -> Result<(), StoreError> {
        let mut items = self.items.write();
        let index = position(&items, id).ok_or_else(|| not_found(id))?;
        items[index].complete = true;
        Ok(())
    }

    /// Remove the item with `id`, keeping the order of the rest.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut items = self.items.write();
        let index = position(&items, id).ok_or_else(|| not_found(id))?;
        items.remove(index);
        Ok(())
    }
}

/// Linear scan for the first item whose id equals `id` exactly.
fn position(items: &[Item], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}

fn not_found(id: &str) -> StoreError {
    StoreError::NotFound(id.to_string())
}
