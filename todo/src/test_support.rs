//! Test-only helpers for building and inspecting stores.

use crate::item::{Item, ItemId};
use crate::store::Store;

/// Store pre-filled with one open item per message, in order.
pub fn store_with(messages: &[&str]) -> (Store, Vec<ItemId>) {
    let store = Store::new();
    let ids = messages.iter().map(|msg| store.add(*msg)).collect();
    (store, ids)
}

/// Ids of `items`, in order.
pub fn ids_of(items: &[Item]) -> Vec<ItemId> {
    items.iter().map(|item| item.id.clone()).collect()
}

/// Messages of `items`, in order.
pub fn messages_of(items: &[Item]) -> Vec<&str> {
    items.iter().map(|item| item.message.as_str()).collect()
}
