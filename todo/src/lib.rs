//! In-memory to-do item store.
//!
//! A [`Store`](store::Store) owns an insertion-ordered sequence of
//! [`Item`](item::Item)s behind a single reader-writer lock. It is built once
//! by the application and shared by reference (or `Arc`) with whatever
//! consumes it:
//!
//! - **[`item`]**: The item record and its identifier type.
//! - **[`id`]**: Identifier generation (ULID tokens).
//! - **[`store`]**: List/add/complete/delete over the shared sequence.
//! - **[`error`]**: The store's only failure, `NotFound`.
//!
//! Nothing here persists; all state lives as long as the `Store` value.

pub mod error;
pub mod id;
pub mod item;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::StoreError;
pub use item::{Item, ItemId};
pub use store::Store;
