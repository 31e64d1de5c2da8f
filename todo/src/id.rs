//! Item identifier generation.
//!
//! Ids are ULIDs rendered as 26-character Crockford base32: a millisecond
//! timestamp prefix followed by 80 random bits. Generation needs no shared
//! state, so concurrent callers never coordinate.

use ulid::Ulid;

use crate::item::ItemId;

/// Generate a fresh, globally unique item id.
pub fn new_id() -> ItemId {
    ItemId::from(Ulid::new().to_string())
}
