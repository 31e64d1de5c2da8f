//! Store error type.

use thiserror::Error;

/// Failure returned by store operations that address an item by id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No live item carries the requested id.
    #[error("item not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// The id that failed to match, for callers mapping this to their own
    /// not-found response.
    pub fn id(&self) -> &str {
        match self {
            StoreError::NotFound(id) => id,
        }
    }
}
