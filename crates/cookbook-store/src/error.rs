//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// An entry with this name already exists.
    #[error("entry already exists: {name}")]
    DuplicateName { name: String },

    /// No entry with this name exists.
    #[error("entry not found: {name}")]
    NotFound { name: String },

    /// A writer panicked while holding the store lock.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Convenience type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
