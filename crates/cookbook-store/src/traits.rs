//! The [`EntryStore`] trait defining the entry storage interface.

use cookbook_types::Entry;

use crate::error::{Result, StoreError};

/// Storage backend for cookbook entries.
///
/// Implementations must be thread-safe (`Send + Sync`). Each call is atomic
/// with respect to every other call: a reader never observes a half-written
/// entry. There are no update or delete operations.
pub trait EntryStore: Send + Sync {
    /// Install `entry` under its name.
    ///
    /// Fails with [`StoreError::DuplicateName`] if the name is taken, leaving
    /// the existing entry untouched.
    fn insert(&self, entry: Entry) -> Result<()>;

    /// Read an entry by name.
    ///
    /// Returns `Ok(None)` if the entry does not exist.
    fn get(&self, name: &str) -> Result<Option<Entry>>;

    /// Number of stored entries.
    fn len(&self) -> Result<usize>;

    /// All entry names, sorted.
    fn names(&self) -> Result<Vec<String>>;

    /// Read an entry by name, failing with [`StoreError::NotFound`] if absent.
    fn lookup(&self, name: &str) -> Result<Entry> {
        self.get(name)?.ok_or_else(|| StoreError::NotFound {
            name: name.to_string(),
        })
    }

    /// Returns `true` if an entry with this name exists.
    fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.get(name)?.is_some())
    }

    /// Returns `true` if the store holds no entries.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
