//! In-memory entry store.
//!
//! [`InMemoryEntryStore`] keeps all entries in a `HashMap` behind a `RwLock`:
//! many concurrent readers, one exclusive writer. Data is lost when the store
//! is dropped.

use std::collections::hash_map::Entry as MapEntry;
use std::collections::HashMap;
use std::sync::RwLock;

use cookbook_types::Entry;

use crate::error::{Result, StoreError};
use crate::traits::EntryStore;

/// An in-memory implementation of [`EntryStore`].
#[derive(Debug, Default)]
pub struct InMemoryEntryStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryEntryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryStore for InMemoryEntryStore {
    fn insert(&self, entry: Entry) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        match entries.entry(entry.name().to_string()) {
            MapEntry::Occupied(slot) => Err(StoreError::DuplicateName {
                name: slot.key().clone(),
            }),
            MapEntry::Vacant(slot) => {
                tracing::debug!(name = %slot.key(), kind = %entry.kind(), "entry stored");
                slot.insert(entry);
                Ok(())
            }
        }
    }

    fn get(&self, name: &str) -> Result<Option<Entry>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        Ok(entries.get(name).cloned())
    }

    fn len(&self) -> Result<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        Ok(entries.len())
    }

    fn names(&self) -> Result<Vec<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        let mut names: Vec<String> = entries.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
