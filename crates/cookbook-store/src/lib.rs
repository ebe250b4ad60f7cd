//! Entry storage for the cookbook.
//!
//! The store maps an entry's name to its validated definition. Entries are
//! written once and never updated or deleted; the store starts empty and
//! lives as long as its owner.
//!
//! # Modules
//!
//! - [`error`] — Error types for store operations
//! - [`traits`] — The [`EntryStore`] trait defining the storage interface
//! - [`memory`] — In-memory [`InMemoryEntryStore`]

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::InMemoryEntryStore;
pub use traits::EntryStore;
