//! Recipe resolution for the cookbook.
//!
//! A recipe is a tree (in general a DAG) of required items. Resolution walks
//! it depth-first, pre-order, multiplying quantities along each path and
//! summing them per leaf ingredient. References are resolved against the
//! store at this point, so a recipe admitted with a forward reference only
//! fails here, and only if the name is still missing.
//!
//! Resolution is bounded: a recipe that reaches itself fails with
//! [`ResolveError::CyclicDefinition`], and paths longer than
//! [`ResolverConfig::max_depth`] fail with [`ResolveError::DepthExceeded`].
//!
//! # Quick Start
//!
//! ```rust
//! use cookbook_resolver::{Resolver, ResolverConfig};
//! use cookbook_store::{EntryStore, InMemoryEntryStore};
//! use cookbook_types::{Entry, RequiredItem};
//!
//! let store = InMemoryEntryStore::new();
//! store.insert(Entry::ingredient("Flour", 1)).unwrap();
//! store.insert(Entry::ingredient("Egg", 2)).unwrap();
//! store.insert(Entry::recipe("Batter", vec![
//!     RequiredItem::new("Flour", 3),
//!     RequiredItem::new("Egg", 1),
//! ])).unwrap();
//! store.insert(Entry::recipe("Cake", vec![RequiredItem::new("Batter", 2)])).unwrap();
//!
//! let summary = Resolver::new(&store, ResolverConfig::default())
//!     .summarize("Cake")
//!     .unwrap();
//! assert_eq!(summary.cook_time, 10);
//! assert_eq!(summary.quantity_of("Flour"), Some(6));
//! assert_eq!(summary.quantity_of("Egg"), Some(2));
//! ```

pub mod config;
pub mod error;
pub mod resolver;
pub mod summary;
pub mod totals;

pub use config::ResolverConfig;
pub use error::{ResolveError, Result};
pub use resolver::Resolver;
pub use totals::IngredientTotals;
