//! Admission gate for the cookbook.
//!
//! Every entry submission must pass through the gate before it is installed
//! in the store. The gate runs an ordered pipeline of stages and stops at the
//! first rejection, so a submission is either admitted whole or not at all.
//!
//! The default pipeline checks, in order:
//!
//! 1. [`EntryTypeStage`] — `type` is `"recipe"` or `"ingredient"`
//! 2. [`CookTimeStage`] — ingredients carry a non-negative `cookTime`
//! 3. [`UniqueNameStage`] — the name is present and not already stored
//! 4. [`RequiredItemsStage`] — recipes carry `requiredItems` with no repeated child
//!
//! Required items are not resolved against the store here; a recipe may name
//! entries that will only be added later.
//!
//! # Quick Start
//!
//! ```rust
//! use cookbook_gate::EntryGate;
//! use cookbook_store::{EntryStore, InMemoryEntryStore};
//! use cookbook_types::{EntryRecord, RequiredItemRecord};
//!
//! let store = InMemoryEntryStore::new();
//! let gate = EntryGate::with_default_stages();
//!
//! gate.admit(EntryRecord::ingredient("Egg", 2), &store).unwrap();
//! gate.admit(
//!     EntryRecord::recipe("Omelette", vec![RequiredItemRecord::new("Egg", 3)]),
//!     &store,
//! )
//! .unwrap();
//! assert_eq!(store.len().unwrap(), 2);
//!
//! assert!(gate.admit(EntryRecord::ingredient("Egg", 5), &store).is_err());
//! ```

pub mod error;
pub mod gate;
pub mod stage;
pub mod stages;

pub use error::{GateError, Rejection};
pub use gate::{EntryGate, GateResult};
pub use stage::{EntryStage, GateContext, StageDecision, StageResult};
pub use stages::{CookTimeStage, EntryTypeStage, RequiredItemsStage, UniqueNameStage};
