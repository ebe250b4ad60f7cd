//! Foundation types for the cookbook.
//!
//! Every other cookbook crate depends on `cookbook-types`. The types here are
//! plain data: validation lives in `cookbook-gate`, storage in
//! `cookbook-store`, and expansion in `cookbook-resolver`.
//!
//! # Key Types
//!
//! - [`Entry`] — A validated cookbook entry, either an [`Ingredient`] or a [`Recipe`]
//! - [`RequiredItem`] — A `(name, quantity)` reference from a recipe to another entry
//! - [`EntryRecord`] — The unvalidated entry as submitted by a client
//! - [`RecipeSummary`] — Flattened ingredient totals and total cook time

pub mod entry;
pub mod record;
pub mod summary;

pub use entry::{Entry, EntryKind, Ingredient, Recipe, RequiredItem};
pub use record::{EntryRecord, RequiredItemRecord};
pub use summary::{IngredientQuantity, RecipeSummary};
