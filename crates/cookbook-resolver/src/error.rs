//! Error types for recipe resolution.

use cookbook_store::StoreError;
use thiserror::Error;

/// Errors that can occur while resolving or summarizing a recipe.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// A name that is not in the store: the summarized recipe itself, or a
    /// required item at any depth.
    #[error("unknown entry: {name}")]
    UnknownEntry { name: String },

    /// A summary was requested for an ingredient.
    #[error("not a recipe: {name}")]
    NotARecipe { name: String },

    /// The recipe reaches itself. `cycle` runs from the repeated recipe back
    /// to itself, e.g. `["A", "B", "A"]`.
    #[error("cyclic definition: {}", cycle.join(" -> "))]
    CyclicDefinition { cycle: Vec<String> },

    /// A required item sits deeper than the configured bound.
    #[error("recipe {name} nests deeper than {max_depth} levels")]
    DepthExceeded { name: String, max_depth: usize },

    /// A quantity or cook-time total does not fit in 64 bits.
    #[error("quantity overflow while expanding {name}")]
    QuantityOverflow { name: String },

    /// The store could not be read.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Convenience type alias for resolver operations.
pub type Result<T> = std::result::Result<T, ResolveError>;
