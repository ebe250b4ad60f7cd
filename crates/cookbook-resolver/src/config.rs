use serde::{Deserialize, Serialize};

/// Default bound on the length of a root-to-leaf path.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Limits applied while expanding a recipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Deepest level a required item may sit at. Root items are level 1.
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ResolverConfig {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}
