use std::fmt;

use serde::{Deserialize, Serialize};

/// The two kinds of entry a cookbook can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A leaf with a fixed per-unit cook time.
    Ingredient,
    /// A composite of other entries.
    Recipe,
}

impl EntryKind {
    /// Parse the wire discriminant. Only the exact lowercase spellings match.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ingredient" => Some(Self::Ingredient),
            "recipe" => Some(Self::Recipe),
            _ => None,
        }
    }

    /// The wire discriminant for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ingredient => "ingredient",
            Self::Recipe => "recipe",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference by name to another entry, with a multiplicity.
///
/// The name is resolved against the store when a summary is requested, not
/// when the owning recipe is admitted, so it may name an entry that does not
/// exist yet. `quantity` is not checked for positivity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: i64,
}

impl RequiredItem {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// A leaf entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub cook_time: u64,
}

/// A composite entry. No two `required_items` share a name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub required_items: Vec<RequiredItem>,
}

/// A validated cookbook entry.
///
/// Entries are keyed by name in the store and never change once admitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    /// Build an ingredient entry.
    pub fn ingredient(name: impl Into<String>, cook_time: u64) -> Self {
        Self::Ingredient(Ingredient {
            name: name.into(),
            cook_time,
        })
    }

    /// Build a recipe entry.
    pub fn recipe(name: impl Into<String>, required_items: Vec<RequiredItem>) -> Self {
        Self::Recipe(Recipe {
            name: name.into(),
            required_items,
        })
    }

    /// The entry's unique key.
    pub fn name(&self) -> &str {
        match self {
            Self::Ingredient(i) => &i.name,
            Self::Recipe(r) => &r.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Ingredient(_) => EntryKind::Ingredient,
            Self::Recipe(_) => EntryKind::Recipe,
        }
    }

    pub fn is_recipe(&self) -> bool {
        matches!(self, Self::Recipe(_))
    }

    pub fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            Self::Recipe(r) => Some(r),
            Self::Ingredient(_) => None,
        }
    }

    pub fn as_ingredient(&self) -> Option<&Ingredient> {
        match self {
            Self::Ingredient(i) => Some(i),
            Self::Recipe(_) => None,
        }
    }
}
