//! Multiplicative expansion of required items into leaf ingredient totals.
//!
//! Expansion is depth-first and pre-order, in the order items are listed, so
//! the first failure and the order ingredients are discovered in are
//! deterministic. Within one call each sub-recipe is expanded once at unit
//! quantity and then scaled wherever it is referenced. Totals and order are
//! the same as walking every path, and work is linear in the number of
//! distinct recipes reached. When a unit expansion or its scaling overflows,
//! that reference is walked again at its real quantity, so a zero or
//! negative quantity never fails where the path-by-path walk would not.

use std::collections::HashMap;

use cookbook_store::EntryStore;
use cookbook_types::{Entry, Recipe, RequiredItem};

use crate::config::ResolverConfig;
use crate::error::{ResolveError, Result};
use crate::totals::IngredientTotals;

/// Expands recipes read from an [`EntryStore`]. Never writes to the store.
pub struct Resolver<'a> {
    store: &'a dyn EntryStore,
    config: ResolverConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a dyn EntryStore, config: ResolverConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub(crate) fn store(&self) -> &'a dyn EntryStore {
        self.store
    }

    /// Flatten `items` into per-ingredient totals.
    ///
    /// Each root item `(name, quantity)` contributes `quantity` times the
    /// expansion of `name`. Any unresolvable name aborts the whole call.
    pub fn resolve(&self, items: &[RequiredItem]) -> Result<IngredientTotals> {
        let mut totals = IngredientTotals::new();
        Expansion::new(self).expand_items(items, 1, 1, &mut totals)?;
        Ok(totals)
    }

    /// Flatten a stored recipe. The recipe counts as being on the expansion
    /// path, so a child that leads back to it is a cycle.
    pub fn resolve_recipe(&self, recipe: &Recipe) -> Result<IngredientTotals> {
        let mut totals = IngredientTotals::new();
        let mut expansion = Expansion::new(self);
        expansion.path.push(recipe.name.clone());
        expansion.expand_items(&recipe.required_items, 1, 1, &mut totals)?;
        Ok(totals)
    }
}

/// A sub-recipe expanded at unit quantity.
struct Unit {
    totals: IngredientTotals,
    /// Levels below the recipe itself; 0 for a recipe with no items.
    height: usize,
}

enum Memo {
    Unit(Unit),
    /// The unit expansion overflowed; references are walked directly.
    Overflowed,
}

/// State for one resolution call.
struct Expansion<'r, 'a> {
    resolver: &'r Resolver<'a>,
    /// Recipes currently being expanded, outermost first.
    path: Vec<String>,
    expanded: HashMap<String, Memo>,
}

impl<'r, 'a> Expansion<'r, 'a> {
    fn new(resolver: &'r Resolver<'a>) -> Self {
        Self {
            resolver,
            path: Vec::new(),
            expanded: HashMap::new(),
        }
    }

    /// Expand `items` sitting at `depth`, each scaled by `multiplier`.
    /// Returns the height of the tallest item.
    fn expand_items(
        &mut self,
        items: &[RequiredItem],
        multiplier: i64,
        depth: usize,
        totals: &mut IngredientTotals,
    ) -> Result<usize> {
        let mut height = 0;
        for item in items {
            let quantity =
                multiplier
                    .checked_mul(item.quantity)
                    .ok_or_else(|| ResolveError::QuantityOverflow {
                        name: item.name.clone(),
                    })?;
            height = height.max(self.expand(&item.name, quantity, depth, totals)?);
        }
        Ok(height)
    }

    /// Add `quantity` units of `name` to `totals`. Returns how many levels
    /// below `depth` the expansion reached.
    fn expand(
        &mut self,
        name: &str,
        quantity: i64,
        depth: usize,
        totals: &mut IngredientTotals,
    ) -> Result<usize> {
        let max_depth = self.resolver.config.max_depth;
        if depth > max_depth {
            return Err(ResolveError::DepthExceeded {
                name: name.to_string(),
                max_depth,
            });
        }

        let entry = self
            .resolver
            .store
            .get(name)?
            .ok_or_else(|| ResolveError::UnknownEntry {
                name: name.to_string(),
            })?;

        let recipe = match entry {
            Entry::Ingredient(_) => {
                totals
                    .add(name, quantity)
                    .ok_or_else(|| ResolveError::QuantityOverflow {
                        name: name.to_string(),
                    })?;
                return Ok(0);
            }
            Entry::Recipe(recipe) => recipe,
        };

        if let Some(start) = self.path.iter().position(|p| p == name) {
            let mut cycle = self.path[start..].to_vec();
            cycle.push(name.to_string());
            tracing::debug!(cycle = ?cycle, "cyclic recipe definition");
            return Err(ResolveError::CyclicDefinition { cycle });
        }

        if !self.expanded.contains_key(name) {
            tracing::trace!(recipe = name, depth, "expanding recipe");
            let mut unit = IngredientTotals::new();
            self.path.push(recipe.name.clone());
            let expanded = self.expand_items(&recipe.required_items, 1, depth + 1, &mut unit);
            self.path.pop();
            let memo = match expanded {
                Ok(below) => Memo::Unit(Unit {
                    totals: unit,
                    height: if recipe.required_items.is_empty() {
                        0
                    } else {
                        below + 1
                    },
                }),
                Err(ResolveError::QuantityOverflow { .. }) => Memo::Overflowed,
                Err(err) => return Err(err),
            };
            self.expanded.insert(recipe.name.clone(), memo);
        }

        match self.expanded.get(name) {
            Some(Memo::Unit(unit)) => {
                // A reused expansion may now sit deeper than where it was first met.
                if depth + unit.height > max_depth {
                    return Err(ResolveError::DepthExceeded {
                        name: name.to_string(),
                        max_depth,
                    });
                }
                if totals.add_scaled(&unit.totals, quantity).is_ok() {
                    return Ok(unit.height);
                }
            }
            Some(Memo::Overflowed) => {}
            None => {
                return Err(ResolveError::UnknownEntry {
                    name: name.to_string(),
                })
            }
        }

        tracing::trace!(recipe = name, quantity, "unit overflowed, walking directly");
        self.expand_direct(&recipe, quantity, depth, totals)
    }

    /// Walk `recipe`'s items at `quantity` without going through its unit
    /// expansion. Children still use theirs.
    fn expand_direct(
        &mut self,
        recipe: &Recipe,
        quantity: i64,
        depth: usize,
        totals: &mut IngredientTotals,
    ) -> Result<usize> {
        self.path.push(recipe.name.clone());
        let expanded = self.expand_items(&recipe.required_items, quantity, depth + 1, totals);
        self.path.pop();
        let below = expanded?;
        Ok(if recipe.required_items.is_empty() {
            0
        } else {
            below + 1
        })
    }
}
