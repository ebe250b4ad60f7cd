use cookbook_types::{Entry, IngredientQuantity, RecipeSummary};

use crate::error::{ResolveError, Result};
use crate::resolver::Resolver;

impl Resolver<'_> {
    /// Summarize a stored recipe: its leaf ingredients with total quantities,
    /// in discovery order, and the total cook time
    /// `sum(quantity * ingredient.cook_time)`.
    pub fn summarize(&self, recipe_name: &str) -> Result<RecipeSummary> {
        let entry = self
            .store()
            .get(recipe_name)?
            .ok_or_else(|| ResolveError::UnknownEntry {
                name: recipe_name.to_string(),
            })?;
        let Entry::Recipe(recipe) = entry else {
            return Err(ResolveError::NotARecipe {
                name: recipe_name.to_string(),
            });
        };

        let totals = self.resolve_recipe(&recipe)?;

        let mut cook_time: i64 = 0;
        let mut ingredients = Vec::with_capacity(totals.len());
        for (name, quantity) in totals.iter() {
            // Re-read: resolution saw an ingredient here, but the store is
            // shared and this is a separate read.
            let ingredient = self
                .store()
                .get(name)?
                .and_then(|e| e.as_ingredient().cloned())
                .ok_or_else(|| ResolveError::UnknownEntry {
                    name: name.to_string(),
                })?;

            cook_time = i64::try_from(ingredient.cook_time)
                .ok()
                .and_then(|per_unit| quantity.checked_mul(per_unit))
                .and_then(|t| cook_time.checked_add(t))
                .ok_or_else(|| ResolveError::QuantityOverflow {
                    name: name.to_string(),
                })?;
            ingredients.push(IngredientQuantity::new(name, quantity));
        }

        tracing::debug!(
            recipe = recipe_name,
            cook_time,
            ingredients = ingredients.len(),
            "recipe summarized"
        );

        Ok(RecipeSummary {
            name: recipe_name.to_string(),
            cook_time,
            ingredients,
        })
    }
}

#[cfg(test)]
mod tests {
    use cookbook_gate::EntryGate;
    use cookbook_store::InMemoryEntryStore;
    use cookbook_types::{EntryRecord, RequiredItemRecord};

    use super::*;
    use crate::config::ResolverConfig;

    fn admit_all(store: &InMemoryEntryStore, records: Vec<EntryRecord>) {
        let gate = EntryGate::with_default_stages();
        for record in records {
            gate.admit(record, store).unwrap();
        }
    }

    fn summarize(store: &InMemoryEntryStore, name: &str) -> Result<RecipeSummary> {
        Resolver::new(store, ResolverConfig::default()).summarize(name)
    }

    fn cake_store() -> InMemoryEntryStore {
        let store = InMemoryEntryStore::new();
        admit_all(
            &store,
            vec![
                EntryRecord::recipe("Cake", vec![RequiredItemRecord::new("Batter", 2)]),
                EntryRecord::recipe(
                    "Batter",
                    vec![
                        RequiredItemRecord::new("Flour", 3),
                        RequiredItemRecord::new("Egg", 1),
                    ],
                ),
                EntryRecord::ingredient("Flour", 1),
                EntryRecord::ingredient("Egg", 2),
            ],
        );
        store
    }

    #[test]
    fn cake_summary() {
        let summary = summarize(&cake_store(), "Cake").unwrap();
        assert_eq!(
            summary,
            RecipeSummary {
                name: "Cake".into(),
                cook_time: 10,
                ingredients: vec![
                    IngredientQuantity::new("Flour", 6),
                    IngredientQuantity::new("Egg", 2),
                ],
            }
        );
    }

    #[test]
    fn skibidi_spaghetti_summary() {
        let store = InMemoryEntryStore::new();
        admit_all(
            &store,
            vec![
                EntryRecord::recipe(
                    "Skibidi Spaghetti",
                    vec![
                        RequiredItemRecord::new("Meatball", 3),
                        RequiredItemRecord::new("Pasta", 1),
                        RequiredItemRecord::new("Tomato", 2),
                    ],
                ),
                EntryRecord::recipe(
                    "Meatball",
                    vec![
                        RequiredItemRecord::new("Beef", 2),
                        RequiredItemRecord::new("Egg", 1),
                    ],
                ),
                EntryRecord::recipe(
                    "Pasta",
                    vec![
                        RequiredItemRecord::new("Flour", 3),
                        RequiredItemRecord::new("Egg", 1),
                    ],
                ),
                EntryRecord::ingredient("Beef", 5),
                EntryRecord::ingredient("Egg", 3),
                EntryRecord::ingredient("Flour", 0),
                EntryRecord::ingredient("Tomato", 2),
            ],
        );

        let summary = summarize(&store, "Skibidi Spaghetti").unwrap();
        // Beef 6*5 + Egg 4*3 + Flour 3*0 + Tomato 2*2.
        assert_eq!(summary.cook_time, 46);
        assert_eq!(
            summary.ingredients,
            vec![
                IngredientQuantity::new("Beef", 6),
                IngredientQuantity::new("Egg", 4),
                IngredientQuantity::new("Flour", 3),
                IngredientQuantity::new("Tomato", 2),
            ]
        );
    }

    #[test]
    fn unknown_name_fails() {
        assert_eq!(
            summarize(&cake_store(), "Pie").unwrap_err(),
            ResolveError::UnknownEntry { name: "Pie".into() }
        );
    }

    #[test]
    fn ingredient_name_is_not_a_recipe() {
        assert_eq!(
            summarize(&cake_store(), "Egg").unwrap_err(),
            ResolveError::NotARecipe { name: "Egg".into() }
        );
    }

    #[test]
    fn forward_reference_that_never_arrives_fails_at_summary_time() {
        let store = InMemoryEntryStore::new();
        admit_all(
            &store,
            vec![EntryRecord::recipe(
                "Toast",
                vec![RequiredItemRecord::new("Bread", 1)],
            )],
        );
        assert_eq!(
            summarize(&store, "Toast").unwrap_err(),
            ResolveError::UnknownEntry {
                name: "Bread".into()
            }
        );

        admit_all(&store, vec![EntryRecord::ingredient("Bread", 4)]);
        assert_eq!(summarize(&store, "Toast").unwrap().cook_time, 4);
    }

    #[test]
    fn cyclic_recipes_terminate() {
        let store = InMemoryEntryStore::new();
        admit_all(
            &store,
            vec![
                EntryRecord::recipe("A", vec![RequiredItemRecord::new("B", 1)]),
                EntryRecord::recipe("B", vec![RequiredItemRecord::new("A", 1)]),
            ],
        );
        assert!(matches!(
            summarize(&store, "A").unwrap_err(),
            ResolveError::CyclicDefinition { .. }
        ));
    }

    #[test]
    fn empty_recipe_summarizes_to_nothing() {
        let store = InMemoryEntryStore::new();
        admit_all(&store, vec![EntryRecord::recipe("Air", vec![])]);
        let summary = summarize(&store, "Air").unwrap();
        assert_eq!(summary.cook_time, 0);
        assert!(summary.ingredients.is_empty());
    }

    #[test]
    fn cook_time_overflow_is_an_error() {
        let store = InMemoryEntryStore::new();
        admit_all(
            &store,
            vec![
                EntryRecord::ingredient("Slow", i64::MAX),
                EntryRecord::recipe("Slower", vec![RequiredItemRecord::new("Slow", 2)]),
            ],
        );
        assert_eq!(
            summarize(&store, "Slower").unwrap_err(),
            ResolveError::QuantityOverflow {
                name: "Slow".into()
            }
        );
    }
}
