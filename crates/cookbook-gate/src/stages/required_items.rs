use std::collections::HashSet;

use cookbook_types::{EntryKind, EntryRecord};

use crate::error::{GateError, Rejection};
use crate::stage::{EntryStage, GateContext, StageDecision};

/// Recipes must carry `requiredItems` (possibly empty), every item must have
/// a name and a quantity, and no child may be listed twice. Ingredients pass.
///
/// Item names are not looked up in the store: forward references are legal.
pub struct RequiredItemsStage;

impl EntryStage for RequiredItemsStage {
    fn name(&self) -> &str {
        "required-items"
    }

    fn evaluate(
        &self,
        record: &EntryRecord,
        _context: &GateContext<'_>,
    ) -> Result<StageDecision, GateError> {
        let is_recipe =
            record.entry_type.as_deref().and_then(EntryKind::parse) == Some(EntryKind::Recipe);
        if !is_recipe {
            return Ok(StageDecision::Pass);
        }

        let recipe = record.name.clone().unwrap_or_default();
        let Some(items) = record.required_items.as_ref() else {
            return Ok(StageDecision::Reject(Rejection::MissingRequiredItems {
                name: recipe,
            }));
        };

        let mut seen = HashSet::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let Some(child) = item.name.as_deref() else {
                return Ok(StageDecision::Reject(Rejection::InvalidRequiredItem {
                    recipe,
                    index,
                }));
            };
            if !seen.insert(child) {
                return Ok(StageDecision::Reject(Rejection::DuplicateChildReference {
                    recipe,
                    child: child.to_string(),
                }));
            }
            if item.quantity.is_none() {
                return Ok(StageDecision::Reject(Rejection::InvalidRequiredItem {
                    recipe,
                    index,
                }));
            }
        }

        Ok(StageDecision::Pass)
    }
}

#[cfg(test)]
mod tests {
    use cookbook_types::RequiredItemRecord;

    use super::*;
    use crate::stages::testing::run;

    #[test]
    fn distinct_children_pass() {
        let record = EntryRecord::recipe(
            "Batter",
            vec![
                RequiredItemRecord::new("Flour", 3),
                RequiredItemRecord::new("Egg", 1),
            ],
        );
        assert!(run(&RequiredItemsStage, &record).is_pass());
    }

    #[test]
    fn empty_list_passes() {
        assert!(run(&RequiredItemsStage, &EntryRecord::recipe("Air", vec![])).is_pass());
    }

    #[test]
    fn repeated_child_rejected_regardless_of_quantity() {
        let record = EntryRecord::recipe(
            "Pancake",
            vec![
                RequiredItemRecord::new("A", 1),
                RequiredItemRecord::new("A", 7),
            ],
        );
        assert_eq!(
            run(&RequiredItemsStage, &record),
            StageDecision::Reject(Rejection::DuplicateChildReference {
                recipe: "Pancake".into(),
                child: "A".into()
            })
        );
    }

    #[test]
    fn missing_list_rejected() {
        let mut record = EntryRecord::recipe("Cake", vec![]);
        record.required_items = None;
        assert_eq!(
            run(&RequiredItemsStage, &record),
            StageDecision::Reject(Rejection::MissingRequiredItems {
                name: "Cake".into()
            })
        );
    }

    #[test]
    fn incomplete_item_rejected() {
        let nameless = EntryRecord::recipe(
            "Cake",
            vec![
                RequiredItemRecord::new("Egg", 1),
                RequiredItemRecord {
                    name: None,
                    quantity: Some(2),
                },
            ],
        );
        assert_eq!(
            run(&RequiredItemsStage, &nameless),
            StageDecision::Reject(Rejection::InvalidRequiredItem {
                recipe: "Cake".into(),
                index: 1
            })
        );

        let countless = EntryRecord::recipe(
            "Cake",
            vec![RequiredItemRecord {
                name: Some("Egg".into()),
                quantity: None,
            }],
        );
        assert!(!run(&RequiredItemsStage, &countless).is_pass());
    }

    #[test]
    fn ingredients_pass() {
        assert!(run(&RequiredItemsStage, &EntryRecord::ingredient("Egg", 1)).is_pass());
    }
}
