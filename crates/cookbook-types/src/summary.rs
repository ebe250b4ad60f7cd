use serde::{Deserialize, Serialize};

/// Total quantity of one leaf ingredient in a flattened recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    pub name: String,
    pub quantity: i64,
}

impl IngredientQuantity {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// A recipe flattened to its leaf ingredients.
///
/// `ingredients` is in discovery order: the order in which a depth-first,
/// pre-order walk of the recipe first reaches each ingredient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub name: String,
    pub cook_time: i64,
    pub ingredients: Vec<IngredientQuantity>,
}

impl RecipeSummary {
    /// Quantity of `name` in the summary, if present.
    pub fn quantity_of(&self, name: &str) -> Option<i64> {
        self.ingredients
            .iter()
            .find(|i| i.name == name)
            .map(|i| i.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_wire_shape() {
        let summary = RecipeSummary {
            name: "Cake".into(),
            cook_time: 10,
            ingredients: vec![
                IngredientQuantity::new("Flour", 6),
                IngredientQuantity::new("Egg", 2),
            ],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Cake",
                "cookTime": 10,
                "ingredients": [
                    {"name": "Flour", "quantity": 6},
                    {"name": "Egg", "quantity": 2}
                ]
            })
        );
        assert_eq!(summary.quantity_of("Egg"), Some(2));
        assert_eq!(summary.quantity_of("Salt"), None);
    }
}
