use std::collections::HashMap;

/// Per-ingredient running totals, kept in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngredientTotals {
    order: Vec<(String, i64)>,
    index: HashMap<String, usize>,
}

impl IngredientTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` to `name`'s total, appending `name` if it is new.
    ///
    /// Returns `None` on overflow, leaving the total unchanged.
    pub fn add(&mut self, name: &str, quantity: i64) -> Option<()> {
        match self.index.get(name) {
            Some(&slot) => {
                let total = &mut self.order[slot].1;
                *total = total.checked_add(quantity)?;
            }
            None => {
                self.index.insert(name.to_string(), self.order.len());
                self.order.push((name.to_string(), quantity));
            }
        }
        Some(())
    }

    /// Add `factor` times every total in `other`, in `other`'s order.
    ///
    /// Returns the name whose total overflowed, if any. On overflow no total
    /// is changed.
    pub fn add_scaled(&mut self, other: &IngredientTotals, factor: i64) -> Result<(), String> {
        let mut updates = Vec::with_capacity(other.len());
        for (name, quantity) in other.iter() {
            let scaled = quantity
                .checked_mul(factor)
                .and_then(|scaled| self.get(name).unwrap_or(0).checked_add(scaled))
                .ok_or_else(|| name.to_string())?;
            updates.push((name, scaled));
        }
        for (name, total) in updates {
            match self.index.get(name) {
                Some(&slot) => self.order[slot].1 = total,
                None => {
                    self.index.insert(name.to_string(), self.order.len());
                    self.order.push((name.to_string(), total));
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.index.get(name).map(|&slot| self.order[slot].1)
    }

    /// Totals in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.order.iter().map(|(name, total)| (name.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_discovery_order() {
        let mut totals = IngredientTotals::new();
        totals.add("Flour", 3).unwrap();
        totals.add("Egg", 1).unwrap();
        totals.add("Flour", 3).unwrap();

        let seen: Vec<_> = totals.iter().collect();
        assert_eq!(seen, vec![("Flour", 6), ("Egg", 1)]);
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn add_scaled_multiplies_each_total() {
        let mut unit = IngredientTotals::new();
        unit.add("Flour", 3).unwrap();
        unit.add("Egg", 1).unwrap();

        let mut totals = IngredientTotals::new();
        totals.add("Egg", 5).unwrap();
        totals.add_scaled(&unit, 2).unwrap();

        assert_eq!(totals.get("Egg"), Some(7));
        assert_eq!(totals.get("Flour"), Some(6));
        let names: Vec<_> = totals.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Egg", "Flour"]);
    }

    #[test]
    fn overflow_is_reported() {
        let mut totals = IngredientTotals::new();
        totals.add("Salt", i64::MAX).unwrap();
        assert!(totals.add("Salt", 1).is_none());
        assert_eq!(totals.get("Salt"), Some(i64::MAX));

        let mut unit = IngredientTotals::new();
        unit.add("Pepper", i64::MAX / 2 + 1).unwrap();
        assert_eq!(totals.add_scaled(&unit, 2), Err("Pepper".to_string()));
    }

    #[test]
    fn failed_add_scaled_leaves_totals_untouched() {
        let mut unit = IngredientTotals::new();
        unit.add("Oil", 4).unwrap();
        unit.add("Salt", 1).unwrap();

        let mut totals = IngredientTotals::new();
        totals.add("Salt", i64::MAX).unwrap();
        assert_eq!(totals.add_scaled(&unit, 1), Err("Salt".to_string()));
        assert_eq!(totals.get("Oil"), None);
        assert_eq!(totals.get("Salt"), Some(i64::MAX));
        assert_eq!(totals.len(), 1);
    }
}
