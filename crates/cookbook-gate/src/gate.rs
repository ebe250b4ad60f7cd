use std::time::{Duration, Instant};

use cookbook_store::{EntryStore, StoreError};
use cookbook_types::{Entry, EntryKind, EntryRecord, RequiredItem};

use crate::error::{GateError, Rejection};
use crate::stage::{EntryStage, GateContext, StageDecision, StageResult};
use crate::stages::{CookTimeStage, EntryTypeStage, RequiredItemsStage, UniqueNameStage};

// ---------------------------------------------------------------------------
// GateResult
// ---------------------------------------------------------------------------

/// The outcome of running a submission through the stage pipeline.
#[derive(Clone, Debug)]
pub struct GateResult {
    /// `None` if every stage passed.
    pub rejection: Option<Rejection>,
    /// Per-stage results in evaluation order.
    pub stage_results: Vec<StageResult>,
    /// Total wall-clock time for the pipeline evaluation.
    pub elapsed: Duration,
}

impl GateResult {
    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

// ---------------------------------------------------------------------------
// EntryGate
// ---------------------------------------------------------------------------

/// The admission gate: an ordered pipeline of stages in front of the store.
///
/// [`EntryGate::admit`] is the only write path into an [`EntryStore`].
pub struct EntryGate {
    stages: Vec<Box<dyn EntryStage>>,
}

impl EntryGate {
    /// Create a gate with an empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create a gate with the default pipeline:
    /// EntryType -> CookTime -> UniqueName -> RequiredItems
    pub fn with_default_stages() -> Self {
        let mut gate = Self::new();
        gate.add_stage(Box::new(EntryTypeStage));
        gate.add_stage(Box::new(CookTimeStage));
        gate.add_stage(Box::new(UniqueNameStage));
        gate.add_stage(Box::new(RequiredItemsStage));
        gate
    }

    /// Append a stage to the end of the pipeline.
    pub fn add_stage(&mut self, stage: Box<dyn EntryStage>) {
        self.stages.push(stage);
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Run `record` through the pipeline without writing anything.
    ///
    /// The pipeline is fail-fast: the first rejecting stage stops evaluation.
    pub fn evaluate(
        &self,
        record: &EntryRecord,
        store: &dyn EntryStore,
    ) -> Result<GateResult, GateError> {
        let pipeline_start = Instant::now();
        let context = GateContext::new(store);
        let mut stage_results = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let stage_start = Instant::now();
            let decision = stage.evaluate(record, &context)?;

            stage_results.push(StageResult {
                stage_name: stage.name().to_string(),
                passed: decision.is_pass(),
                elapsed: stage_start.elapsed(),
            });

            if let StageDecision::Reject(rejection) = decision {
                tracing::debug!(stage = stage.name(), %rejection, "stage rejected entry");
                return Ok(GateResult {
                    rejection: Some(rejection),
                    stage_results,
                    elapsed: pipeline_start.elapsed(),
                });
            }
        }

        Ok(GateResult {
            rejection: None,
            stage_results,
            elapsed: pipeline_start.elapsed(),
        })
    }

    /// Validate `record` and, if every stage passes, install it in `store`.
    ///
    /// Either the whole entry is stored or nothing is. A name collision
    /// reported by the store itself (another writer got there between
    /// validation and insertion) is a [`Rejection::DuplicateName`].
    pub fn admit(&self, record: EntryRecord, store: &dyn EntryStore) -> Result<Entry, GateError> {
        let result = self.evaluate(&record, store)?;
        if let Some(rejection) = result.rejection {
            return Err(rejection.into());
        }

        let entry = into_entry(record)?;
        match store.insert(entry.clone()) {
            Ok(()) => {
                tracing::info!(
                    name = entry.name(),
                    kind = %entry.kind(),
                    elapsed_us = result.elapsed.as_micros() as u64,
                    "entry admitted"
                );
                Ok(entry)
            }
            Err(StoreError::DuplicateName { name }) => {
                Err(Rejection::DuplicateName { name }.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for EntryGate {
    fn default() -> Self {
        Self::with_default_stages()
    }
}

/// Build the typed entry from an accepted record.
///
/// A gate built with [`EntryGate::new`] may lack the default stages, so
/// anything they would have rejected is rejected here too.
fn into_entry(record: EntryRecord) -> Result<Entry, Rejection> {
    let kind = record
        .entry_type
        .as_deref()
        .and_then(EntryKind::parse)
        .ok_or_else(|| Rejection::InvalidEntryType {
            found: record.entry_type.clone(),
        })?;
    let name = record.name.ok_or(Rejection::MissingName)?;

    match kind {
        EntryKind::Ingredient => {
            let cook_time = record
                .cook_time
                .and_then(|t| u64::try_from(t).ok())
                .ok_or_else(|| Rejection::InvalidCookTime {
                    name: Some(name.clone()),
                    found: record.cook_time,
                })?;
            Ok(Entry::ingredient(name, cook_time))
        }
        EntryKind::Recipe => {
            let Some(items) = record.required_items else {
                return Err(Rejection::MissingRequiredItems { name });
            };
            let mut required = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                match (item.name, item.quantity) {
                    (Some(child), Some(quantity)) => {
                        required.push(RequiredItem::new(child, quantity))
                    }
                    _ => {
                        return Err(Rejection::InvalidRequiredItem {
                            recipe: name,
                            index,
                        })
                    }
                }
            }
            Ok(Entry::recipe(name, required))
        }
    }
}

#[cfg(test)]
mod tests {
    use cookbook_store::InMemoryEntryStore;
    use cookbook_types::RequiredItemRecord;

    use super::*;

    fn rejection_of(result: Result<Entry, GateError>) -> Rejection {
        match result {
            Err(GateError::Rejected(r)) => r,
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn default_gate_has_four_stages() {
        assert_eq!(EntryGate::with_default_stages().stage_count(), 4);
        assert_eq!(EntryGate::new().stage_count(), 0);
    }

    #[test]
    fn admits_ingredient() {
        let store = InMemoryEntryStore::new();
        let gate = EntryGate::default();

        let entry = gate.admit(EntryRecord::ingredient("Egg", 2), &store).unwrap();
        assert_eq!(entry, Entry::ingredient("Egg", 2));
        assert_eq!(store.lookup("Egg").unwrap(), entry);
    }

    #[test]
    fn admits_recipe_with_forward_references() {
        let store = InMemoryEntryStore::new();
        let gate = EntryGate::default();

        let record = EntryRecord::recipe(
            "Cake",
            vec![RequiredItemRecord::new("Batter", 2)],
        );
        let entry = gate.admit(record, &store).unwrap();
        assert_eq!(
            entry,
            Entry::recipe("Cake", vec![RequiredItem::new("Batter", 2)])
        );
        assert!(!store.contains("Batter").unwrap());
    }

    #[test]
    fn zero_and_negative_quantities_are_admitted() {
        let store = InMemoryEntryStore::new();
        let record = EntryRecord::recipe(
            "Odd",
            vec![
                RequiredItemRecord::new("A", 0),
                RequiredItemRecord::new("B", -3),
            ],
        );
        assert!(EntryGate::default().admit(record, &store).is_ok());
    }

    #[test]
    fn second_entry_with_same_name_rejected_in_either_order() {
        let gate = EntryGate::default();

        let store = InMemoryEntryStore::new();
        gate.admit(EntryRecord::ingredient("Egg", 2), &store).unwrap();
        let err = gate.admit(EntryRecord::recipe("Egg", vec![]), &store);
        assert_eq!(
            rejection_of(err),
            Rejection::DuplicateName { name: "Egg".into() }
        );

        let store = InMemoryEntryStore::new();
        gate.admit(EntryRecord::recipe("Egg", vec![]), &store).unwrap();
        let err = gate.admit(EntryRecord::ingredient("Egg", 2), &store);
        assert_eq!(
            rejection_of(err),
            Rejection::DuplicateName { name: "Egg".into() }
        );
        assert!(store.lookup("Egg").unwrap().is_recipe());
    }

    #[test]
    fn checks_run_in_order() {
        let store = InMemoryEntryStore::new();
        let gate = EntryGate::default();
        gate.admit(EntryRecord::ingredient("Egg", 2), &store).unwrap();

        // Bad cook time wins over the duplicate name.
        let result = gate
            .evaluate(&EntryRecord::ingredient("Egg", -1), &store)
            .unwrap();
        assert!(!result.is_accepted());
        assert_eq!(result.stage_results.len(), 2);
        assert!(matches!(
            result.rejection,
            Some(Rejection::InvalidCookTime { .. })
        ));

        // Duplicate name wins over a repeated child.
        let record = EntryRecord::recipe(
            "Egg",
            vec![
                RequiredItemRecord::new("A", 1),
                RequiredItemRecord::new("A", 1),
            ],
        );
        let result = gate.evaluate(&record, &store).unwrap();
        assert_eq!(result.stage_results.len(), 3);
        assert_eq!(
            result.rejection,
            Some(Rejection::DuplicateName { name: "Egg".into() })
        );
    }

    #[test]
    fn rejected_entry_leaves_store_untouched() {
        let store = InMemoryEntryStore::new();
        let gate = EntryGate::default();

        let record = EntryRecord::recipe(
            "Pancake",
            vec![
                RequiredItemRecord::new("Milk", 1),
                RequiredItemRecord::new("Milk", 2),
            ],
        );
        assert!(gate.admit(record, &store).is_err());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn invalid_type_rejected_first() {
        let store = InMemoryEntryStore::new();
        let record = EntryRecord {
            entry_type: Some("snack".into()),
            name: None,
            cook_time: Some(-5),
            required_items: None,
        };
        let result = EntryGate::default().evaluate(&record, &store).unwrap();
        assert_eq!(result.stage_results.len(), 1);
        assert_eq!(
            result.rejection,
            Some(Rejection::InvalidEntryType {
                found: Some("snack".into())
            })
        );
    }

    #[test]
    fn accepted_result_records_every_stage() {
        let store = InMemoryEntryStore::new();
        let result = EntryGate::default()
            .evaluate(&EntryRecord::ingredient("Egg", 2), &store)
            .unwrap();
        assert!(result.is_accepted());
        assert_eq!(result.stage_results.len(), 4);
        assert!(result.stage_results.iter().all(|r| r.passed));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn empty_pipeline_still_refuses_unbuildable_records() {
        let store = InMemoryEntryStore::new();
        let gate = EntryGate::new();

        let mut record = EntryRecord::ingredient("Ice", -1);
        assert!(matches!(
            rejection_of(gate.admit(record.clone(), &store)),
            Rejection::InvalidCookTime { .. }
        ));

        record.entry_type = Some("ice".into());
        assert!(matches!(
            rejection_of(gate.admit(record, &store)),
            Rejection::InvalidEntryType { .. }
        ));
        assert!(store.is_empty().unwrap());
    }
}
