use cookbook_types::EntryRecord;

use crate::error::{GateError, Rejection};
use crate::stage::{EntryStage, GateContext, StageDecision};

/// The name must be present and not yet taken by any entry, whatever its type.
pub struct UniqueNameStage;

impl EntryStage for UniqueNameStage {
    fn name(&self) -> &str {
        "unique-name"
    }

    fn evaluate(
        &self,
        record: &EntryRecord,
        context: &GateContext<'_>,
    ) -> Result<StageDecision, GateError> {
        let Some(name) = record.name.as_deref() else {
            return Ok(StageDecision::Reject(Rejection::MissingName));
        };

        if context.store.contains(name)? {
            return Ok(StageDecision::Reject(Rejection::DuplicateName {
                name: name.to_string(),
            }));
        }

        Ok(StageDecision::Pass)
    }
}
