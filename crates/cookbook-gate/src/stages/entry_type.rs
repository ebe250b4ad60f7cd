use cookbook_types::{EntryKind, EntryRecord};

use crate::error::{GateError, Rejection};
use crate::stage::{EntryStage, GateContext, StageDecision};

/// Checks that `type` is exactly `"recipe"` or `"ingredient"`.
pub struct EntryTypeStage;

impl EntryStage for EntryTypeStage {
    fn name(&self) -> &str {
        "entry-type"
    }

    fn evaluate(
        &self,
        record: &EntryRecord,
        _context: &GateContext<'_>,
    ) -> Result<StageDecision, GateError> {
        match record.entry_type.as_deref().and_then(EntryKind::parse) {
            Some(_) => Ok(StageDecision::Pass),
            None => Ok(StageDecision::Reject(Rejection::InvalidEntryType {
                found: record.entry_type.clone(),
            })),
        }
    }
}
