use cookbook_types::{EntryKind, EntryRecord};

use crate::error::{GateError, Rejection};
use crate::stage::{EntryStage, GateContext, StageDecision};

/// Ingredients must carry a `cookTime` of zero or more. Recipes pass.
pub struct CookTimeStage;

impl EntryStage for CookTimeStage {
    fn name(&self) -> &str {
        "cook-time"
    }

    fn evaluate(
        &self,
        record: &EntryRecord,
        _context: &GateContext<'_>,
    ) -> Result<StageDecision, GateError> {
        let is_ingredient =
            record.entry_type.as_deref().and_then(EntryKind::parse) == Some(EntryKind::Ingredient);
        if !is_ingredient {
            return Ok(StageDecision::Pass);
        }

        match record.cook_time {
            Some(t) if t >= 0 => Ok(StageDecision::Pass),
            found => Ok(StageDecision::Reject(Rejection::InvalidCookTime {
                name: record.name.clone(),
                found,
            })),
        }
    }
}
