use std::time::Duration;

use cookbook_store::EntryStore;
use cookbook_types::EntryRecord;

use crate::error::{GateError, Rejection};

/// The outcome of a single stage evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageDecision {
    /// The stage passed; proceed to the next stage.
    Pass,
    /// The submission must be refused.
    Reject(Rejection),
}

impl StageDecision {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Recorded result from a completed stage evaluation.
#[derive(Clone, Debug)]
pub struct StageResult {
    pub stage_name: String,
    pub passed: bool,
    pub elapsed: Duration,
}

/// What every stage can see besides the submission itself.
pub struct GateContext<'a> {
    /// The store the submission is headed for. Stages only read it.
    pub store: &'a dyn EntryStore,
}

impl<'a> GateContext<'a> {
    pub fn new(store: &'a dyn EntryStore) -> Self {
        Self { store }
    }
}

/// A single evaluation stage in the admission pipeline.
///
/// Stages are evaluated in order; the first `Reject` stops the pipeline. An
/// `Err` means the stage itself could not run (e.g. the store lock was
/// poisoned), which is distinct from the submission being invalid.
pub trait EntryStage: Send + Sync {
    /// Human-readable name of this stage (e.g. "entry-type").
    fn name(&self) -> &str;

    fn evaluate(
        &self,
        record: &EntryRecord,
        context: &GateContext<'_>,
    ) -> Result<StageDecision, GateError>;
}
