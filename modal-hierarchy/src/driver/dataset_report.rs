use super::{FailureSummary, RowFailure, RowOutcome};
use crate::aggregate::AggregateCounts;

/// result of a dataset run. outcomes and failures are ordered by row id so that
/// diagnostics are reproducible regardless of how rows were scheduled.
#[derive(Clone, Debug)]
pub struct DatasetReport {
    pub counts: AggregateCounts,
    pub outcomes: Vec<RowOutcome>,
    pub failures: Vec<RowFailure>,
    pub summary: FailureSummary,
}
