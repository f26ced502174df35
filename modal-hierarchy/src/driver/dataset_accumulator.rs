use super::{RowFailure, RowOutcome};
use crate::aggregate::AggregateCounts;
use crate::model::Phase;

/// the explicit accumulator threaded through the dataset fold. partial accumulators
/// built by different workers are combined with [`DatasetAccumulator::merge`].
#[derive(Clone, Debug, Default)]
pub struct DatasetAccumulator {
    pub counts: AggregateCounts,
    pub outcomes: Vec<RowOutcome>,
    pub failures: Vec<RowFailure>,
}

impl DatasetAccumulator {
    /// folds a row's transitions into the counts and keeps the outcome.
    pub fn push_outcome(mut self, outcome: RowOutcome) -> Self {
        self.counts
            .add_all(outcome.ascending_transitions.iter().cloned(), Phase::Ascending);
        self.counts.add_all(
            outcome.descending_transitions.iter().cloned(),
            Phase::Descending,
        );
        self.outcomes.push(outcome);
        self
    }

    pub fn push_failure(mut self, failure: RowFailure) -> Self {
        self.failures.push(failure);
        self
    }

    pub fn merge(mut self, other: DatasetAccumulator) -> Self {
        self.counts = self.counts.merge(other.counts);
        self.outcomes.extend(other.outcomes);
        self.failures.extend(other.failures);
        self
    }
}
