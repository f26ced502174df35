use super::{
    row_ops, DatasetAccumulator, DatasetReport, DriverError, FailureSummary, ProcessingConfig,
    RowFailure, TripRow,
};
use crate::model::RouteError;
use rayon::prelude::*;

/// runs the per-row pipeline over a dataset and reduces the per-row transitions
/// into one aggregate.
///
/// with `parallelism == 1` rows are folded in a single sequential pass. otherwise a
/// dedicated thread pool folds partitions of the rows into partial accumulators
/// which are then merged; the merge is associative and commutative so the final
/// counts do not depend on scheduling.
#[derive(Clone, Debug)]
pub struct DatasetDriver {
    pub config: ProcessingConfig,
    pub parallelism: usize,
}

impl DatasetDriver {
    pub fn new(config: ProcessingConfig, parallelism: usize) -> DatasetDriver {
        DatasetDriver {
            config,
            parallelism,
        }
    }

    pub fn run(&self, rows: &[TripRow]) -> Result<DatasetReport, DriverError> {
        let step = |acc: DatasetAccumulator, row: &TripRow| {
            match row_ops::process_row(row.row_id, &row.itinerary, &self.config) {
                Ok(outcome) => acc.push_outcome(outcome),
                Err(e) => {
                    log::debug!("row {} excluded: {e}", row.row_id);
                    acc.push_failure(RowFailure::new(row.row_id, &e))
                }
            }
        };

        let accumulator = match self.parallelism {
            0 => return Err(DriverError::InvalidParallelism),
            1 => rows.iter().fold(DatasetAccumulator::default(), step),
            n => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
                pool.install(|| {
                    rows.par_iter()
                        .fold(DatasetAccumulator::default, step)
                        .reduce(DatasetAccumulator::default, DatasetAccumulator::merge)
                })
            }
        };

        let DatasetAccumulator {
            counts,
            mut outcomes,
            mut failures,
        } = accumulator;
        outcomes.sort_by_key(|o| o.row_id);
        failures.sort_by_key(|f| f.row_id);
        let summary = FailureSummary::new(rows.len(), &failures);
        log::info!(
            "processed {} rows, {} succeeded with {} distinct transition keys. {}",
            rows.len(),
            summary.succeeded_rows(),
            counts.len(),
            summary
        );
        Ok(DatasetReport {
            counts,
            outcomes,
            failures,
            summary,
        })
    }
}

/// applies a fallible per-row function to every row under the same failure policy as
/// [`DatasetDriver::run`]: failing rows are recorded and skipped. results and failures
/// are returned ordered by row id.
pub fn try_map_rows<T, F>(
    rows: &[TripRow],
    parallelism: usize,
    op: F,
) -> Result<(Vec<(usize, T)>, Vec<RowFailure>), DriverError>
where
    T: Send,
    F: Fn(&TripRow) -> Result<T, RouteError> + Sync,
{
    let apply = |row: &TripRow| (row.row_id, op(row));
    let results: Vec<(usize, Result<T, RouteError>)> = match parallelism {
        0 => return Err(DriverError::InvalidParallelism),
        1 => rows.iter().map(apply).collect(),
        n => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
            pool.install(|| rows.par_iter().map(apply).collect())
        }
    };

    let mut successes = vec![];
    let mut failures = vec![];
    for (row_id, result) in results {
        match result {
            Ok(value) => successes.push((row_id, value)),
            Err(e) => {
                log::debug!("row {row_id} excluded: {e}");
                failures.push(RowFailure::new(row_id, &e));
            }
        }
    }
    successes.sort_by_key(|(row_id, _)| *row_id);
    failures.sort_by_key(|f| f.row_id);
    Ok((successes, failures))
}
